use serde::{Deserialize, Serialize};
use validator::Validate;

use gs_core::domain::value_objects::AuthResponse;

/// Body of `POST /api/login`
///
/// Both fields are optional at the parsing stage so that a missing field is
/// reported as such rather than as an unreadable body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 50))]
    pub username: Option<String>,

    #[validate(length(max = 255))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns both credentials when present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some((username, password))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: i64,
    pub username: String,
    pub access_token: String,
}

impl From<AuthResponse> for LoginResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            success: true,
            user_id: response.user_id,
            username: response.username,
            access_token: response.access_token,
        }
    }
}
