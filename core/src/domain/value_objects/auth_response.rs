//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

/// Result of a successful credential check
///
/// Carries the authenticated identity and a freshly issued access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Numeric user identifier
    pub user_id: i64,

    /// Login name as stored
    pub username: String,

    /// Signed bearer token
    pub access_token: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(user_id: i64, username: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            access_token: access_token.into(),
        }
    }
}
