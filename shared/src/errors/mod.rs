//! Shared error response structure

use serde::{Deserialize, Serialize};

/// JSON error body returned by every endpoint: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Error messages returned to API clients
pub mod error_codes {
    pub const BODY_REQUIRED: &str = "Request body is required";
    pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
    pub const INVALID_LOGIN_REQUEST: &str = "Invalid login request";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
    pub const AUTH_HEADER_REQUIRED: &str = "Authorization header is required";
    pub const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid or expired token";
    pub const USER_ID_NOT_IN_TOKEN: &str = "User ID not found in token";
    pub const INVENTORY_UNAVAILABLE: &str = "Failed to retrieve inventory";
    pub const INTERNAL_ERROR: &str = "Internal server error";
    pub const NOT_FOUND: &str = "The requested resource was not found";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_to_single_field() {
        let body = serde_json::to_string(&ErrorResponse::new(error_codes::INVALID_CREDENTIALS)).unwrap();
        assert_eq!(body, r#"{"error":"Invalid credentials"}"#);
    }
}
