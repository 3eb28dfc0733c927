//! Token entities for signed bearer credentials.
//!
//! A token is three base64url (no padding) segments joined by `.`:
//! the JSON header, the JSON claims, and the HMAC-SHA256 digest of
//! `header.claims`. Nothing about an issued token is stored server-side.

use serde::{Deserialize, Serialize};

/// Token lifetime (24 hours)
pub const TOKEN_VALIDITY_SECONDS: i64 = 86_400;

/// Signature algorithm advertised in the header
pub const TOKEN_ALGORITHM: &str = "HS256";

/// Token type advertised in the header
pub const TOKEN_TYPE: &str = "JWT";

/// Prefix stripped from presented tokens, including its single trailing space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Fixed token header: `{"alg":"HS256","typ":"JWT"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: TOKEN_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Claims structure for the token payload
///
/// Serializes in field order as
/// `{"userId":<int>,"username":<string>,"iat":<int>,"exp":<int>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric user identifier
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Login name
    pub username: String,

    /// Issued at (Unix seconds)
    pub iat: i64,

    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates claims issued at `issued_at` and valid for `validity_seconds`
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's numeric ID
    /// * `username` - The user's login name
    /// * `issued_at` - Issue time in Unix seconds
    /// * `validity_seconds` - Lifetime added to `issued_at` to form `exp`
    pub fn new(
        user_id: i64,
        username: impl Into<String>,
        issued_at: i64,
        validity_seconds: i64,
    ) -> Self {
        Self {
            user_id,
            username: username.into(),
            iat: issued_at,
            exp: issued_at.saturating_add(validity_seconds),
        }
    }
}

/// Identity recovered from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
}

/// Whether a token with this `exp` has expired at `now`
///
/// A token is still valid at the exact second of `exp`.
pub fn is_expired(exp: i64, now: i64) -> bool {
    now > exp
}

/// Removes a leading `"Bearer "` from a presented token, if any
pub fn strip_bearer_prefix(token: &str) -> &str {
    token.strip_prefix(BEARER_PREFIX).unwrap_or(token)
}
