//! Error types for authentication and token handling
//!
//! The HTTP layer maps these to status codes and client-facing messages;
//! the `Display` text here is for logs.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. The two cases are not distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
///
/// Every variant except `ClaimNotFound` and `TokenGenerationFailed` is a
/// rejection reason produced by token verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("missing token")]
    MissingToken,

    /// Wrong segment count, empty segment, or undecodable base64/JSON
    #[error("malformed token")]
    MalformedToken,

    #[error("expired")]
    ExpiredToken,

    #[error("invalid signature")]
    InvalidSignature,

    /// Raised by the claim accessors only
    #[error("claim not found: {claim}")]
    ClaimNotFound { claim: String },

    #[error("token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Whether this error rejects a presented credential (as opposed to a
    /// failure on the issuing side)
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TokenError::TokenGenerationFailed)
    }
}
