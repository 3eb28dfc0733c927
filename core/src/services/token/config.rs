//! Configuration for the token service

use std::fmt;

use gs_shared::config::auth::{TokenConfig, DEFAULT_TOKEN_SECRET};

use crate::domain::entities::token::TOKEN_VALIDITY_SECONDS;

/// Order in which `verify` runs its expiry and signature checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationOrder {
    /// Structure, then expiry (from unverified claims), then signature
    #[default]
    ExpiryFirst,
    /// Structure, then signature, then expiry
    SignatureFirst,
}

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC secret
    pub secret: String,
    /// Token lifetime in seconds
    pub validity_seconds: i64,
    /// Check order used by `verify`
    pub verification_order: VerificationOrder,
}

impl TokenServiceConfig {
    /// Creates a configuration with the default lifetime and check order
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    pub fn with_validity_seconds(mut self, validity_seconds: i64) -> Self {
        self.validity_seconds = validity_seconds;
        self
    }

    pub fn with_verification_order(mut self, order: VerificationOrder) -> Self {
        self.verification_order = order;
        self
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_TOKEN_SECRET.to_string(),
            validity_seconds: TOKEN_VALIDITY_SECONDS,
            verification_order: VerificationOrder::default(),
        }
    }
}

impl From<&TokenConfig> for TokenServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        let verification_order = if config.signature_first {
            VerificationOrder::SignatureFirst
        } else {
            VerificationOrder::ExpiryFirst
        };

        Self {
            secret: config.secret.clone(),
            validity_seconds: config.validity_seconds,
            verification_order,
        }
    }
}

// Keeps the secret out of logs
impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("validity_seconds", &self.validity_seconds)
            .field("verification_order", &self.verification_order)
            .finish()
    }
}
