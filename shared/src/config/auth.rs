//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Secret used when `TOKEN_SECRET` is not set. Only acceptable outside production.
pub const DEFAULT_TOKEN_SECRET: &str = "gameserver-secret-key-2024";

/// Default token lifetime: 24 hours
pub const DEFAULT_TOKEN_VALIDITY_SECONDS: i64 = 86_400;

/// Longest accepted token lifetime: 10 years
pub const MAX_TOKEN_VALIDITY_SECONDS: i64 = 10 * 365 * 86_400;

/// Signed access token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Shared secret keying the HMAC-SHA256 signature
    pub secret: String,

    /// Seconds between `iat` and `exp`
    #[serde(default = "default_validity_seconds")]
    pub validity_seconds: i64,

    /// Check the signature before trusting any claim (stricter than the
    /// default expiry-first order)
    #[serde(default)]
    pub signature_first: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_TOKEN_SECRET),
            validity_seconds: default_validity_seconds(),
            signature_first: false,
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in hours
    pub fn with_validity_hours(mut self, hours: i64) -> Self {
        self.validity_seconds = hours * 3600;
        self
    }

    /// Switch to signature-before-expiry verification
    pub fn with_signature_first(mut self, enabled: bool) -> Self {
        self.signature_first = enabled;
        self
    }

    /// Whether the lifetime lies in `1..=MAX_TOKEN_VALIDITY_SECONDS`
    pub fn has_valid_lifetime(&self) -> bool {
        (1..=MAX_TOKEN_VALIDITY_SECONDS).contains(&self.validity_seconds)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_TOKEN_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token configuration
    pub token: TokenConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("TOKEN_SECRET")
            .unwrap_or_else(|_| DEFAULT_TOKEN_SECRET.to_string());
        let validity_seconds = std::env::var("TOKEN_VALIDITY_SECONDS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_VALIDITY_SECONDS.to_string())
            .parse()
            .unwrap_or(DEFAULT_TOKEN_VALIDITY_SECONDS);
        let signature_first = std::env::var("TOKEN_SIGNATURE_FIRST")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            token: TokenConfig {
                secret,
                validity_seconds,
                signature_first,
            },
        }
    }
}

fn default_validity_seconds() -> i64 {
    DEFAULT_TOKEN_VALIDITY_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.validity_seconds, 86_400);
        assert!(!config.signature_first);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_token_config_builder() {
        let config = TokenConfig::new("my-secret")
            .with_validity_hours(2)
            .with_signature_first(true);

        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.validity_seconds, 7200);
        assert!(config.signature_first);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_token_config_deserialize_defaults() {
        let config: TokenConfig = serde_json::from_str(r#"{"secret":"s"}"#).unwrap();
        assert_eq!(config.validity_seconds, DEFAULT_TOKEN_VALIDITY_SECONDS);
        assert!(!config.signature_first);
    }
}
