//! Main token service implementation

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use gs_shared::config::auth::MAX_TOKEN_VALIDITY_SECONDS;

use crate::domain::entities::token::{
    is_expired, strip_bearer_prefix, AuthenticatedUser, Claims, TokenHeader,
};
use crate::errors::{DomainError, TokenError};

use super::clock::{Clock, SystemClock};
use super::codec::{self, Segments, Signer};
use super::config::{TokenServiceConfig, VerificationOrder};

/// Service for issuing and verifying signed bearer tokens
///
/// Holds no per-token state. Share it as `Arc<TokenService>`.
pub struct TokenService {
    config: TokenServiceConfig,
    signer: Signer,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a new token service reading the system clock
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a configuration error if the secret is empty
    /// or the validity window is not positive
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new token service with an explicit time source
    pub fn with_clock(
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        if !(1..=MAX_TOKEN_VALIDITY_SECONDS).contains(&config.validity_seconds) {
            return Err(DomainError::Configuration {
                message: format!(
                    "token validity must be between 1 and {} seconds",
                    MAX_TOKEN_VALIDITY_SECONDS
                ),
            });
        }

        let signer = Signer::new(config.secret.as_bytes())?;

        Ok(Self {
            config,
            signer,
            clock,
        })
    }

    /// Issues a token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's numeric ID
    /// * `username` - The user's login name
    ///
    /// # Returns
    ///
    /// `header.claims.signature`, each segment base64url without padding
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, TokenError> {
        let claims = Claims::new(
            user_id,
            username,
            self.clock.now(),
            self.config.validity_seconds,
        );
        self.sign_claims(&claims)
    }

    /// Signs an arbitrary claims object under the fixed header
    pub(crate) fn sign_claims<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let header = codec::encode_segment(&TokenHeader::default())?;
        let payload = codec::encode_segment(claims)?;
        let signing_input = format!("{}.{}", header, payload);
        let signature = self.signer.sign(&signing_input);

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Verifies a presented token and returns the identity it carries
    ///
    /// # Arguments
    ///
    /// * `presented` - Raw token, optionally prefixed with `"Bearer "`
    ///
    /// # Returns
    ///
    /// The `userId`/`username` pair, or the first rejection reason found
    pub fn verify(&self, presented: Option<&str>) -> Result<AuthenticatedUser, TokenError> {
        let result = self.verify_inner(presented);
        if let Err(reason) = &result {
            tracing::debug!(reason = %reason, "Token rejected");
        }
        result
    }

    fn verify_inner(&self, presented: Option<&str>) -> Result<AuthenticatedUser, TokenError> {
        let token = match presented {
            Some(raw) if !raw.trim().is_empty() => strip_bearer_prefix(raw),
            _ => return Err(TokenError::MissingToken),
        };

        let segments = codec::split(token)?;

        let claims = match self.config.verification_order {
            VerificationOrder::ExpiryFirst => {
                let claims = codec::decode_segment::<Map<String, Value>>(segments.claims)?;
                self.check_expiry(&claims)?;
                self.check_signature(&segments)?;
                claims
            }
            VerificationOrder::SignatureFirst => {
                self.check_signature(&segments)?;
                let claims = codec::decode_segment::<Map<String, Value>>(segments.claims)?;
                self.check_expiry(&claims)?;
                claims
            }
        };

        identity_from_claims(&claims)
    }

    fn check_expiry(&self, claims: &Map<String, Value>) -> Result<(), TokenError> {
        // Missing or non-integer exp counts as expired
        match claims.get("exp").and_then(Value::as_i64) {
            Some(exp) if !is_expired(exp, self.clock.now()) => Ok(()),
            _ => Err(TokenError::ExpiredToken),
        }
    }

    fn check_signature(&self, segments: &Segments<'_>) -> Result<(), TokenError> {
        if self.signer.verify(&segments.signing_input(), segments.signature) {
            Ok(())
        } else {
            Err(TokenError::InvalidSignature)
        }
    }

    /// Decodes the claims segment without checking signature or expiry
    ///
    /// Not a trust boundary.
    pub fn extract_claims(&self, token: &str) -> Result<Map<String, Value>, TokenError> {
        let segments = codec::split(strip_bearer_prefix(token))?;
        codec::decode_segment(segments.claims)
    }

    /// Reads a single typed claim without checking signature or expiry
    ///
    /// # Returns
    ///
    /// `ClaimNotFound` when the claim is absent or has the wrong type
    pub fn claim<T: DeserializeOwned>(&self, token: &str, name: &str) -> Result<T, TokenError> {
        let claims = self.extract_claims(token)?;
        let not_found = || TokenError::ClaimNotFound {
            claim: name.to_string(),
        };

        let value = claims.get(name).cloned().ok_or_else(not_found)?;
        serde_json::from_value(value).map_err(|_| not_found())
    }

    /// Reads `userId` from a token, collapsing every failure to `None`
    pub fn user_id_from_token(&self, token: &str) -> Option<i64> {
        self.claim(token, "userId").ok()
    }

    /// Reads `username` from a token, collapsing every failure to `None`
    pub fn username_from_token(&self, token: &str) -> Option<String> {
        self.claim(token, "username").ok()
    }

    /// Configured token lifetime in seconds
    pub fn validity_seconds(&self) -> i64 {
        self.config.validity_seconds
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn identity_from_claims(claims: &Map<String, Value>) -> Result<AuthenticatedUser, TokenError> {
    let user_id = claims.get("userId").and_then(Value::as_i64);
    let username = claims.get("username").and_then(Value::as_str);

    match (user_id, username) {
        (Some(user_id), Some(username)) => Ok(AuthenticatedUser {
            user_id,
            username: username.to_string(),
        }),
        _ => Err(TokenError::MalformedToken),
    }
}
