//! Segment encoding and HMAC signing for the compact token format

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::Sha256;

use crate::errors::{DomainError, TokenError};

type HmacSha256 = Hmac<Sha256>;

/// Pre-keyed HMAC-SHA256 state, cloned for each signature
#[derive(Clone)]
pub(super) struct Signer {
    mac: HmacSha256,
}

impl Signer {
    /// Builds the keyed state. Fails on an empty secret.
    pub(super) fn new(secret: &[u8]) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "token secret must not be empty".to_string(),
            });
        }

        let mac = HmacSha256::new_from_slice(secret).map_err(|e| DomainError::Configuration {
            message: format!("unusable token secret: {}", e),
        })?;

        Ok(Self { mac })
    }

    /// Returns the base64url signature over `signing_input`
    pub(super) fn sign(&self, signing_input: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    /// Compares the expected signature with `presented` in constant time
    pub(super) fn verify(&self, signing_input: &str, presented: &str) -> bool {
        let expected = self.sign(signing_input);
        constant_time_eq(expected.as_bytes(), presented.as_bytes())
    }
}

/// The three segments of a structurally valid token
pub(super) struct Segments<'a> {
    pub header: &'a str,
    pub claims: &'a str,
    pub signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Text covered by the signature: `header.claims`
    pub(super) fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.claims)
    }
}

/// Splits a token into exactly three non-empty segments
pub(super) fn split(token: &str) -> Result<Segments<'_>, TokenError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None)
            if !header.is_empty() && !claims.is_empty() && !signature.is_empty() =>
        {
            Ok(Segments {
                header,
                claims,
                signature,
            })
        }
        _ => Err(TokenError::MalformedToken),
    }
}

/// Serializes `value` to compact JSON and base64url-encodes it
pub(super) fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(|_| TokenError::TokenGenerationFailed)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a base64url segment and parses its JSON
pub(super) fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::MalformedToken)
}
