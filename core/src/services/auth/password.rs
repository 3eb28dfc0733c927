//! bcrypt password hashing helpers

use crate::errors::{DomainError, DomainResult};

/// Hashes a password with bcrypt at the given cost
///
/// CPU-bound; call from a blocking context when running inside a runtime.
pub fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}

/// Checks a password against a stored bcrypt hash on the blocking pool
///
/// # Returns
///
/// * `Ok(true)` - Password matches
/// * `Ok(false)` - Password does not match
/// * `Err(DomainError)` - Stored hash is unreadable or the blocking task failed
pub async fn verify_password(password: String, password_hash: String) -> DomainResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password check task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
}
