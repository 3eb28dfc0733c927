//! User entity representing a registered player.

use chrono::{DateTime, Utc};

/// User entity as stored by the user repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Auto-increment identifier
    pub id: i64,

    /// Unique login name (at most 50 characters)
    pub username: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Maximum username length accepted by the schema
    pub const MAX_USERNAME_LENGTH: usize = 50;

    /// Maximum password length accepted at login
    pub const MAX_PASSWORD_LENGTH: usize = 255;

    /// Creates a user entity
    pub fn new(id: i64, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
