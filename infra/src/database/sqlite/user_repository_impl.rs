//! SQLite implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{Row, SqlitePool};

use gs_core::domain::entities::user::User;
use gs_core::errors::DomainError;
use gs_core::repositories::UserRepository;

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SQLite user repository
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool from SQLx
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, DomainError> {
        let created_at: NaiveDateTime = row
            .try_get("created_at")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?;

        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get username: {}", e) })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get password_hash: {}", e) })?,
            created_at: created_at.and_utc(),
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to find user by username: {}", e),
        })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}
