//! User repository trait defining the interface for user lookups.
//!
//! Users are created by schema seeding only, so the trait is read-only.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity lookups
///
/// Implementations handle the actual database access while the login flow
/// stays independent of the storage engine.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use gs_core::repositories::UserRepository;
/// use gs_core::domain::entities::user::User;
/// use gs_core::errors::DomainError;
///
/// struct InMemoryUserRepository {
///     users: Vec<User>,
/// }
///
/// #[async_trait]
/// impl UserRepository for InMemoryUserRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         Ok(self.users.iter().find(|u| u.username == username).cloned())
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact (case-sensitive) username
    ///
    /// # Arguments
    /// * `username` - The login name
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that name
    /// * `Err(DomainError)` - Storage error
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
