//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::password::verify_password;

/// Authentication service checking credentials and issuing access tokens
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for access token issuance
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user lookups
    /// * `token_service` - Service issuing access tokens
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticate a user by username and password
    ///
    /// # Arguments
    ///
    /// * `username` - Login name, matched exactly
    /// * `password` - Plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Identity plus a fresh access token
    /// * `Err(DomainError::Auth(InvalidCredentials))` - Unknown user or wrong password
    /// * `Err(DomainError::Validation)` - Empty username or password
    /// * `Err(DomainError)` - Storage or hashing failure
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::Validation {
                message: "Username and password are required".to_string(),
            });
        }

        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::info!("Login rejected: unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.issue(user.id, &user.username)?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(AuthResponse::new(user.id, user.username, access_token))
    }
}
