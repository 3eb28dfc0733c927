//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
    pub should_fail: bool,
}

impl MockUserRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    /// Create a repository pre-populated with `users`
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            should_fail: false,
        }
    }

    /// Create a repository whose every lookup fails
    pub fn failing() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        if self.should_fail {
            return Err(DomainError::Internal {
                message: "database unavailable".to_string(),
            });
        }

        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}
