//! Route handlers and the shared application state

pub mod auth;
pub mod inventory;

use std::sync::Arc;

use gs_core::repositories::{InventoryRepository, UserRepository};
use gs_core::services::{AuthService, InventoryService, TokenService};

/// Application state that holds shared services
pub struct AppState<U, I>
where
    U: UserRepository,
    I: InventoryRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub inventory_service: Arc<InventoryService<I>>,
    pub token_service: Arc<TokenService>,
}

impl<U, I> AppState<U, I>
where
    U: UserRepository,
    I: InventoryRepository,
{
    /// Wires the services around the given repositories
    pub fn new(
        user_repository: Arc<U>,
        inventory_repository: Arc<I>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(user_repository, Arc::clone(&token_service))),
            inventory_service: Arc::new(InventoryService::new(inventory_repository)),
            token_service,
        }
    }
}
