//! Request and response bodies

pub mod auth;
pub mod inventory;

pub use auth::{LoginRequest, LoginResponse};
pub use inventory::InventoryResponse;
