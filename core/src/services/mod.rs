//! Business services containing domain logic and use cases.

pub mod auth;
pub mod inventory;
pub mod token;

// Re-export commonly used types
pub use auth::{hash_password, verify_password, AuthService};
pub use inventory::InventoryService;
pub use token::{
    Clock, ManualClock, SystemClock, TokenService, TokenServiceConfig, VerificationOrder,
};
