//! Domain entities representing core business objects.

pub mod inventory;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use inventory::InventoryItem;
pub use token::{
    is_expired, strip_bearer_prefix, AuthenticatedUser, Claims, TokenHeader,
    BEARER_PREFIX, TOKEN_ALGORITHM, TOKEN_TYPE, TOKEN_VALIDITY_SECONDS,
};
pub use user::User;
