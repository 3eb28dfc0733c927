//! Repository interfaces for persistence, implemented by the infrastructure layer.

pub mod inventory;
pub mod user;

pub use inventory::InventoryRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use inventory::MockInventoryRepository;
#[cfg(test)]
pub use user::MockUserRepository;
