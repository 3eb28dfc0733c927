//! SQLite repository implementations

pub mod inventory_repository_impl;
pub mod user_repository_impl;

pub use inventory_repository_impl::SqliteInventoryRepository;
pub use user_repository_impl::SqliteUserRepository;
