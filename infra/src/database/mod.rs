//! Database module - SQLite implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Schema creation and sample data
//! - Repository pattern implementations

pub mod connection;
pub mod schema;
pub mod sqlite;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use sqlite::{SqliteInventoryRepository, SqliteUserRepository};
