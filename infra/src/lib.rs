//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GameServer
//! backend. It provides the SQLite persistence behind the core repository
//! traits.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: SQLite pool, schema creation and sample data using SQLx
//! - **Repositories**: user and inventory lookups

// Re-export core types for convenience
pub use gs_core::errors::*;

use gs_shared::config::DatabaseConfig;

/// Database module - SQLite implementations using SQLx
pub mod database;

pub use database::{DatabasePool, SqliteInventoryRepository, SqliteUserRepository};

/// Open the pool, create the schema and optionally seed demo data
///
/// This function sets up:
/// - The SQLite connection pool
/// - The `users` and `inventory` tables
/// - Sample players and items when `seed_sample_data` is set
pub async fn initialize(config: &DatabaseConfig) -> Result<DatabasePool, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let pool = DatabasePool::new(config).await?;
    database::schema::create_tables(pool.get_pool()).await?;

    if config.seed_sample_data {
        database::schema::seed_sample_data(pool.get_pool(), config.password_hash_cost).await?;
    }

    tracing::info!("Infrastructure services initialized successfully");

    Ok(pool)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by a domain helper (e.g. password hashing)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
