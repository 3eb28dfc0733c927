//! Shared utilities and common types for the GameServer backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig,
    ServerConfig, TokenConfig,
};
pub use errors::{error_codes, ErrorResponse};
