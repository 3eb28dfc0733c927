//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing secret and validity window
//! - `database` - Database connection, pool and seeding configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, TokenConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Check the configuration for settings that must not reach production.
    ///
    /// Returns a description of every problem found; an empty list means the
    /// configuration is safe to start with.
    pub fn startup_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.auth.token.secret.is_empty() {
            problems.push("TOKEN_SECRET must not be empty".to_string());
        }
        if self.environment.is_production() && self.auth.token.is_using_default_secret() {
            problems.push("TOKEN_SECRET must be set explicitly in production".to_string());
        }
        if !self.auth.token.has_valid_lifetime() {
            problems.push(format!(
                "TOKEN_VALIDITY_SECONDS must be between 1 and {}",
                auth::MAX_TOKEN_VALIDITY_SECONDS
            ));
        }

        problems
    }
}
