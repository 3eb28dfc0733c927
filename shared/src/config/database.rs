//! Database configuration module

use serde::{Deserialize, Serialize};

/// Default bcrypt cost for seeded passwords
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// Database configuration for SQLite connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Create demo players and their items on startup
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// bcrypt cost used when hashing seeded passwords
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 5,
            connect_timeout: 30,
            seed_sample_data: default_seed_sample_data(),
            password_hash_cost: default_password_hash_cost(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite::memory:".to_string());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let seed_sample_data = std::env::var("DATABASE_SEED_SAMPLE_DATA")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);
        let password_hash_cost = std::env::var("PASSWORD_HASH_COST")
            .ok()
            .and_then(|c| c.parse().ok())
            .unwrap_or(DEFAULT_PASSWORD_HASH_COST);

        Self {
            url,
            max_connections,
            connect_timeout,
            seed_sample_data,
            password_hash_cost,
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the bcrypt cost for seeded passwords
    pub fn with_password_hash_cost(mut self, cost: u32) -> Self {
        self.password_hash_cost = cost;
        self
    }

    /// Whether the URL points at a private in-memory database.
    ///
    /// Every SQLite connection to such a URL opens its own empty database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_password_hash_cost() -> u32 {
    DEFAULT_PASSWORD_HASH_COST
}
