//! Shared setup for the HTTP tests: an in-memory SQLite database seeded with
//! the demo players.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use gs_api::AppState;
use gs_core::services::token::{ManualClock, TokenService, TokenServiceConfig};
use gs_infra::{DatabasePool, SqliteInventoryRepository, SqliteUserRepository};
use gs_shared::config::DatabaseConfig;

pub const TEST_SECRET: &str = "api-test-secret";

// Lowest cost bcrypt accepts; keeps seeding fast
pub const TEST_HASH_COST: u32 = 4;

pub type TestState = AppState<SqliteUserRepository, SqliteInventoryRepository>;

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap())
}

/// Token service sharing the test secret but reading a fixed clock
pub fn token_service_at(now: i64) -> TokenService {
    TokenService::with_clock(
        TokenServiceConfig::new(TEST_SECRET),
        Arc::new(ManualClock::new(now)),
    )
    .unwrap()
}

pub async fn seeded_state() -> web::Data<TestState> {
    seeded_state_with_pool().await.0
}

/// Seeded state plus the pool behind it, for tests that touch the pool
pub async fn seeded_state_with_pool() -> (web::Data<TestState>, DatabasePool) {
    let config = DatabaseConfig::new("sqlite::memory:").with_password_hash_cost(TEST_HASH_COST);
    let pool = gs_infra::initialize(&config).await.unwrap();

    let state = web::Data::new(AppState::new(
        Arc::new(SqliteUserRepository::new(pool.get_pool().clone())),
        Arc::new(SqliteInventoryRepository::new(pool.get_pool().clone())),
        token_service(),
    ));
    (state, pool)
}
