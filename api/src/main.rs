use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use gs_api::{create_app, AppState};
use gs_core::services::token::{TokenService, TokenServiceConfig};
use gs_infra::{SqliteInventoryRepository, SqliteUserRepository};
use gs_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    // Initialize logger
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );
    if !config.logging.timestamp {
        logger.format_timestamp(None);
    }
    logger.init();

    info!("Starting GameServer API ({})", config.environment);

    let problems = config.startup_problems();
    if !problems.is_empty() {
        for problem in &problems {
            log::error!("Configuration problem: {}", problem);
        }
        anyhow::bail!("refusing to start with an unsafe configuration");
    }
    if config.auth.token.is_using_default_secret() {
        log::warn!("Using the built-in development token secret");
    }

    // Database pool, schema and demo data
    let pool = gs_infra::initialize(&config.database)
        .await
        .context("failed to initialize the database")?;

    let token_service = TokenService::new(TokenServiceConfig::from(&config.auth.token))
        .context("failed to build the token service")?;

    let app_state = web::Data::new(AppState::new(
        Arc::new(SqliteUserRepository::new(pool.get_pool().clone())),
        Arc::new(SqliteInventoryRepository::new(pool.get_pool().clone())),
        Arc::new(token_service),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let app_config = config.clone();
    let pool_data = web::Data::new(pool.clone());
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &app_config).app_data(pool_data.clone())
    });
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;

    Ok(())
}
