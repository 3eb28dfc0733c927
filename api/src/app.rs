//! Application factory
//!
//! Builds the Actix-web application from the shared state and configuration.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    middleware::Logger,
    web, App, HttpResponse,
};

use gs_core::repositories::{InventoryRepository, UserRepository};
use gs_infra::DatabasePool;
use gs_shared::{error_codes, AppConfig};

use crate::handlers::error::{error_response, json_error_handler};
use crate::middleware::{auth::BearerAuth, cors::create_cors};
use crate::routes::{auth::login, inventory::get_inventory, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, I>(
    app_state: web::Data<AppState<U, I>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    I: InventoryRepository + 'static,
{
    let cors = create_cors(config.environment, &config.cors);
    let bearer_auth = BearerAuth::new(app_state.token_service.clone());

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Add middleware (logging outermost, then CORS)
        .wrap(cors)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login::<U, I>))
                .service(
                    web::resource("/inventory")
                        .wrap(bearer_auth)
                        .route(web::get().to(get_inventory::<U, I>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Pings the database when a `DatabasePool` is registered as app data and
/// answers 503 if that fails.
async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let database_up = match pool {
        Some(pool) => match pool.health_check().await {
            Ok(up) => up,
            Err(e) => {
                log::error!("Health check failed: {}", e);
                false
            }
        },
        None => true,
    };

    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status).json(serde_json::json!({
        "status": if database_up { "healthy" } else { "unhealthy" },
        "service": "gameserver-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, error_codes::NOT_FOUND)
}
