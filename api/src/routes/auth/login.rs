use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use gs_core::repositories::{InventoryRepository, UserRepository};
use gs_shared::error_codes;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{error_response, handle_domain_error};
use crate::routes::AppState;

/// Handler for POST /api/login
///
/// Checks the submitted credentials and returns a fresh access token.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "player1",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "userId": 1,
///     "username": "player1",
///     "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
///
/// ## Errors
/// - 400: missing body, missing fields or over-long fields
/// - 401: unknown user or wrong password
/// - 500: storage failure
pub async fn login<U, I>(
    state: web::Data<AppState<U, I>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: InventoryRepository + 'static,
{
    let request = request.into_inner();

    let Some((username, password)) = request.credentials() else {
        return error_response(StatusCode::BAD_REQUEST, error_codes::CREDENTIALS_REQUIRED);
    };

    if let Err(validation_errors) = request.validate() {
        log::warn!("Validation failed for login request: {}", validation_errors);
        return error_response(StatusCode::BAD_REQUEST, error_codes::INVALID_LOGIN_REQUEST);
    }

    match state.auth_service.login(username, password).await {
        Ok(response) => {
            log::info!("Login succeeded for user {}", response.user_id);
            HttpResponse::Ok().json(LoginResponse::from(response))
        }
        Err(error) => handle_domain_error(&error, error_codes::INTERNAL_ERROR),
    }
}
