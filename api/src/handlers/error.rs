//! Conversion of failures into JSON error responses

use actix_web::{error::InternalError, http::StatusCode, HttpRequest, HttpResponse};

use gs_core::errors::{AuthError, DomainError};
use gs_shared::{error_codes, ErrorResponse};

/// Builds `{"error": message}` with the given status
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// # Arguments
/// * `error` - The failure raised by a service
/// * `fallback` - Message used for server-side failures
pub fn handle_domain_error(error: &DomainError, fallback: &str) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            error_response(StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
        }
        DomainError::Token(token_error) if token_error.is_rejection() => {
            error_response(StatusCode::UNAUTHORIZED, error_codes::INVALID_OR_EXPIRED_TOKEN)
        }
        DomainError::Validation { .. } => {
            error_response(StatusCode::BAD_REQUEST, error_codes::CREDENTIALS_REQUIRED)
        }
        _ => {
            log::error!("Domain Error: {}", error);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, fallback)
        }
    }
}

/// Error handler for `web::JsonConfig`: any unreadable body is a 400
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    InternalError::from_response(
        err,
        error_response(StatusCode::BAD_REQUEST, error_codes::BODY_REQUIRED),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::errors::TokenError;

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        let response = handle_domain_error(
            &DomainError::Auth(AuthError::InvalidCredentials),
            error_codes::INTERNAL_ERROR,
        );
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_rejection_is_unauthorized() {
        let response = handle_domain_error(
            &DomainError::Token(TokenError::ExpiredToken),
            error_codes::INTERNAL_ERROR,
        );
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_generation_failure_is_server_error() {
        let response = handle_domain_error(
            &DomainError::Token(TokenError::TokenGenerationFailed),
            error_codes::INTERNAL_ERROR,
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_failure_uses_fallback_status() {
        let response = handle_domain_error(
            &DomainError::Internal {
                message: "disk full".to_string(),
            },
            error_codes::INVENTORY_UNAVAILABLE,
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
