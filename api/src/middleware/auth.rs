//! Bearer token authentication middleware for protecting API endpoints.
//!
//! This middleware reads the token from the Authorization header (with or
//! without the `Bearer ` scheme), verifies it with the core `TokenService`,
//! and injects the caller's identity into the request.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorUnauthorized, InternalError},
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use gs_core::services::token::TokenService;
use gs_shared::error_codes;

use crate::handlers::error::error_response;

/// User authentication context injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// `userId` claim, if present
    pub user_id: Option<i64>,
    /// `username` claim, if present; carried for logging, never in responses
    pub username: Option<String>,
}

impl AuthContext {
    /// Projects a verified token into a context through the claim helpers
    pub fn from_token(token_service: &TokenService, token: &str) -> Self {
        Self {
            user_id: token_service.user_id_from_token(token),
            username: token_service.username_from_token(token),
        }
    }
}

/// Bearer authentication middleware factory
#[derive(Clone)]
pub struct BearerAuth {
    token_service: Arc<TokenService>,
}

impl BearerAuth {
    /// Creates a new middleware verifying tokens with `token_service`
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Bearer authentication middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_authorization(&req) {
                Some(token) => token,
                None => return Err(unauthorized(error_codes::AUTH_HEADER_REQUIRED)),
            };

            if token_service.verify(Some(&token)).is_err() {
                return Err(unauthorized(error_codes::INVALID_OR_EXPIRED_TOKEN));
            }

            // Inject auth context into request extensions
            req.extensions_mut()
                .insert(AuthContext::from_token(&token_service, &token));

            service.call(req).await
        })
    }
}

/// Reads a non-blank Authorization header value
fn extract_authorization(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn unauthorized(message: &'static str) -> Error {
    InternalError::from_response(message, error_response(StatusCode::UNAUTHORIZED, message)).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized(error_codes::AUTH_HEADER_REQUIRED));

        ready(result)
    }
}
