//! # GameServer API
//!
//! HTTP gateway exposing player login and inventory lookup.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
