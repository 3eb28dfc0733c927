//! Token service module for signed bearer tokens
//!
//! This module handles all token-related operations including:
//! - HMAC-SHA256 token issuance
//! - Token verification (structure, expiry and signature checks)
//! - Lenient claim extraction helpers

mod clock;
mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{TokenServiceConfig, VerificationOrder};
pub use service::TokenService;
