//! Authentication service module
//!
//! This module provides username/password login:
//! - bcrypt password hashing and verification
//! - Credential checks against the user repository
//! - Access token issuance on success

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password};
pub use service::AuthService;
