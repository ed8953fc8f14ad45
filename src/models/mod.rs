//! Wire types exchanged with the StockChef API, split into domain-specific modules.
//!
//! This module re-exports all types so callers can use `crate::models::Recipe` directly.

pub mod auth;
pub mod inventory;
pub mod recipe;
pub mod user;

pub use auth::*;
pub use inventory::*;
pub use recipe::*;
pub use user::*;

use serde::Deserialize;

/// Bare acknowledgement returned by delete-style endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// Service health from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
