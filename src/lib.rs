//! StockChef - terminal client for the StockChef recipe and inventory API.
//!
//! The library is organized around a thin REST client ([`api::ApiClient`])
//! plus the client-side state the commands need: the on-disk session
//! ([`session`]), the bounded saved-recipe list ([`history`]), and the
//! combined inventory/recipe view ([`dashboard`]).

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod models;
pub mod session;
