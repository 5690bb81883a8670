//! Library crate for courtside-scoreboard, exposing modules for binaries and integration tests.

/// Runtime configuration loaded from JSON.
pub mod config;
/// Request and response shapes.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// Axum route trees.
pub mod routes;
/// Operations invoked by the routes.
pub mod services;
/// Scoreboard state machine and shared application state.
pub mod state;
