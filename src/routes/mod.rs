use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Health check route.
pub mod health;
/// Match commands.
pub mod scoreboard;
/// Display event stream.
pub mod sse;

/// Compose all route trees and wire in the shared state.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(sse::router())
        .merge(scoreboard::router())
        .merge(docs::router())
        .with_state(state)
}
