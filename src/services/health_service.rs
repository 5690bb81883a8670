use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness, the scoreboard phase and how many displays are attached.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let phase = state.phase().await.into();
    HealthResponse::ok(phase, state.sse().subscriber_count())
}
