use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::phase::VisibleMatchPhase;

/// Body of `/healthcheck`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests.
    pub status: String,
    /// Phase of the scoreboard at the time of the check.
    pub phase: VisibleMatchPhase,
    /// Displays currently attached to the SSE stream.
    pub displays: usize,
}

impl HealthResponse {
    /// Healthy response for the given scoreboard phase.
    pub fn ok(phase: VisibleMatchPhase, displays: usize) -> Self {
        Self {
            status: "ok".to_string(),
            phase,
            displays,
        }
    }
}
