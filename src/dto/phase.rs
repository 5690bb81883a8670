use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::state_machine::MatchPhase;

/// Publicly visible scoreboard phase exposed to clients (REST/SSE).
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibleMatchPhase {
    /// Setup prompt is shown.
    Setup,
    /// Live board.
    InProgress,
    /// Final score is displayed.
    Finished,
}

impl From<MatchPhase> for VisibleMatchPhase {
    fn from(value: MatchPhase) -> Self {
        match value {
            MatchPhase::Setup => VisibleMatchPhase::Setup,
            MatchPhase::InProgress => VisibleMatchPhase::InProgress,
            MatchPhase::Finished => VisibleMatchPhase::Finished,
        }
    }
}
