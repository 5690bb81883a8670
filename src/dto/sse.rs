use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::{match_state::Team, state_machine::MatchStateMachine};

#[derive(Clone, Debug)]
/// Dispatched payload carried across SSE channels.
pub struct ServerEvent {
    /// SSE event name; unnamed events arrive as `message`.
    pub event: Option<String>,
    /// Encoded data field.
    pub data: String,
}

impl ServerEvent {
    /// Build an event from an already encoded data field.
    pub fn new<E>(event: E, data: String) -> Self
    where
        E: Into<Option<String>>,
    {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Broadcast once the deciding set has been won, after the final board.
pub struct MatchWonEvent {
    /// Team that took the match.
    pub winner: Team,
    /// Display name of the winner.
    pub name: String,
    /// Banner text, e.g. "Home wins!".
    pub message: String,
    /// Sets won by the home team.
    pub home_sets: u8,
    /// Sets won by the away team.
    pub away_sets: u8,
}

impl MatchWonEvent {
    /// Build the announcement for `winner` from the board's current match.
    pub fn for_board(board: &MatchStateMachine, winner: Team) -> Option<Self> {
        let state = board.state()?;
        let name = board.names()?.of(winner).to_string();
        Some(Self {
            winner,
            message: format!("{name} wins!"),
            name,
            home_sets: state.home.sets,
            away_sets: state.away.sets,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
/// Tone and vibration the display should play when a point is recorded.
pub struct FeedbackCueEvent {
    /// Beep pitch.
    pub tone_hz: u32,
    /// Beep length in milliseconds.
    pub tone_ms: u32,
    /// Beep volume, 0 to 1.
    pub gain: f32,
    /// Vibration length in milliseconds; 0 disables it.
    pub vibration_ms: u32,
}
