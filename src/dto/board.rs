use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::phase::VisibleMatchPhase,
    state::{
        match_state::{MatchState, Team, TeamNames},
        state_machine::MatchStateMachine,
    },
};

/// One side of the live board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamPanel {
    /// Team shown on this panel.
    pub team: Team,
    /// Display name.
    pub name: String,
    /// Points in the current set.
    pub points: u8,
    /// Sets won so far.
    pub sets: u8,
    /// Rotation position serving for this team (1 to 4).
    pub server_slot: u8,
    /// Whether this team holds serve; renderers show the slot only when set.
    pub serving: bool,
}

impl TeamPanel {
    fn new(team: Team, state: &MatchState, names: &TeamNames) -> Self {
        let score = state.team(team);
        Self {
            team,
            name: names.of(team).to_string(),
            points: score.points,
            sets: score.sets,
            server_slot: score.server_slot,
            serving: state.serving == team,
        }
    }
}

/// Snapshot of the scoreboard sent after every command (REST and SSE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BoardView {
    /// Current phase; `in_progress` means the live board replaces setup.
    pub phase: VisibleMatchPhase,
    /// Sides swap automatically after each set.
    pub auto_court_change: bool,
    /// Identifier of the current match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<Uuid>,
    /// Home panel, absent during setup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<TeamPanel>,
    /// Away panel, absent during setup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<TeamPanel>,
    /// Team drawn on the left-hand side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Team>,
    /// Team drawn on the right-hand side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Team>,
    /// Home is drawn on the right.
    pub court_swapped: bool,
    /// Score is frozen on the final rally.
    pub match_over: bool,
    /// Winner once the match is over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Team>,
    /// Rallies that can still be undone.
    pub undo_depth: usize,
}

impl From<&MatchStateMachine> for BoardView {
    fn from(board: &MatchStateMachine) -> Self {
        let phase = board.phase().into();
        let (Some(state), Some(names)) = (board.state(), board.names()) else {
            return Self {
                phase,
                auto_court_change: board.auto_court_change(),
                match_id: None,
                home: None,
                away: None,
                left: None,
                right: None,
                court_swapped: false,
                match_over: false,
                winner: None,
                undo_depth: 0,
            };
        };

        let left = state.left();
        Self {
            phase,
            auto_court_change: board.auto_court_change(),
            match_id: board.match_id(),
            home: Some(TeamPanel::new(Team::Home, state, names)),
            away: Some(TeamPanel::new(Team::Away, state, names)),
            left: Some(left),
            right: Some(left.opponent()),
            court_swapped: state.court_swapped,
            match_over: state.match_over,
            winner: board.winner(),
            undo_depth: board.undo_depth(),
        }
    }
}
