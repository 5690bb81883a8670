/// Scores, rules and team names.
pub mod match_state;
/// Collaborators notified after each command.
pub mod sinks;
mod sse;
/// Match lifecycle and undo history.
pub mod state_machine;
/// Command execution and publishing.
pub mod transitions;

#[cfg(test)]
mod tests_props;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::AppConfig,
    services::{feedback::SseFeedback, sse_events::SsePresentation},
    state::{
        match_state::TeamNames,
        sinks::{FeedbackSink, PresentationSink},
        state_machine::{MatchPhase, MatchStateMachine},
    },
};

pub use self::sse::SseHub;

/// Handle to [`AppState`] shared across handlers.
pub type SharedState = Arc<AppState>;

const SSE_CAPACITY: usize = 32;

/// Central application state: the scoreboard and the collaborators it drives.
pub struct AppState {
    board: RwLock<MatchStateMachine>,
    sse: SseHub,
    presentation: Arc<dyn PresentationSink>,
    feedback: Arc<dyn FeedbackSink>,
    default_names: TeamNames,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// Board snapshots and feedback cues are published on the SSE hub.
    pub fn new(config: AppConfig) -> SharedState {
        let sse = SseHub::new(SSE_CAPACITY);
        let presentation = Arc::new(SsePresentation::new(sse.clone()));
        let feedback = Arc::new(SseFeedback::new(sse.clone(), config.feedback));
        Self::with_sinks(config, sse, presentation, feedback)
    }

    /// Construct the state with caller-provided collaborators.
    pub fn with_sinks(
        config: AppConfig,
        sse: SseHub,
        presentation: Arc<dyn PresentationSink>,
        feedback: Arc<dyn FeedbackSink>,
    ) -> SharedState {
        Arc::new(Self {
            board: RwLock::new(MatchStateMachine::new(config.rules)),
            sse,
            presentation,
            feedback,
            default_names: config.team_names,
        })
    }

    /// Scoreboard state machine.
    pub fn board(&self) -> &RwLock<MatchStateMachine> {
        &self.board
    }

    /// Broadcast hub used for the SSE stream.
    pub fn sse(&self) -> &SseHub {
        &self.sse
    }

    /// Sink receiving board snapshots.
    pub fn presentation(&self) -> &dyn PresentationSink {
        self.presentation.as_ref()
    }

    /// Sink receiving point cues.
    pub fn feedback(&self) -> &dyn FeedbackSink {
        self.feedback.as_ref()
    }

    /// Names used when a match is started without explicit ones.
    pub fn default_names(&self) -> &TeamNames {
        &self.default_names
    }

    /// Snapshot the current phase of the scoreboard.
    pub async fn phase(&self) -> MatchPhase {
        self.board.read().await.phase()
    }
}
