//! Collaborators invoked by the scoreboard after each command.

use futures::future::BoxFuture;

use crate::dto::{board::BoardView, sse::MatchWonEvent};

/// Receives board snapshots and screen-level signals.
pub trait PresentationSink: Send + Sync {
    /// Render the board after a command, including commands that changed
    /// nothing.
    fn render(&self, view: &BoardView);
    /// Hide the setup prompt and show the live board. Called after the first
    /// [`render`](Self::render) of a new match.
    fn show_board(&self);
    /// Show the setup prompt (the live board is gone).
    fn show_setup(&self);
    /// Announce the match winner. Always called after the final [`render`](Self::render).
    fn announce_winner(&self, notice: &MatchWonEvent);
}

/// Audible/haptic cue fired once per accepted rally.
pub trait FeedbackSink: Send + Sync {
    /// Play the point cue. Must not fail.
    fn point_scored(&self);
}

/// Asks the operator whether the current match may be discarded.
pub trait ConfirmationSink: Send + Sync {
    /// Resolve to `true` when the reset is confirmed.
    fn confirm_reset(&self) -> BoxFuture<'_, bool>;
}
