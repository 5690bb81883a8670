use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{
        board::BoardView,
        sse::{MatchWonEvent, ServerEvent},
    },
    state::{SseHub, sinks::PresentationSink},
};

/// Full board snapshot.
pub const EVENT_BOARD_UPDATED: &str = "board.updated";
/// The live board replaces the setup prompt.
pub const EVENT_BOARD_LIVE: &str = "board.live";
/// The setup prompt should be shown.
pub const EVENT_BOARD_SETUP: &str = "board.setup";
/// Winner announcement.
pub const EVENT_MATCH_WON: &str = "match.won";
/// Beep and vibrate for an accepted point.
pub const EVENT_FEEDBACK_CUE: &str = "feedback.cue";

/// Presentation sink that fans board snapshots out to every SSE subscriber.
pub struct SsePresentation {
    hub: SseHub,
}

impl SsePresentation {
    /// Publish on `hub`.
    pub fn new(hub: SseHub) -> Self {
        Self { hub }
    }
}

impl PresentationSink for SsePresentation {
    fn render(&self, view: &BoardView) {
        send_event(&self.hub, EVENT_BOARD_UPDATED, view);
    }

    fn show_board(&self) {
        self.hub.broadcast(screen_event(EVENT_BOARD_LIVE));
    }

    fn show_setup(&self) {
        self.hub.broadcast(screen_event(EVENT_BOARD_SETUP));
    }

    fn announce_winner(&self, notice: &MatchWonEvent) {
        send_event(&self.hub, EVENT_MATCH_WON, notice);
    }
}

fn screen_event(name: &str) -> ServerEvent {
    ServerEvent::new(Some(name.to_string()), "{}".to_string())
}

/// Encode the current board for a freshly connected client.
pub fn board_event(view: &BoardView) -> Option<ServerEvent> {
    match ServerEvent::json(Some(EVENT_BOARD_UPDATED.to_string()), view) {
        Ok(event) => Some(event),
        Err(err) => {
            warn!(error = %err, "failed to serialize board snapshot");
            None
        }
    }
}

pub(crate) fn send_event(hub: &SseHub, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => hub.broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}
