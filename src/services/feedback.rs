use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::{
    config::FeedbackCue,
    dto::sse::{FeedbackCueEvent, ServerEvent},
    services::sse_events::EVENT_FEEDBACK_CUE,
    state::{SseHub, sinks::FeedbackSink},
};

/// Feedback sink asking connected displays to beep and vibrate.
///
/// The cue payload is encoded on the first point and reused afterwards.
pub struct SseFeedback {
    hub: SseHub,
    cue: FeedbackCue,
    encoded: OnceLock<Option<ServerEvent>>,
}

impl SseFeedback {
    /// Play `cue` through `hub`.
    pub fn new(hub: SseHub, cue: FeedbackCue) -> Self {
        Self {
            hub,
            cue,
            encoded: OnceLock::new(),
        }
    }

    fn event(&self) -> Option<&ServerEvent> {
        self.encoded
            .get_or_init(|| {
                let payload = FeedbackCueEvent {
                    tone_hz: self.cue.tone_hz,
                    tone_ms: self.cue.tone_ms,
                    gain: self.cue.gain,
                    vibration_ms: self.cue.vibration_ms,
                };
                match ServerEvent::json(Some(EVENT_FEEDBACK_CUE.to_string()), &payload) {
                    Ok(event) => {
                        debug!(tone_hz = payload.tone_hz, "feedback cue initialised");
                        Some(event)
                    }
                    Err(err) => {
                        warn!(error = %err, "feedback cue unavailable");
                        None
                    }
                }
            })
            .as_ref()
    }
}

impl FeedbackSink for SseFeedback {
    fn point_scored(&self) {
        if let Some(event) = self.event() {
            self.hub.broadcast(event.clone());
        }
    }
}
