/// OpenAPI documentation generation.
pub mod documentation;
/// Point cue delivered to the display.
pub mod feedback;
/// Health check service.
pub mod health_service;
/// Scoreboard commands and reads.
pub mod scoreboard_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
