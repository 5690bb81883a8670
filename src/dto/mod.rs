/// Board snapshot sent to operators and displays.
pub mod board;
/// Command payloads.
pub mod commands;
/// Health check response.
pub mod health;
/// Public view of the scoreboard phase.
pub mod phase;
/// SSE payloads.
pub mod sse;
