use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse",
    tag = "sse",
    responses((status = 200, description = "Board SSE stream", content_type = "text/event-stream", body = String))
)]
/// Stream board snapshots, feedback cues and match announcements to displays.
pub async fn board_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let (receiver, initial) = sse_service::subscribe(&state).await;
    info!(displays = state.sse().subscriber_count(), "display connected");
    sse_service::broadcast_info(state.sse(), "display connected");
    sse_service::to_sse_stream(receiver, initial)
}

/// Configure the SSE endpoint.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse", get(board_stream))
}
