use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{post, put},
};
use validator::Validate;

use crate::{
    dto::{
        board::BoardView,
        commands::{AutoCourtChangeRequest, InitializeMatchRequest, ResetMatchRequest},
    },
    error::AppError,
    services::scoreboard_service::{self, PromptAnswer},
    state::{SharedState, match_state::Team},
};

/// Routes driving the scoreboard.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/match", post(initialize_match).get(get_board))
        .route("/match/points/{team}", post(score_point))
        .route("/match/undo", post(undo))
        .route("/match/court/toggle", post(toggle_court))
        .route("/match/auto-court-change", put(set_auto_court_change))
        .route("/match/reset", post(reset_match))
}

/// Start a new match from the setup prompt.
#[utoipa::path(
    post,
    path = "/match",
    tag = "match",
    request_body = InitializeMatchRequest,
    responses(
        (status = 200, description = "Match started", body = BoardView),
        (status = 400, description = "Invalid team names")
    )
)]
pub async fn initialize_match(
    State(state): State<SharedState>,
    Json(payload): Json<InitializeMatchRequest>,
) -> Result<Json<BoardView>, AppError> {
    payload.validate()?;
    let view = scoreboard_service::initialize_match(&state, payload).await?;
    Ok(Json(view))
}

/// Return the board of the match in progress.
#[utoipa::path(
    get,
    path = "/match",
    tag = "match",
    responses(
        (status = 200, description = "Current board", body = BoardView),
        (status = 404, description = "No match configured")
    )
)]
pub async fn get_board(State(state): State<SharedState>) -> Result<Json<BoardView>, AppError> {
    Ok(Json(scoreboard_service::active_board(&state).await?))
}

/// Award a rally to a team. Ignored once the match is over.
#[utoipa::path(
    post,
    path = "/match/points/{team}",
    tag = "match",
    params(("team" = Team, Path, description = "Team that won the rally")),
    responses((status = 200, description = "Board after the rally", body = BoardView))
)]
pub async fn score_point(
    State(state): State<SharedState>,
    Path(team): Path<Team>,
) -> Json<BoardView> {
    Json(scoreboard_service::score_point(&state, team).await)
}

/// Revert the last rally.
#[utoipa::path(
    post,
    path = "/match/undo",
    tag = "match",
    responses((status = 200, description = "Board after undo", body = BoardView))
)]
pub async fn undo(State(state): State<SharedState>) -> Json<BoardView> {
    Json(scoreboard_service::undo(&state).await)
}

/// Swap the displayed court sides.
#[utoipa::path(
    post,
    path = "/match/court/toggle",
    tag = "match",
    responses((status = 200, description = "Board after the swap", body = BoardView))
)]
pub async fn toggle_court(State(state): State<SharedState>) -> Json<BoardView> {
    Json(scoreboard_service::toggle_court(&state).await)
}

/// Enable or disable automatic side changes between sets.
#[utoipa::path(
    put,
    path = "/match/auto-court-change",
    tag = "match",
    request_body = AutoCourtChangeRequest,
    responses((status = 200, description = "Preference updated", body = BoardView))
)]
pub async fn set_auto_court_change(
    State(state): State<SharedState>,
    Json(payload): Json<AutoCourtChangeRequest>,
) -> Json<BoardView> {
    Json(scoreboard_service::set_auto_court_change(&state, payload.enabled).await)
}

/// Discard the match and return to setup when the operator confirmed.
#[utoipa::path(
    post,
    path = "/match/reset",
    tag = "match",
    request_body = ResetMatchRequest,
    responses((status = 200, description = "Board after the prompt was answered", body = BoardView))
)]
pub async fn reset_match(
    State(state): State<SharedState>,
    Json(payload): Json<ResetMatchRequest>,
) -> Json<BoardView> {
    let answer = PromptAnswer(payload.confirmed);
    Json(scoreboard_service::reset_match(&state, &answer).await)
}
