//! Commands driving the scoreboard. Each one runs to completion under the
//! board lock and publishes the resulting board; none of them fails once the
//! request has been validated.

use futures::{FutureExt, future::BoxFuture};
use tracing::{debug, info};

use crate::{
    dto::{board::BoardView, commands::InitializeMatchRequest},
    error::ServiceError,
    state::{
        SharedState,
        match_state::{Team, TeamNames},
        sinks::ConfirmationSink,
        state_machine::ScoreOutcome,
        transitions::{Effect, run_command_with_broadcast},
    },
};

/// Confirmation already given by the operator alongside the reset request.
pub struct PromptAnswer(pub bool);

impl ConfirmationSink for PromptAnswer {
    fn confirm_reset(&self) -> BoxFuture<'_, bool> {
        futures::future::ready(self.0).boxed()
    }
}

/// Start a new match from the setup prompt, replacing any match in progress.
pub async fn initialize_match(
    state: &SharedState,
    request: InitializeMatchRequest,
) -> Result<BoardView, ServiceError> {
    let defaults = state.default_names();
    let names = TeamNames {
        home: resolve_name(request.home_name, &defaults.home)?,
        away: resolve_name(request.away_name, &defaults.away)?,
    };

    let view = run_command_with_broadcast(state, |board| {
        board.initialize_match(request.start_side, request.first_serve, names);
        Effect::ShowBoard
    })
    .await;

    info!(
        match_id = ?view.match_id,
        start_side = ?request.start_side,
        first_serve = ?request.first_serve,
        "match started"
    );
    Ok(view)
}

/// Award a rally to `team`.
pub async fn score_point(state: &SharedState, team: Team) -> BoardView {
    let mut outcome = ScoreOutcome::Ignored;
    let view = run_command_with_broadcast(state, |board| {
        outcome = board.score_point(team);
        Effect::Scored(outcome)
    })
    .await;

    match outcome {
        ScoreOutcome::Ignored => {
            debug!(?team, phase = ?view.phase, "point ignored; no live match or match over")
        }
        ScoreOutcome::Rally { side_out } => debug!(?team, side_out, "point scored"),
        ScoreOutcome::SetWon { winner } => info!(?winner, "set won"),
        ScoreOutcome::MatchWon { winner } => info!(?winner, "match won"),
    }
    view
}

/// Revert the last rally, if any.
pub async fn undo(state: &SharedState) -> BoardView {
    let mut reverted = false;
    let view = run_command_with_broadcast(state, |board| {
        reverted = board.undo();
        Effect::Render
    })
    .await;

    debug!(reverted, depth = view.undo_depth, "undo");
    view
}

/// Swap the displayed sides.
pub async fn toggle_court(state: &SharedState) -> BoardView {
    let view = run_command_with_broadcast(state, |board| {
        board.toggle_court();
        Effect::Render
    })
    .await;

    debug!(court_swapped = view.court_swapped, "court toggled");
    view
}

/// Enable or disable the automatic side change after each set.
pub async fn set_auto_court_change(state: &SharedState, enabled: bool) -> BoardView {
    let view = run_command_with_broadcast(state, |board| {
        board.set_auto_court_change(enabled);
        Effect::Render
    })
    .await;

    debug!(enabled, "auto court change updated");
    view
}

/// Discard the current match once `confirmation` agrees, returning to setup.
///
/// A declined prompt leaves the board untouched and publishes nothing.
pub async fn reset_match(
    state: &SharedState,
    confirmation: &dyn ConfirmationSink,
) -> BoardView {
    if !confirmation.confirm_reset().await {
        debug!("match reset declined");
        return current_board(state).await;
    }

    let view = run_command_with_broadcast(state, |board| {
        board.reset_match();
        Effect::ShowSetup
    })
    .await;

    info!("match reset; awaiting setup");
    view
}

/// Current board, whatever the phase.
pub async fn current_board(state: &SharedState) -> BoardView {
    let board = state.board().read().await;
    BoardView::from(&*board)
}

/// Current board of the configured match.
pub async fn active_board(state: &SharedState) -> Result<BoardView, ServiceError> {
    let board = state.board().read().await;
    if board.state().is_none() {
        return Err(ServiceError::NoActiveMatch);
    }
    Ok(BoardView::from(&*board))
}

fn resolve_name(input: Option<String>, default: &str) -> Result<String, ServiceError> {
    match input {
        None => Ok(default.to_string()),
        Some(name) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(ServiceError::InvalidInput(
                    "team name must not be blank".into(),
                ));
            }
            Ok(trimmed.to_string())
        }
    }
}
