use crate::{
    dto::{board::BoardView, sse::MatchWonEvent},
    state::{
        SharedState,
        state_machine::{MatchStateMachine, ScoreOutcome},
    },
};

/// Follow-up requested by a command once it has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Only re-render the board.
    Render,
    /// A rally was submitted; cue feedback when it was accepted.
    Scored(ScoreOutcome),
    /// A match was started; swap the setup prompt for the live board.
    ShowBoard,
    /// The match was discarded; bring the setup prompt back.
    ShowSetup,
}

/// Run a command against the scoreboard, then publish the resulting board to
/// the collaborators.
///
/// The write lock is held until publishing is done so that snapshots reach
/// the presentation sink in command order. A match win is announced after the
/// final board has been rendered.
pub async fn run_command_with_broadcast<F>(state: &SharedState, command: F) -> BoardView
where
    F: FnOnce(&mut MatchStateMachine) -> Effect,
{
    let mut board = state.board().write().await;
    let effect = command(&mut board);
    let view = BoardView::from(&*board);

    if matches!(effect, Effect::Scored(outcome) if outcome.accepted()) {
        state.feedback().point_scored();
    }

    let presentation = state.presentation();
    presentation.render(&view);

    match effect {
        Effect::ShowBoard => presentation.show_board(),
        Effect::ShowSetup => presentation.show_setup(),
        Effect::Scored(ScoreOutcome::MatchWon { winner }) => {
            if let Some(notice) = MatchWonEvent::for_board(&board, winner) {
                presentation.announce_winner(&notice);
            }
        }
        _ => {}
    }

    view
}
