//! Property tests for the scoreboard over arbitrary rally sequences.

use proptest::prelude::*;

use crate::state::{
    match_state::{MatchRules, MatchState, StartSide, Team, TeamNames},
    state_machine::{MatchPhase, MatchStateMachine},
};

fn team() -> impl Strategy<Value = Team> {
    prop_oneof![Just(Team::Home), Just(Team::Away)]
}

fn start_side() -> impl Strategy<Value = StartSide> {
    prop_oneof![Just(StartSide::Left), Just(StartSide::Right)]
}

fn current(sm: &MatchStateMachine) -> MatchState {
    sm.state().cloned().expect("match configured")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Points stay within the cap, server slots within 1..=4, and sets never
    /// go past what is needed to win the match.
    #[test]
    fn prop_scores_stay_in_bounds(
        side in start_side(),
        first_serve in team(),
        rallies in prop::collection::vec(team(), 0..160),
    ) {
        let rules = MatchRules::default();
        let mut sm = MatchStateMachine::new(rules);
        sm.initialize_match(side, first_serve, TeamNames::default());

        for rally in rallies {
            sm.score_point(rally);
            let s = current(&sm);
            for score in [s.home, s.away] {
                prop_assert!(score.points <= rules.max_score, "points {}", score.points);
                prop_assert!((1..=4).contains(&score.server_slot));
                prop_assert!(score.sets <= rules.match_win_sets);
            }
            prop_assert_eq!(s.match_over, sm.phase() == MatchPhase::Finished);
        }
    }

    /// Each undo restores the state seen right before the matching rally,
    /// and undo past the first rally leaves the initial board untouched.
    #[test]
    fn prop_undo_walks_back_every_rally(
        side in start_side(),
        first_serve in team(),
        rallies in prop::collection::vec(team(), 0..120),
    ) {
        let mut sm = MatchStateMachine::default();
        sm.initialize_match(side, first_serve, TeamNames::default());
        let initial = current(&sm);

        let mut before_each = Vec::new();
        for rally in rallies {
            let before = current(&sm);
            if sm.score_point(rally).accepted() {
                before_each.push(before);
            }
        }
        prop_assert_eq!(sm.undo_depth(), before_each.len());

        while let Some(expected) = before_each.pop() {
            prop_assert!(sm.undo());
            prop_assert_eq!(current(&sm), expected);
        }
        prop_assert_eq!(current(&sm), initial.clone());
        prop_assert!(!sm.undo());
        prop_assert_eq!(current(&sm), initial);
    }
}
