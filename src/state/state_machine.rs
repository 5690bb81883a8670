use uuid::Uuid;

use crate::state::match_state::{MatchRules, MatchState, StartSide, Team, TeamNames};

/// High-level phases the scoreboard can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match configured; the setup prompt is shown.
    Setup,
    /// A match is being scored.
    InProgress,
    /// A team has won the match; the final score stays on screen.
    Finished,
}

/// Result of a [`MatchStateMachine::score_point`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// The tap was dropped (no match, or match already over).
    Ignored,
    /// A rally was awarded without closing the set.
    Rally {
        /// Serve changed hands on this rally.
        side_out: bool,
    },
    /// The rally closed a set and a fresh one started.
    SetWon {
        /// Team that took the set.
        winner: Team,
    },
    /// The rally closed the deciding set.
    MatchWon {
        /// Team that took the match.
        winner: Team,
    },
}

impl ScoreOutcome {
    /// Whether the rally was recorded.
    pub fn accepted(&self) -> bool {
        !matches!(self, ScoreOutcome::Ignored)
    }
}

/// A configured match together with its undo history.
#[derive(Debug, Clone)]
struct ActiveMatch {
    id: Uuid,
    names: TeamNames,
    state: MatchState,
    history: Vec<MatchState>,
}

/// State machine implementing side-out scoring with undo.
///
/// The auto court change preference lives on the machine so that it survives
/// undo, resets and new matches.
#[derive(Debug, Clone)]
pub struct MatchStateMachine {
    rules: MatchRules,
    auto_court_change: bool,
    current: Option<ActiveMatch>,
}

impl Default for MatchStateMachine {
    fn default() -> Self {
        Self::new(MatchRules::default())
    }
}

impl MatchStateMachine {
    /// Create a machine in the setup phase with auto court change enabled.
    pub fn new(rules: MatchRules) -> Self {
        Self {
            rules,
            auto_court_change: true,
            current: None,
        }
    }

    /// Scoring thresholds in use.
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> MatchPhase {
        match &self.current {
            None => MatchPhase::Setup,
            Some(active) if active.state.match_over => MatchPhase::Finished,
            Some(_) => MatchPhase::InProgress,
        }
    }

    /// Live match state, if a match is configured.
    pub fn state(&self) -> Option<&MatchState> {
        self.current.as_ref().map(|active| &active.state)
    }

    /// Identifier of the configured match.
    pub fn match_id(&self) -> Option<Uuid> {
        self.current.as_ref().map(|active| active.id)
    }

    /// Display names of the configured match.
    pub fn names(&self) -> Option<&TeamNames> {
        self.current.as_ref().map(|active| &active.names)
    }

    /// Number of snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.current
            .as_ref()
            .map_or(0, |active| active.history.len())
    }

    /// Current auto court change preference.
    pub fn auto_court_change(&self) -> bool {
        self.auto_court_change
    }

    /// Winner of the match, once it is over.
    pub fn winner(&self) -> Option<Team> {
        self.state().and_then(|state| state.winner(&self.rules))
    }

    /// Start a new match, discarding any previous one and its history.
    pub fn initialize_match(
        &mut self,
        start_side: StartSide,
        first_serve: Team,
        names: TeamNames,
    ) -> &MatchState {
        let active = self.current.insert(ActiveMatch {
            id: Uuid::new_v4(),
            names,
            state: MatchState::new(start_side, first_serve, self.auto_court_change),
            history: Vec::new(),
        });
        &active.state
    }

    /// Award a rally to `team`. Silently ignored without a live match.
    pub fn score_point(&mut self, team: Team) -> ScoreOutcome {
        let rules = self.rules;
        let Some(active) = self.current.as_mut() else {
            return ScoreOutcome::Ignored;
        };
        if active.state.match_over {
            return ScoreOutcome::Ignored;
        }

        active.history.push(active.state.clone());
        let side_out = active.state.award_rally(team);

        let Some(winner) = active.state.set_winner(&rules) else {
            return ScoreOutcome::Rally { side_out };
        };
        if active.state.close_set(winner, &rules) {
            ScoreOutcome::MatchWon { winner }
        } else {
            ScoreOutcome::SetWon { winner }
        }
    }

    /// Restore the state captured before the last rally. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let preference = self.auto_court_change;
        let Some(active) = self.current.as_mut() else {
            return false;
        };
        let Some(mut previous) = active.history.pop() else {
            return false;
        };

        previous.auto_court_change = preference;
        active.state = previous;
        true
    }

    /// Flip the displayed sides. Not recorded in history and allowed after the
    /// match is over.
    pub fn toggle_court(&mut self) -> bool {
        let Some(active) = self.current.as_mut() else {
            return false;
        };
        active.state.court_swapped = !active.state.court_swapped;
        true
    }

    /// Update the auto court change preference.
    pub fn set_auto_court_change(&mut self, enabled: bool) {
        self.auto_court_change = enabled;
        if let Some(active) = self.current.as_mut() {
            active.state.auto_court_change = enabled;
        }
    }

    /// Drop the current match and return to the setup phase.
    pub fn reset_match(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(first_serve: Team) -> MatchStateMachine {
        let mut sm = MatchStateMachine::default();
        sm.initialize_match(StartSide::Left, first_serve, TeamNames::default());
        sm
    }

    fn state(sm: &MatchStateMachine) -> &MatchState {
        sm.state().expect("match configured")
    }

    fn score_many(sm: &mut MatchStateMachine, team: Team, count: usize) {
        for _ in 0..count {
            sm.score_point(team);
        }
    }

    /// Bring the current set to `home`-`away` by alternating rallies while
    /// neither side can close it.
    fn reach(sm: &mut MatchStateMachine, home: u8, away: u8) {
        loop {
            let s = state(sm);
            let (h, a) = (s.home.points, s.away.points);
            if h >= home && a >= away {
                break;
            }
            if h < home && (h <= a || a >= away) {
                sm.score_point(Team::Home);
            } else {
                sm.score_point(Team::Away);
            }
        }
    }

    #[test]
    fn initial_state_is_setup() {
        let sm = MatchStateMachine::default();
        assert_eq!(sm.phase(), MatchPhase::Setup);
        assert!(sm.state().is_none());
        assert_eq!(sm.undo_depth(), 0);
    }

    #[test]
    fn initialize_sets_defaults() {
        let mut sm = MatchStateMachine::default();
        let state = sm
            .initialize_match(StartSide::Right, Team::Away, TeamNames::default())
            .clone();

        assert_eq!(sm.phase(), MatchPhase::InProgress);
        assert_eq!((state.home.points, state.away.points), (0, 0));
        assert_eq!((state.home.sets, state.away.sets), (0, 0));
        assert_eq!((state.home.server_slot, state.away.server_slot), (1, 1));
        assert_eq!(state.serving, Team::Away);
        assert!(state.court_swapped);
        assert!(!state.match_over);
    }

    #[test]
    fn scoring_before_setup_is_ignored() {
        let mut sm = MatchStateMachine::default();
        assert_eq!(sm.score_point(Team::Home), ScoreOutcome::Ignored);
        assert!(!sm.undo());
        assert!(!sm.toggle_court());
    }

    #[test]
    fn side_out_scenario() {
        let mut sm = started(Team::Home);

        assert_eq!(
            sm.score_point(Team::Home),
            ScoreOutcome::Rally { side_out: false }
        );
        assert_eq!(state(&sm).home.server_slot, 1);
        sm.score_point(Team::Home);
        assert_eq!(
            sm.score_point(Team::Away),
            ScoreOutcome::Rally { side_out: true }
        );
        assert_eq!(state(&sm).serving, Team::Away);
        assert_eq!(state(&sm).home.server_slot, 2);
        assert_eq!(state(&sm).away.server_slot, 1);
        sm.score_point(Team::Home);

        let s = state(&sm);
        assert_eq!((s.home.points, s.away.points), (3, 1));
        assert_eq!((s.home.server_slot, s.away.server_slot), (2, 2));
        assert_eq!(s.serving, Team::Home);
    }

    #[test]
    fn set_won_at_fifteen_with_lead() {
        let mut sm = started(Team::Home);
        reach(&mut sm, 14, 13);
        assert_eq!(
            sm.score_point(Team::Home),
            ScoreOutcome::SetWon { winner: Team::Home }
        );

        let s = state(&sm);
        assert_eq!((s.home.sets, s.away.sets), (1, 0));
        assert_eq!((s.home.points, s.away.points), (0, 0));
        assert_eq!((s.home.server_slot, s.away.server_slot), (1, 1));
        assert!(s.court_swapped);
    }

    #[test]
    fn deuce_continues_until_two_point_lead() {
        let mut sm = started(Team::Home);
        reach(&mut sm, 14, 14);
        assert_eq!(
            sm.score_point(Team::Home),
            ScoreOutcome::Rally { side_out: true }
        );
        reach(&mut sm, 17, 17);
        sm.score_point(Team::Home);
        let s = state(&sm);
        assert_eq!((s.home.points, s.away.points), (18, 17));
        assert_eq!(s.home.sets, 0);
    }

    #[test]
    fn cap_at_nineteen_wins_without_margin() {
        let mut sm = started(Team::Away);
        reach(&mut sm, 18, 18);
        assert_eq!(state(&sm).serving, Team::Away);
        assert_eq!(
            sm.score_point(Team::Home),
            ScoreOutcome::SetWon { winner: Team::Home }
        );
        let s = state(&sm);
        assert_eq!((s.home.sets, s.away.sets), (1, 0));
        assert_eq!((s.home.points, s.away.points), (0, 0));
    }

    #[test]
    fn scores_never_exceed_cap() {
        let mut sm = started(Team::Home);
        let pattern = [Team::Home, Team::Away, Team::Away, Team::Home, Team::Away];
        for team in pattern.iter().cycle().take(400) {
            sm.score_point(*team);
            if let Some(s) = sm.state() {
                assert!(s.home.points <= 19 && s.away.points <= 19);
                assert!((1..=4).contains(&s.home.server_slot));
                assert!((1..=4).contains(&s.away.server_slot));
            }
        }
    }

    #[test]
    fn match_won_after_two_sets_freezes_score() {
        let mut sm = started(Team::Home);
        score_many(&mut sm, Team::Home, 15);
        score_many(&mut sm, Team::Home, 14);
        assert_eq!(
            sm.score_point(Team::Home),
            ScoreOutcome::MatchWon { winner: Team::Home }
        );

        assert_eq!(sm.phase(), MatchPhase::Finished);
        assert_eq!(sm.winner(), Some(Team::Home));
        let frozen = state(&sm).clone();
        assert_eq!(frozen.home.points, 15);
        assert_eq!(frozen.home.sets, 2);
        assert!(frozen.court_swapped);

        assert_eq!(sm.score_point(Team::Away), ScoreOutcome::Ignored);
        assert_eq!(state(&sm), &frozen);
        assert_eq!(sm.undo_depth(), 30);
    }

    #[test]
    fn toggle_court_works_after_match_over() {
        let mut sm = started(Team::Home);
        score_many(&mut sm, Team::Away, 30);
        assert_eq!(sm.phase(), MatchPhase::Finished);
        let before = state(&sm).court_swapped;
        assert!(sm.toggle_court());
        assert_eq!(state(&sm).court_swapped, !before);
        assert_eq!(sm.undo_depth(), 30);
    }

    #[test]
    fn undo_restores_previous_states_in_order() {
        let mut sm = started(Team::Home);
        let initial = state(&sm).clone();
        let mut snapshots = Vec::new();
        for team in [Team::Home, Team::Away, Team::Away, Team::Home] {
            snapshots.push(state(&sm).clone());
            sm.score_point(team);
        }

        while let Some(expected) = snapshots.pop() {
            assert!(sm.undo());
            assert_eq!(state(&sm), &expected);
        }
        assert_eq!(state(&sm), &initial);
        assert!(!sm.undo());
        assert_eq!(state(&sm), &initial);
    }

    #[test]
    fn undo_reopens_finished_match() {
        let mut sm = started(Team::Home);
        score_many(&mut sm, Team::Home, 30);
        assert_eq!(sm.phase(), MatchPhase::Finished);
        assert!(sm.undo());
        assert_eq!(sm.phase(), MatchPhase::InProgress);
        let s = state(&sm);
        assert_eq!((s.home.points, s.home.sets), (14, 1));
    }

    #[test]
    fn undo_across_set_restores_court_and_rotation() {
        let mut sm = started(Team::Home);
        reach(&mut sm, 14, 5);
        let before = state(&sm).clone();
        assert!(!before.court_swapped);
        assert!(before.auto_court_change);

        assert_eq!(
            sm.score_point(Team::Home),
            ScoreOutcome::SetWon { winner: Team::Home }
        );
        let s = state(&sm);
        assert!(s.court_swapped);
        assert_eq!(s.home.sets, 1);
        assert_eq!((s.home.points, s.away.points), (0, 0));

        assert!(sm.undo());
        let s = state(&sm);
        assert!(!s.court_swapped);
        assert_eq!((s.home.points, s.away.points), (14, 5));
        assert_eq!((s.home.sets, s.away.sets), (0, 0));
        assert_eq!(s.home.server_slot, before.home.server_slot);
        assert_eq!(s.away.server_slot, before.away.server_slot);
        assert_eq!(s.serving, before.serving);
        assert_eq!(s, &before);
    }

    #[test]
    fn undo_keeps_auto_court_change_preference() {
        let mut sm = started(Team::Home);
        sm.score_point(Team::Home);
        sm.set_auto_court_change(false);
        assert!(sm.undo());
        assert!(!state(&sm).auto_court_change);
        assert!(!sm.auto_court_change());
    }

    #[test]
    fn disabled_auto_court_change_keeps_sides() {
        let mut sm = started(Team::Home);
        sm.set_auto_court_change(false);
        score_many(&mut sm, Team::Home, 15);
        assert_eq!(state(&sm).home.sets, 1);
        assert!(!state(&sm).court_swapped);

        assert!(sm.toggle_court());
        assert!(state(&sm).court_swapped);
    }

    #[test]
    fn preference_survives_reset_and_new_match() {
        let mut sm = started(Team::Home);
        sm.set_auto_court_change(false);
        sm.reset_match();
        assert_eq!(sm.phase(), MatchPhase::Setup);
        assert!(!sm.auto_court_change());

        sm.initialize_match(StartSide::Left, Team::Away, TeamNames::default());
        assert!(!state(&sm).auto_court_change);
    }

    #[test]
    fn initialize_clears_history_and_assigns_new_id() {
        let mut sm = started(Team::Home);
        let first_id = sm.match_id();
        score_many(&mut sm, Team::Away, 3);
        sm.initialize_match(StartSide::Left, Team::Home, TeamNames::default());
        assert_eq!(sm.undo_depth(), 0);
        assert_ne!(sm.match_id(), first_id);
        assert!(!sm.undo());
    }
}
