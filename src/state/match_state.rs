use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Points needed to take a set when the lead is large enough.
pub const SET_WIN_SCORE: u8 = 15;
/// Lead required to close a set before the hard cap.
pub const MIN_LEAD: u8 = 2;
/// Hard cap: reaching it wins the set regardless of margin.
pub const MAX_SCORE: u8 = 19;
/// Sets needed to take the match.
pub const MATCH_WIN_SETS: u8 = 2;
/// Number of rotation positions per team.
pub const SERVER_SLOTS: u8 = 4;

/// One of the two sides of the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// The local team.
    Home,
    /// The visiting team.
    Away,
}

impl Team {
    /// The other team.
    pub fn opponent(self) -> Self {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }
}

/// Side of the court the home team starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StartSide {
    /// Home is displayed on the left (default layout).
    Left,
    /// Home is displayed on the right, i.e. the court starts swapped.
    Right,
}

/// Scoring thresholds applied by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    /// Minimum points to win a set by lead.
    pub set_win_score: u8,
    /// Lead required below the cap.
    pub min_lead: u8,
    /// Points that win a set outright.
    pub max_score: u8,
    /// Sets required to win the match.
    pub match_win_sets: u8,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            set_win_score: SET_WIN_SCORE,
            min_lead: MIN_LEAD,
            max_score: MAX_SCORE,
            match_win_sets: MATCH_WIN_SETS,
        }
    }
}

impl MatchRules {
    /// Whether a team holding `score` against `other` has taken the set.
    pub fn wins_set(&self, score: u8, other: u8) -> bool {
        (score >= self.set_win_score && score >= other.saturating_add(self.min_lead))
            || score == self.max_score
    }
}

/// Display names used for announcements and panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamNames {
    /// Name shown for [`Team::Home`].
    pub home: String,
    /// Name shown for [`Team::Away`].
    pub away: String,
}

impl TeamNames {
    /// Name of the given team.
    pub fn of(&self, team: Team) -> &str {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }
}

impl Default for TeamNames {
    fn default() -> Self {
        Self {
            home: "Home".into(),
            away: "Away".into(),
        }
    }
}

/// Per-team counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamScore {
    /// Points in the current set.
    pub points: u8,
    /// Sets won so far.
    pub sets: u8,
    /// Rotation position currently serving for this team, in `1..=4`.
    pub server_slot: u8,
}

impl Default for TeamScore {
    fn default() -> Self {
        Self {
            points: 0,
            sets: 0,
            server_slot: 1,
        }
    }
}

impl TeamScore {
    fn rotate_server(&mut self) {
        self.server_slot = self.server_slot % SERVER_SLOTS + 1;
    }

    fn start_set(&mut self) {
        self.points = 0;
        self.server_slot = 1;
    }
}

/// Authoritative state of the match in progress. Cloned wholesale into the
/// undo history before every point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    /// Home team counters.
    pub home: TeamScore,
    /// Away team counters.
    pub away: TeamScore,
    /// Team holding serve.
    pub serving: Team,
    /// Whether home is drawn on the right-hand side.
    pub court_swapped: bool,
    /// Swap sides automatically after each set.
    pub auto_court_change: bool,
    /// Set once a team has won the match; freezes scoring.
    pub match_over: bool,
}

impl MatchState {
    /// Fresh match state for the given opening configuration.
    pub fn new(start_side: StartSide, first_serve: Team, auto_court_change: bool) -> Self {
        Self {
            home: TeamScore::default(),
            away: TeamScore::default(),
            serving: first_serve,
            court_swapped: start_side == StartSide::Right,
            auto_court_change,
            match_over: false,
        }
    }

    /// Counters of `team`.
    pub fn team(&self, team: Team) -> &TeamScore {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }

    fn team_mut(&mut self, team: Team) -> &mut TeamScore {
        match team {
            Team::Home => &mut self.home,
            Team::Away => &mut self.away,
        }
    }

    /// Team drawn on the left-hand side of the board.
    pub fn left(&self) -> Team {
        if self.court_swapped {
            Team::Away
        } else {
            Team::Home
        }
    }

    /// Winner of the match, if it is over.
    pub fn winner(&self, rules: &MatchRules) -> Option<Team> {
        if !self.match_over {
            return None;
        }
        [Team::Home, Team::Away]
            .into_iter()
            .find(|team| self.team(*team).sets >= rules.match_win_sets)
    }

    /// Award a rally to `team`, rotating the server of the side that lost
    /// serve. Returns whether the rally was a side-out.
    pub(crate) fn award_rally(&mut self, team: Team) -> bool {
        let previous = self.serving;
        let side_out = previous != team;

        self.team_mut(team).points += 1;
        self.serving = team;
        if side_out {
            self.team_mut(previous).rotate_server();
        }

        side_out
    }

    /// Team that has just closed the current set, if any.
    pub(crate) fn set_winner(&self, rules: &MatchRules) -> Option<Team> {
        if rules.wins_set(self.home.points, self.away.points) {
            Some(Team::Home)
        } else if rules.wins_set(self.away.points, self.home.points) {
            Some(Team::Away)
        } else {
            None
        }
    }

    /// Credit a set to `team`. Returns `true` when this set decides the match.
    pub(crate) fn close_set(&mut self, team: Team, rules: &MatchRules) -> bool {
        self.team_mut(team).sets += 1;
        if self.team(team).sets >= rules.match_win_sets {
            self.match_over = true;
            return true;
        }

        self.home.start_set();
        self.away.start_set();
        if self.auto_court_change {
            self.court_swapped = !self.court_swapped;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_win_boundaries() {
        let rules = MatchRules::default();
        assert!(!rules.wins_set(14, 14));
        assert!(rules.wins_set(15, 13));
        assert!(!rules.wins_set(15, 14));
        assert!(!rules.wins_set(18, 17));
        assert!(rules.wins_set(19, 18));
        assert!(rules.wins_set(19, 17));
        assert!(!rules.wins_set(13, 0));
    }

    #[test]
    fn server_slot_wraps_after_four() {
        let mut score = TeamScore::default();
        let seen: Vec<u8> = (0..5)
            .map(|_| {
                score.rotate_server();
                score.server_slot
            })
            .collect();
        assert_eq!(seen, vec![2, 3, 4, 1, 2]);
    }

    #[test]
    fn start_side_right_swaps_court() {
        let state = MatchState::new(StartSide::Right, Team::Away, true);
        assert!(state.court_swapped);
        assert_eq!(state.left(), Team::Away);
        assert_eq!(state.serving, Team::Away);
    }

    #[test]
    fn winner_requires_match_over() {
        let rules = MatchRules::default();
        let mut state = MatchState::new(StartSide::Left, Team::Home, true);
        state.home.sets = 2;
        assert_eq!(state.winner(&rules), None);
        state.match_over = true;
        assert_eq!(state.winner(&rules), Some(Team::Home));
    }
}
