//! Request payloads accepted by the scoreboard REST routes.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::state::match_state::{StartSide, Team};

/// Maximum length of a team display name.
pub const TEAM_NAME_MAX_LEN: u64 = 32;

/// Payload used to start a new match from the setup prompt.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct InitializeMatchRequest {
    /// Side the home team starts on.
    pub start_side: StartSide,
    /// Team serving the first rally.
    pub first_serve: Team,
    /// Optional display name; the configured default is used when omitted.
    #[serde(default)]
    #[validate(length(min = 1, max = TEAM_NAME_MAX_LEN))]
    pub home_name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = TEAM_NAME_MAX_LEN))]
    /// Same as `home_name`, for the away team.
    pub away_name: Option<String>,
}

/// Payload toggling automatic side changes between sets.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AutoCourtChangeRequest {
    /// Swap sides automatically after each set.
    pub enabled: bool,
}

/// Operator's answer to the "reset match?" prompt.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetMatchRequest {
    /// `true` when the operator accepted the reset.
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(home: Option<&str>) -> InitializeMatchRequest {
        InitializeMatchRequest {
            start_side: StartSide::Left,
            first_serve: Team::Home,
            home_name: home.map(str::to_string),
            away_name: None,
        }
    }

    #[test]
    fn names_are_optional() {
        assert!(request(None).validate().is_ok());
        assert!(request(Some("Falcons")).validate().is_ok());
    }

    #[test]
    fn empty_or_long_names_are_rejected() {
        assert!(request(Some("")).validate().is_err());
        let long = "x".repeat(TEAM_NAME_MAX_LEN as usize + 1);
        assert!(request(Some(&long)).validate().is_err());
    }

    #[test]
    fn name_at_length_limit_is_accepted() {
        let exact = "x".repeat(TEAM_NAME_MAX_LEN as usize);
        assert!(request(Some(&exact)).validate().is_ok());

        let mut away_too_long = request(None);
        away_too_long.away_name = Some("y".repeat(TEAM_NAME_MAX_LEN as usize + 1));
        assert!(away_too_long.validate().is_err());
    }

    #[test]
    fn deserializes_snake_case_enums() {
        let parsed: InitializeMatchRequest =
            serde_json::from_str(r#"{"start_side":"right","first_serve":"away"}"#).unwrap();
        assert_eq!(parsed.start_side, StartSide::Right);
        assert_eq!(parsed.first_serve, Team::Away);
        assert!(parsed.home_name.is_none());
    }
}
