//! Application-level configuration loading: scoring rules, feedback cue and
//! default team names.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    dto::commands::TEAM_NAME_MAX_LEN,
    state::match_state::{
        MATCH_WIN_SETS, MAX_SCORE, MIN_LEAD, MatchRules, SET_WIN_SCORE, TeamNames,
    },
};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "COURTSIDE_CONFIG_PATH";

/// Reasons a configuration file could not be turned into an [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is not valid JSON for the expected shape.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file parsed but its values are inconsistent.
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Tone and vibration played when a point is recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackCue {
    /// Beep pitch in hertz.
    pub tone_hz: u32,
    /// Beep length in milliseconds.
    pub tone_ms: u32,
    /// Beep volume between 0 and 1.
    pub gain: f32,
    /// Vibration length in milliseconds.
    pub vibration_ms: u32,
}

impl Default for FeedbackCue {
    fn default() -> Self {
        Self {
            tone_hz: 440,
            tone_ms: 100,
            gain: 0.5,
            vibration_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Scoring thresholds.
    pub rules: MatchRules,
    /// Cue played for each accepted point.
    pub feedback: FeedbackCue,
    /// Names used when a match starts without explicit ones.
    pub team_names: TeamNames,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        set_win_score = app_config.rules.set_win_score,
                        max_score = app_config.rules.max_score,
                        match_win_sets = app_config.rules.match_win_sets,
                        "loaded scoreboard config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to load config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(contents)?;
        raw.validate()?;
        Ok(raw.into())
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    #[validate(nested)]
    rules: RawRules,
    #[serde(default)]
    #[validate(nested)]
    feedback: RawFeedback,
    #[serde(default)]
    #[validate(nested)]
    teams: RawTeams,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            rules: value.rules.into(),
            feedback: value.feedback.into(),
            team_names: value.teams.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_thresholds"))]
struct RawRules {
    #[validate(range(min = 1))]
    set_win_score: u8,
    #[validate(range(min = 1))]
    min_lead: u8,
    #[validate(range(min = 1))]
    max_score: u8,
    #[validate(range(min = 1))]
    match_win_sets: u8,
}

impl Default for RawRules {
    fn default() -> Self {
        Self {
            set_win_score: SET_WIN_SCORE,
            min_lead: MIN_LEAD,
            max_score: MAX_SCORE,
            match_win_sets: MATCH_WIN_SETS,
        }
    }
}

/// The cap must not undercut the regular winning score, and a set must be
/// winnable by lead from zero.
fn validate_thresholds(rules: &RawRules) -> Result<(), ValidationError> {
    if rules.max_score < rules.set_win_score {
        let mut err = ValidationError::new("max_score_below_set_win_score");
        err.message = Some(
            format!(
                "max_score ({}) must be at least set_win_score ({})",
                rules.max_score, rules.set_win_score
            )
            .into(),
        );
        return Err(err);
    }
    if rules.set_win_score < rules.min_lead {
        let mut err = ValidationError::new("set_win_score_below_min_lead");
        err.message = Some("set_win_score must be at least min_lead".into());
        return Err(err);
    }
    Ok(())
}

impl From<RawRules> for MatchRules {
    fn from(value: RawRules) -> Self {
        Self {
            set_win_score: value.set_win_score,
            min_lead: value.min_lead,
            max_score: value.max_score,
            match_win_sets: value.match_win_sets,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(default)]
/// JSON representation of the point cue.
struct RawFeedback {
    #[validate(range(min = 20, max = 20000))]
    tone_hz: u32,
    #[validate(range(max = 2000))]
    tone_ms: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    gain: f32,
    #[validate(range(max = 2000))]
    vibration_ms: u32,
}

impl Default for RawFeedback {
    fn default() -> Self {
        let cue = FeedbackCue::default();
        Self {
            tone_hz: cue.tone_hz,
            tone_ms: cue.tone_ms,
            gain: cue.gain,
            vibration_ms: cue.vibration_ms,
        }
    }
}

impl From<RawFeedback> for FeedbackCue {
    fn from(value: RawFeedback) -> Self {
        Self {
            tone_hz: value.tone_hz,
            tone_ms: value.tone_ms,
            gain: value.gain,
            vibration_ms: value.vibration_ms,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(default)]
struct RawTeams {
    #[validate(length(min = 1, max = TEAM_NAME_MAX_LEN))]
    home: String,
    #[validate(length(min = 1, max = TEAM_NAME_MAX_LEN))]
    away: String,
}

impl Default for RawTeams {
    fn default() -> Self {
        let names = TeamNames::default();
        Self {
            home: names.home,
            away: names.away,
        }
    }
}

impl From<RawTeams> for TeamNames {
    fn from(value: RawTeams) -> Self {
        Self {
            home: value.home,
            away: value.away,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
