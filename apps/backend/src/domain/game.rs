//! Game records and creation-time validation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameFieldError {
    #[error("required field `{0}` is missing or empty")]
    MissingField(&'static str),
}

/// A persisted two-truths-one-lie game.
///
/// Created exactly once by the create-game resolution step, read by the
/// play-game steps, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: String,
    pub author: String,
    pub truth1: String,
    pub truth2: String,
    pub lie: String,
}

/// Validated creation payload, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub author: String,
    pub truth1: String,
    pub truth2: String,
    pub lie: String,
}

impl NewGame {
    /// Validate the four free-text fields from untrusted input.
    ///
    /// Every field must be present and non-empty after trimming.
    pub fn parse(
        username: Option<&str>,
        truth1: Option<&str>,
        truth2: Option<&str>,
        lie: Option<&str>,
    ) -> Result<Self, GameFieldError> {
        Ok(Self {
            author: required("username", username)?,
            truth1: required("truth1", truth1)?,
            truth2: required("truth2", truth2)?,
            lie: required("lie", lie)?,
        })
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, GameFieldError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(GameFieldError::MissingField(name)),
    }
}
