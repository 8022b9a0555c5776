use mt_onboard_base38::Base38Error;
use thiserror::Error;

/// Errors returned when an onboarding code cannot be parsed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left to decode once the `MT:` marker is stripped.
    #[error("not a Matter onboarding code")]
    NotMatterFormat,
    /// A symbol outside the base38 alphabet. `position` is the 0-based
    /// character index within the payload after the marker.
    #[error("invalid base38 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl From<Base38Error> for ParseError {
    fn from(err: Base38Error) -> Self {
        match err {
            Base38Error::InvalidCharacter {
                character,
                position,
            } => ParseError::InvalidCharacter {
                character,
                position,
            },
        }
    }
}
