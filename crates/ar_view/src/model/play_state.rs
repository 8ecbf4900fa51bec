//! Internal play states of the rule engine.
//!
//! Display-name resolution is a pure function on the enumeration; no
//! shared game-state object is involved.

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Phase of game flow as tracked by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayState {
    #[default]
    Halted,
    Stopped,
    Running,
    KickoffYellow,
    KickoffBlue,
    FreekickYellow,
    FreekickBlue,
    IndirectYellow,
    IndirectBlue,
    PenaltyYellow,
    PenaltyBlue,
    TimeoutYellow,
    TimeoutBlue,
    /// Wire code outside the known range; rendered as "unknown".
    Unknown,
}

impl PlayState {
    /// Strict wire decode.
    pub fn try_from_code(code: i32) -> Result<Self, ViewError> {
        Ok(match code {
            0 => PlayState::Halted,
            1 => PlayState::Stopped,
            2 => PlayState::Running,
            3 => PlayState::KickoffYellow,
            4 => PlayState::KickoffBlue,
            5 => PlayState::FreekickYellow,
            6 => PlayState::FreekickBlue,
            7 => PlayState::IndirectYellow,
            8 => PlayState::IndirectBlue,
            9 => PlayState::PenaltyYellow,
            10 => PlayState::PenaltyBlue,
            11 => PlayState::TimeoutYellow,
            12 => PlayState::TimeoutBlue,
            other => return Err(ViewError::UnknownPlayState(other)),
        })
    }

    /// Wire decode with logging fallback for unknown codes.
    pub fn from_code(code: i32) -> Self {
        PlayState::try_from_code(code).unwrap_or_else(|_| {
            log::warn!("unknown play state code: {}", code);
            PlayState::Unknown
        })
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PlayState::Halted => "halted",
            PlayState::Stopped => "stopped",
            PlayState::Running => "running",
            PlayState::KickoffYellow => "kickoff yellow",
            PlayState::KickoffBlue => "kickoff blue",
            PlayState::FreekickYellow => "freekick yellow",
            PlayState::FreekickBlue => "freekick blue",
            PlayState::IndirectYellow => "indirect freekick yellow",
            PlayState::IndirectBlue => "indirect freekick blue",
            PlayState::PenaltyYellow => "penalty yellow",
            PlayState::PenaltyBlue => "penalty blue",
            PlayState::TimeoutYellow => "timeout yellow",
            PlayState::TimeoutBlue => "timeout blue",
            PlayState::Unknown => "unknown",
        }
    }
}

/// Current and upcoming play state, received as a pair each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayStatePair {
    pub current: PlayState,
    pub next: PlayState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(PlayState::from_code(0), PlayState::Halted);
        assert_eq!(PlayState::from_code(2), PlayState::Running);
        assert_eq!(PlayState::from_code(12), PlayState::TimeoutBlue);
    }

    #[test]
    fn test_from_code_unknown_falls_back() {
        assert_eq!(PlayState::from_code(99), PlayState::Unknown);
        assert_eq!(PlayState::try_from_code(-3), Err(ViewError::UnknownPlayState(-3)));
    }

    #[test]
    fn test_display_names_are_stable() {
        assert_eq!(PlayState::Halted.display_name(), "halted");
        assert_eq!(PlayState::KickoffYellow.display_name(), "kickoff yellow");
        assert_eq!(PlayState::Unknown.display_name(), "unknown");
    }
}
