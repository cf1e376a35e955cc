use serde::{Deserialize, Serialize};

use crate::events::Phase;
use crate::field::{Vec2, Zone};

/// An input event from the presentation layer. Commands are queued on the
/// game and consumed once per tick; a command that is invalid for the
/// current phase is dropped there with a debug log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchCommand {
    StartMatch,
    ResetMatch,
    SelectZone { zone: Zone },
    Shoot { aim: Vec2 },
}

impl MatchCommand {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartMatch => "start_match",
            Self::ResetMatch => "reset_match",
            Self::SelectZone { .. } => "select_zone",
            Self::Shoot { .. } => "shoot",
        }
    }
}

/// Recoverable errors from match operations. There are no fatal errors in
/// the core: misordered calls leave state untouched and out-of-bounds aim
/// targets are clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Operation called in a phase it is not valid in.
    InvalidTransition {
        phase: Phase,
        operation: &'static str,
    },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { phase, operation } => {
                write!(f, "{operation} is not valid in the {phase:?} phase")
            },
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_the_operation_and_phase() {
        let e = MatchError::InvalidTransition {
            phase: Phase::Menu,
            operation: "shoot",
        };
        let msg = e.to_string();
        assert!(msg.contains("shoot"));
        assert!(msg.contains("Menu"));
    }
}
