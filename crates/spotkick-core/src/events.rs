use serde::{Deserialize, Serialize};

use crate::field::Zone;
use crate::game_trait::PlayerId;

/// Match lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "menu")]
    Menu,
    #[serde(rename = "goalkeeper")]
    GoalkeeperTurn,
    #[serde(rename = "shooter")]
    ShooterTurn,
    #[serde(rename = "resolving")]
    Resolving,
    #[serde(rename = "gameover")]
    GameOver,
}

/// Outcome of a resolved shot. `Saved` and `Goal` carry the zone the ball
/// crossed the goal line in; a `Miss` never reaches the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    Saved { zone: Zone },
    Goal { zone: Zone },
    Miss,
}

impl ShotOutcome {
    /// Whether this outcome awards a point to the shooter.
    pub fn is_goal(&self) -> bool {
        matches!(self, Self::Goal { .. })
    }
}

/// Celebration cues for the presentation layer to animate however it
/// chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelebrationKind {
    Goal,
    MatchWin,
}

/// Events emitted by the match core during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    PhaseChanged { phase: Phase },
    ShotResolved { shooter: PlayerId, outcome: ShotOutcome },
    ScoreUpdate { player_id: PlayerId, score: u32 },
    SuddenDeath { round: u32 },
    MatchOver { winner: PlayerId },
    Celebrate { kind: CelebrationKind },
}
