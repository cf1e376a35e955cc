use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::commands::MatchCommand;
use crate::events::MatchEvent;

/// Unique identifier for a player in a match.
pub type PlayerId = u64;

/// Core trait a Spotkick game implements.
///
/// The presentation layer owns rendering, input capture, sound, and
/// particle effects; the game only owns rules and state. Input reaches the
/// game as queued commands, output leaves it as per-tick events and state
/// snapshots.
pub trait SpotkickGame: Send + Sync {
    /// Game metadata for the selection screen.
    fn metadata(&self) -> GameMetadata;

    /// Called once when the game is selected and players are ready.
    fn init(&mut self, players: &[super::player::Player], config: &GameConfig);

    /// Enqueue an input command. Fire-and-forget: the command is consumed
    /// on the next `tick`, and dropped there if the phase no longer allows
    /// it.
    fn queue_command(&mut self, command: MatchCommand);

    /// Advance the game by one frame: drain queued commands, then advance
    /// any running countdowns. Returns the events produced this tick.
    fn tick(&mut self) -> Vec<MatchEvent>;

    /// Serialize the authoritative game state for an out-of-process
    /// presenter to mirror.
    fn serialize_state(&self) -> Vec<u8>;

    /// Apply authoritative state received from the host.
    fn apply_state(&mut self, state: &[u8]);

    /// Frames per second the driver is expected to call `tick` at.
    fn tick_rate(&self) -> f32 {
        60.0
    }

    /// Whether the match has reached its terminal phase.
    fn is_match_over(&self) -> bool;

    /// Current scores for all players.
    fn results(&self) -> Vec<PlayerScore>;
}

/// Game metadata for the selection screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub min_players: u8,
    pub max_players: u8,
    pub estimated_duration: Duration,
}

/// Configuration for a match session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Regulation rounds; sudden death may extend past this.
    pub round_count: u8,
    pub custom: HashMap<String, serde_json::Value>,
}

/// Score entry for a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub score: u32,
}
