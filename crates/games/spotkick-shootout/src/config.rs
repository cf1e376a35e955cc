use serde::{Deserialize, Serialize};

/// Data-driven rules configuration for the penalty shootout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootoutConfig {
    /// Rounds in a regulation match. Sudden death extends past this one
    /// round at a time until the scores differ.
    pub max_rounds: u32,
    /// Shots per round (one per player).
    pub shots_per_round: u8,
    /// Ball launch speed in field units per tick.
    pub ball_speed: f32,
    /// Resolving display window after a saved or scored shot, in ticks.
    pub result_display_ticks: u32,
    /// Resolving display window after a missed shot, in ticks.
    pub miss_display_ticks: u32,
}

impl Default for ShootoutConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            shots_per_round: 2,
            ball_speed: 12.0,
            result_display_ticks: 90,
            miss_display_ticks: 60,
        }
    }
}

impl ShootoutConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SPOTKICK_SHOOTOUT_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/shootout.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }
}
