use serde::{Deserialize, Serialize};

use crate::game_trait::PlayerId;

/// A participant in a shootout match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub color: PlayerColor,
}

/// Kit color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for PlayerColor {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}

impl PlayerColor {
    /// Predefined palette colors for player selection.
    pub const PALETTE: &[PlayerColor] = &[
        PlayerColor {
            r: 255,
            g: 107,
            b: 107,
        }, // Red
        PlayerColor {
            r: 78,
            g: 205,
            b: 196,
        }, // Teal
        PlayerColor {
            r: 255,
            g: 215,
            b: 0,
        }, // Gold
        PlayerColor {
            r: 149,
            g: 225,
            b: 211,
        }, // Mint
    ];

    /// Default palette color for a player slot, wrapping past the palette.
    pub fn for_slot(slot: usize) -> Self {
        Self::PALETTE[slot % Self::PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cycle_through_palette() {
        assert_eq!(PlayerColor::for_slot(0), PlayerColor::PALETTE[0]);
        assert_eq!(PlayerColor::for_slot(1), PlayerColor::PALETTE[1]);
        assert_eq!(
            PlayerColor::for_slot(PlayerColor::PALETTE.len()),
            PlayerColor::PALETTE[0]
        );
    }
}
