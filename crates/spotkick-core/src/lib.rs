pub mod commands;
pub mod events;
pub mod field;
pub mod game_trait;
pub mod player;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashMap;

    use crate::commands::MatchCommand;
    use crate::events::MatchEvent;
    use crate::game_trait::{GameConfig, PlayerId, PlayerScore, SpotkickGame};
    use crate::player::{Player, PlayerColor};

    /// Create `n` test players with sequential IDs starting at 1.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player {
                id: i as PlayerId + 1,
                display_name: format!("Player {}", i + 1),
                color: PlayerColor::for_slot(i),
            })
            .collect()
    }

    /// Create a default GameConfig with the given regulation round count.
    pub fn default_config(round_count: u8) -> GameConfig {
        GameConfig {
            round_count,
            custom: HashMap::new(),
        }
    }

    /// Run N game ticks, returning all accumulated events.
    pub fn run_ticks(game: &mut dyn SpotkickGame, n: usize) -> Vec<MatchEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.tick());
        }
        all_events
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // A generic suite every SpotkickGame implementation must pass. Game
    // crates call these from their own #[cfg(test)] modules with a
    // concrete game instance.

    /// After init() with N players, serialize_state() must return non-empty
    /// bytes.
    pub fn contract_init_creates_state(game: &mut dyn SpotkickGame, player_count: usize) {
        let players = make_players(player_count);
        let config = default_config(5);
        game.init(&players, &config);
        let state = game.serialize_state();
        assert!(
            !state.is_empty(),
            "serialize_state() must return non-empty bytes after init"
        );
    }

    /// Queuing a valid command followed by tick() must change state.
    pub fn contract_command_changes_state(game: &mut dyn SpotkickGame, command: MatchCommand) {
        let before = game.serialize_state();
        game.queue_command(command);
        game.tick();
        let after = game.serialize_state();
        assert_ne!(before, after, "State must change after a valid command");
    }

    /// serialize_state → apply_state roundtrip: the game must produce
    /// stable state after applying its own serialized output.
    pub fn contract_state_roundtrip_preserves(game: &mut dyn SpotkickGame) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        game.apply_state(&state_b);
        let state_c = game.serialize_state();
        assert_eq!(
            state_b, state_c,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// results() must return an entry for each player.
    pub fn contract_results_complete(
        game: &dyn SpotkickGame,
        expected_players: usize,
    ) -> Vec<PlayerScore> {
        let results = game.results();
        assert_eq!(
            results.len(),
            expected_players,
            "results must have one entry per player"
        );
        results
    }
}
