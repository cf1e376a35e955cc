pub mod config;
pub mod resolve;
pub mod scoring;

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use spotkick_core::commands::{MatchCommand, MatchError};
use spotkick_core::events::{CelebrationKind, MatchEvent, Phase, ShotOutcome};
use spotkick_core::field::{FieldLayout, Vec2, Zone, load_layout};
use spotkick_core::game_trait::{GameConfig, GameMetadata, PlayerId, PlayerScore, SpotkickGame};
use spotkick_core::player::{Player, PlayerColor};

use config::ShootoutConfig;
use resolve::{launch_velocity, resolve_shot};
use scoring::{leader, shot_points};

/// One of the two participants, as tracked by the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchPlayer {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub score: u32,
    pub is_shooter: bool,
}

/// Per-attempt data, created when the goalkeeper commits and discarded when
/// the next turn begins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShotRecord {
    pub gk_zone: Zone,
    /// Aim target after clamping to field bounds.
    pub aim: Vec2,
    /// Launch velocity of the ball, for the presenter's flight animation.
    pub velocity: Vec2,
    pub outcome: ShotOutcome,
}

/// Serializable authoritative match state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    pub phase: Phase,
    pub players: [MatchPlayer; 2],
    pub current_round: u32,
    /// Regulation round count, extended by one per tied sudden-death round.
    pub max_rounds: u32,
    /// Shots taken in the current round.
    pub current_shot: u8,
    pub sudden_death: bool,
    /// Zone the goalkeeper committed to for the shot being set up.
    pub pending_zone: Option<Zone>,
    pub last_shot: Option<ShotRecord>,
    /// Remaining Resolving display ticks.
    pub result_timer: u32,
    /// Winning slot, set on entering GameOver.
    pub winner: Option<u8>,
}

/// The penalty shootout match core, implementing `SpotkickGame`.
pub struct PenaltyShootout {
    state: MatchState,
    config: ShootoutConfig,
    layout: FieldLayout,
    queue: VecDeque<MatchCommand>,
    events: Vec<MatchEvent>,
}

impl PenaltyShootout {
    pub fn new() -> Self {
        Self::with_config(ShootoutConfig::load(), load_layout())
    }

    /// Create a shootout with explicit configuration and field layout.
    pub fn with_config(config: ShootoutConfig, layout: FieldLayout) -> Self {
        let players = [
            MatchPlayer {
                id: 1,
                name: "Player 1".to_string(),
                color: PlayerColor::for_slot(0),
                score: 0,
                is_shooter: true,
            },
            MatchPlayer {
                id: 2,
                name: "Player 2".to_string(),
                color: PlayerColor::for_slot(1),
                score: 0,
                is_shooter: false,
            },
        ];
        Self {
            state: MatchState {
                phase: Phase::Menu,
                players,
                current_round: 1,
                max_rounds: config.max_rounds,
                current_shot: 0,
                sudden_death: false,
                pending_zone: None,
                last_shot: None,
                result_timer: 0,
                winner: None,
            },
            config,
            layout,
            queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Accessor for the current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Accessor for the field layout.
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// The winning player once the match is over.
    pub fn winner(&self) -> Option<&MatchPlayer> {
        self.state
            .winner
            .map(|slot| &self.state.players[slot as usize])
    }

    /// Begin the match. Valid only from the menu.
    pub fn start_match(&mut self) -> Result<(), MatchError> {
        if self.state.phase != Phase::Menu {
            return Err(self.invalid("start_match"));
        }
        self.reset_slots();
        self.set_phase(Phase::GoalkeeperTurn);
        Ok(())
    }

    /// Record the goalkeeper's dive choice and hand the turn to the
    /// shooter.
    pub fn select_zone(&mut self, zone: Zone) -> Result<(), MatchError> {
        if self.state.phase != Phase::GoalkeeperTurn {
            return Err(self.invalid("select_zone"));
        }
        self.state.pending_zone = Some(zone);
        self.set_phase(Phase::ShooterTurn);
        Ok(())
    }

    /// Take the shot. The aim target is clamped into field bounds rather
    /// than rejected; the outcome is applied immediately and the match
    /// enters the Resolving display window.
    pub fn shoot(&mut self, aim: Vec2) -> Result<(), MatchError> {
        if self.state.phase != Phase::ShooterTurn {
            return Err(self.invalid("shoot"));
        }
        let Some(gk_zone) = self.state.pending_zone else {
            // Unreachable through the public API: ShooterTurn is only
            // entered with a committed zone.
            return Err(self.invalid("shoot"));
        };
        let clamped = self.layout.clamp_point(aim);
        if clamped != aim {
            tracing::debug!(x = aim.x, y = aim.y, "Clamped out-of-bounds aim target");
        }

        let velocity = launch_velocity(&self.layout, self.config.ball_speed, clamped);
        let outcome = resolve_shot(&self.layout, gk_zone, self.config.ball_speed, clamped);

        let shooter = self.shooter_slot();
        let points = shot_points(&outcome);
        if points > 0 {
            let player = &mut self.state.players[shooter];
            player.score += points;
            let (player_id, score) = (player.id, player.score);
            self.events.push(MatchEvent::ScoreUpdate { player_id, score });
            self.events.push(MatchEvent::Celebrate {
                kind: CelebrationKind::Goal,
            });
        }

        self.state.result_timer = match outcome {
            ShotOutcome::Miss => self.config.miss_display_ticks,
            _ => self.config.result_display_ticks,
        };
        self.state.last_shot = Some(ShotRecord {
            gk_zone,
            aim: clamped,
            velocity,
            outcome,
        });
        self.events.push(MatchEvent::ShotResolved {
            shooter: self.state.players[shooter].id,
            outcome,
        });
        self.set_phase(Phase::Resolving);
        Ok(())
    }

    /// Advance past the result display. Valid only in Resolving, once the
    /// countdown has elapsed.
    pub fn complete_resolution(&mut self) -> Result<(), MatchError> {
        if self.state.phase != Phase::Resolving || self.state.result_timer > 0 {
            return Err(self.invalid("complete_resolution"));
        }
        self.advance_turn();
        Ok(())
    }

    /// Abort or restart: return to the menu baseline from any state.
    /// Pending commands are dropped.
    pub fn reset_match(&mut self) {
        self.queue.clear();
        self.reset_slots();
        self.set_phase(Phase::Menu);
    }

    fn reset_slots(&mut self) {
        for (slot, player) in self.state.players.iter_mut().enumerate() {
            player.score = 0;
            player.is_shooter = slot == 0;
        }
        self.state.current_round = 1;
        self.state.current_shot = 0;
        self.state.sudden_death = false;
        self.state.max_rounds = self.config.max_rounds;
        self.state.pending_zone = None;
        self.state.last_shot = None;
        self.state.result_timer = 0;
        self.state.winner = None;
    }

    fn advance_turn(&mut self) {
        self.state.last_shot = None;
        self.state.pending_zone = None;
        self.state.current_shot += 1;
        if self.state.current_shot >= self.config.shots_per_round {
            self.state.current_shot = 0;
            self.state.current_round += 1;
            for player in &mut self.state.players {
                player.is_shooter = !player.is_shooter;
            }
            if self.state.current_round > self.state.max_rounds {
                self.resolve_round_limit();
                return;
            }
        }
        self.set_phase(Phase::GoalkeeperTurn);
    }

    fn resolve_round_limit(&mut self) {
        let scores = [self.state.players[0].score, self.state.players[1].score];
        match leader(scores) {
            None => {
                self.state.sudden_death = true;
                self.state.max_rounds += 1;
                self.events.push(MatchEvent::SuddenDeath {
                    round: self.state.current_round,
                });
                self.set_phase(Phase::GoalkeeperTurn);
            },
            Some(slot) => {
                self.state.winner = Some(slot as u8);
                self.events.push(MatchEvent::MatchOver {
                    winner: self.state.players[slot].id,
                });
                self.events.push(MatchEvent::Celebrate {
                    kind: CelebrationKind::MatchWin,
                });
                self.set_phase(Phase::GameOver);
            },
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        self.state.phase = phase;
        self.events.push(MatchEvent::PhaseChanged { phase });
    }

    fn shooter_slot(&self) -> usize {
        self.state
            .players
            .iter()
            .position(|p| p.is_shooter)
            .unwrap_or(0)
    }

    fn invalid(&self, operation: &'static str) -> MatchError {
        MatchError::InvalidTransition {
            phase: self.state.phase,
            operation,
        }
    }

    fn dispatch(&mut self, command: MatchCommand) {
        let result = match command {
            MatchCommand::StartMatch => self.start_match(),
            MatchCommand::ResetMatch => {
                self.reset_match();
                Ok(())
            },
            MatchCommand::SelectZone { zone } => self.select_zone(zone),
            MatchCommand::Shoot { aim } => self.shoot(aim),
        };
        if let Err(e) = result {
            tracing::debug!(command = command.name(), error = %e, "Dropped out-of-phase command");
        }
    }
}

impl Default for PenaltyShootout {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotkickGame for PenaltyShootout {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Penalty Shootout".to_string(),
            description: "Pick a dive, place your shot. Best of five rounds, sudden death on a tie."
                .to_string(),
            min_players: 2,
            max_players: 2,
            estimated_duration: Duration::from_secs(180),
        }
    }

    fn init(&mut self, players: &[Player], config: &GameConfig) {
        for (slot, player) in players.iter().take(2).enumerate() {
            let p = &mut self.state.players[slot];
            p.id = player.id;
            p.name = player.display_name.clone();
            p.color = player.color;
        }
        self.config.max_rounds = u32::from(config.round_count).max(1);
        self.queue.clear();
        self.events.clear();
        self.reset_slots();
        self.state.phase = Phase::Menu;
    }

    fn queue_command(&mut self, command: MatchCommand) {
        self.queue.push_back(command);
    }

    fn tick(&mut self) -> Vec<MatchEvent> {
        while let Some(command) = self.queue.pop_front() {
            self.dispatch(command);
        }
        if self.state.phase == Phase::Resolving && self.state.result_timer > 0 {
            self.state.result_timer -= 1;
        }
        std::mem::take(&mut self.events)
    }

    fn serialize_state(&self) -> Vec<u8> {
        rmp_serde::to_vec(&self.state).unwrap_or_default()
    }

    fn apply_state(&mut self, state: &[u8]) {
        if let Ok(s) = rmp_serde::from_slice::<MatchState>(state) {
            self.state = s;
        }
    }

    fn is_match_over(&self) -> bool {
        self.state.phase == Phase::GameOver
    }

    fn results(&self) -> Vec<PlayerScore> {
        self.state
            .players
            .iter()
            .map(|p| PlayerScore {
                player_id: p.id,
                score: p.score,
            })
            .collect()
    }
}
