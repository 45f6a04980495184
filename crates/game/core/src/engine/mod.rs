//! Encounter lifecycle and turn resolution.
//!
//! [`Encounter`] is the authoritative state machine for one combat session:
//! `Pending → Active → Ended`. It owns the combatant lists, the frozen
//! initiative order and its living-filtered working copy, the combat log,
//! and the encounter's RNG. Every mutation flows through `start()`,
//! `next_turn()`, `player_action()`, or `end()`; once ended, the encounter
//! is inert and further calls report that without mutating anything.

mod actions;
mod errors;
mod turns;

pub use actions::PlayerAction;
pub use errors::EncounterError;

use crate::config::CombatConfig;
use crate::rng::PcgRng;
use crate::state::{CombatLog, Combatant, CombatantRef, EnemyState, PlayerState, Role, TurnState};

/// Lifecycle phase of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum EncounterPhase {
    Pending,
    Active,
    Ended,
}

/// Outcome of a completed turn or action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Human-readable description of what happened, as logged.
    pub message: String,
    /// True once an end condition holds; the caller should call `end()`
    /// (or already received the end summary in `message`).
    pub combat_over: bool,
}

/// How an encounter finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    /// At least one player survived.
    Victory,
    /// Every player is at zero health.
    Defeat,
    /// `end()` was called on an encounter that was already over (including
    /// one left via a successful flee).
    AlreadyEnded,
}

/// Summary returned by [`Encounter::end`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSummary {
    pub outcome: EncounterOutcome,
    pub message: String,
}

/// One combat session from start to victory, defeat, or flee.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    players: Vec<PlayerState>,
    enemies: Vec<EnemyState>,
    turn: TurnState,
    log: CombatLog,
    phase: EncounterPhase,
    config: CombatConfig,
    rng: PcgRng,
}

impl Encounter {
    /// Creates a pending encounter. Call [`Encounter::start`] to roll
    /// initiative and begin.
    ///
    /// The seed fixes every random draw the encounter will make; replaying
    /// the same seed with the same inputs replays the same fight.
    pub fn new(players: Vec<PlayerState>, enemies: Vec<EnemyState>, seed: u64) -> Self {
        Self::with_config(players, enemies, seed, CombatConfig::default())
    }

    pub fn with_config(
        players: Vec<PlayerState>,
        enemies: Vec<EnemyState>,
        seed: u64,
        config: CombatConfig,
    ) -> Self {
        Self {
            players,
            enemies,
            turn: TurnState::default(),
            log: CombatLog::new(),
            phase: EncounterPhase::Pending,
            config,
            rng: PcgRng::seeded(seed),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == EncounterPhase::Active
    }

    pub fn round(&self) -> u32 {
        self.turn.round
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn enemies(&self) -> &[EnemyState] {
        &self.enemies
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// The combatant whose turn it currently is, if the encounter is active.
    pub fn current_combatant(&self) -> Option<CombatantRef> {
        if !self.is_active() {
            return None;
        }
        self.turn.current_entry().map(|e| e.combatant)
    }

    /// Consumes the encounter, handing back the combatant lists and log so
    /// the surrounding game can fold rewards into persistent state.
    pub fn into_parts(self) -> (Vec<PlayerState>, Vec<EnemyState>, CombatLog) {
        (self.players, self.enemies, self.log)
    }

    /// True when an end condition holds: either side has no living members,
    /// or the encounter is no longer active.
    pub fn check_end(&self) -> bool {
        let players_alive = self.players.iter().any(|p| p.is_alive());
        let enemies_alive = self.enemies.iter().any(|e| e.is_alive());

        !(players_alive && enemies_alive) || self.phase != EncounterPhase::Active
    }

    /// Ends the encounter and reports the result. Idempotent: a second call
    /// returns [`EncounterOutcome::AlreadyEnded`] and changes nothing.
    pub fn end(&mut self) -> EncounterSummary {
        if self.phase != EncounterPhase::Active {
            return EncounterSummary {
                outcome: EncounterOutcome::AlreadyEnded,
                message: "Combat already ended.".to_string(),
            };
        }

        self.phase = EncounterPhase::Ended;

        let (outcome, detail) = if self.players.iter().any(|p| p.is_alive()) {
            (
                EncounterOutcome::Victory,
                "Victory! All enemies have been defeated.",
            )
        } else {
            (
                EncounterOutcome::Defeat,
                "Defeat! All players have been defeated.",
            )
        };

        let message = format!("Combat has ended.\n{detail}");
        self.log.append(message.clone());

        EncounterSummary { outcome, message }
    }

    /// Human-readable snapshot of the current combat state.
    pub fn status_summary(&self) -> String {
        if !self.is_active() {
            return "No active combat.".to_string();
        }

        let mut state = format!("=== Combat Round {} ===\n", self.turn.round);

        state.push_str("\nPlayers:\n");
        for player in &self.players {
            let status = if player.is_alive() { "Alive" } else { "Defeated" };
            state.push_str(&format!(
                "{}: {}/{} HP, {}/{} MP - {}\n",
                player.name, player.health, player.max_health, player.mana, player.max_mana, status
            ));
        }

        state.push_str("\nEnemies:\n");
        for (i, enemy) in self.enemies.iter().enumerate() {
            let status = if enemy.is_alive() { "Alive" } else { "Defeated" };
            state.push_str(&format!(
                "{}. {}: {}/{} HP - {}\n",
                i + 1,
                enemy.name,
                enemy.health,
                enemy.max_health,
                status
            ));
        }

        if let Some(entry) = self.turn.current_entry() {
            let name = match entry.combatant.role {
                Role::Player => &self.players[entry.combatant.index].name,
                Role::Enemy => &self.enemies[entry.combatant.index].name,
            };
            state.push_str(&format!("\nCurrent turn: {} ({})", name, entry.combatant.role));
        }

        state
    }
}
