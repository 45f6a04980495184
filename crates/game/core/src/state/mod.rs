//! Combatant state and encounter bookkeeping types.
//!
//! Everything an encounter mutates lives here: player and enemy stat blocks,
//! status effects, the frozen initiative order and its living-filtered
//! working copy, and the append-only combat log.
mod combatant;
mod enemy;
mod log;
mod player;
mod status;
mod turn;

pub use combatant::{Combatant, CombatantRef, Role};
pub use enemy::{Ability, AbilityKind, DropEntry, EnemyBuilder, EnemyState, EnemyTier};
pub use log::{CombatLog, LogEntry};
pub use player::{ItemDrop, ItemKind, PlayerState, Skill, Weapon};
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
pub use turn::{InitiativeEntry, TurnState};
