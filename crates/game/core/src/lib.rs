//! Deterministic turn-based combat resolution shared across clients.
//!
//! `combat-core` defines the canonical combat rules (damage formulas, enemy
//! abilities, encounter lifecycle) and exposes pure APIs reused by the
//! runtime and by content tooling. All encounter mutation flows through
//! [`engine::Encounter`], and supporting crates depend on the types
//! re-exported here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod rewards;
pub mod rng;
pub mod state;

pub use combat::{AttackResult, apply_damage, apply_heal, calculate_damage};
pub use config::CombatConfig;
pub use engine::{
    EncounterOutcome, EncounterSummary, Encounter, EncounterError, PlayerAction, TurnReport,
};
pub use rewards::{DefeatRewards, resolve_defeat};
pub use rng::PcgRng;
pub use state::{
    Ability, AbilityKind, CombatLog, Combatant, CombatantRef, DropEntry, EnemyBuilder, EnemyState,
    EnemyTier, InitiativeEntry, ItemDrop, ItemKind, LogEntry, PlayerState, Role, Skill,
    StatusEffects, TurnState, Weapon,
};
