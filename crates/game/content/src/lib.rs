//! Bestiary content and encounter generation.
//!
//! This crate houses the static enemy templates and the generators that turn
//! them into concrete [`combat_core::EnemyState`] values:
//! - Named templates (Wolf, Goblin, Skeleton, Troll, Dragon, and friends)
//! - Location-keyed random enemy and encounter generation
//! - Encounter catalogs loaded from RON data files
//!
//! Content feeds encounters at construction time and never reaches into a
//! running fight.

pub mod generator;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use generator::{LocationKind, random_encounter, random_enemy};
pub use templates::{from_template, template_builder};

#[cfg(feature = "loaders")]
pub use loaders::{EncounterCatalog, EncounterEntry, EncounterLoader, EncounterTemplate, LoadResult};
