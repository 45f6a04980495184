//! Combat resolution primitives.
//!
//! Pure functions shared by every damage path in the engine. The same
//! defense formula applies in both directions (enemy→player and
//! player→enemy), and a successful hit always deals at least 1 damage so
//! arbitrarily high defense can never produce an unkillable stalemate.

pub mod damage;
pub mod result;

pub use damage::{ability_heal_amount, ability_raw_damage, apply_damage, apply_heal, calculate_damage};
pub use result::{AttackResult, resolve_attack};
