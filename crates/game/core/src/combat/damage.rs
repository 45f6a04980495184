//! Damage and healing calculation.

use crate::config::CombatConfig;

/// Applies the defense formula to raw damage.
///
/// # Formula
///
/// ```text
/// defense_multiplier = 100 / (100 + defense)
/// actual = max(1, floor(raw * defense_multiplier))
/// ```
///
/// Integer arithmetic throughout; the division floors.
pub fn calculate_damage(raw_damage: u32, defense: u32) -> u32 {
    let reduced = (u64::from(raw_damage) * 100) / (100 + u64::from(defense));
    (reduced as u32).max(CombatConfig::MIN_DAMAGE)
}

/// Applies raw damage to a health pool and returns `(new_health, actual)`.
///
/// `actual` is the post-defense damage, which may exceed the health that
/// was actually removed when the hit is lethal.
pub fn apply_damage(health: u32, raw_damage: u32, defense: u32) -> (u32, u32) {
    let actual = calculate_damage(raw_damage, defense);
    (health.saturating_sub(actual), actual)
}

/// Applies a heal clamped to the maximum and returns
/// `(new_health, actual_heal)`. The actual heal is the clamped delta and is
/// never negative.
pub fn apply_heal(health: u32, max_health: u32, amount: u32) -> (u32, u32) {
    let healed = health.saturating_add(amount).min(max_health);
    (healed, healed - health)
}

/// Raw damage of an enemy ability: `attack * multiplier`, truncated.
pub fn ability_raw_damage(attack: u32, multiplier: f64) -> u32 {
    (f64::from(attack) * multiplier) as u32
}

/// Self-heal amount of a heal ability: `max_health * multiplier`, truncated.
pub fn ability_heal_amount(max_health: u32, multiplier: f64) -> u32 {
    (f64::from(max_health) * multiplier) as u32
}
