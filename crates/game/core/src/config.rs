/// Combat configuration constants and tunable parameters.
///
/// Tunables cover the rules the engine intentionally exposes as policy:
/// whether stuns cost the victim a turn, and the probability gates around
/// abilities and fleeing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Probability that an enemy with abilities uses one instead of a basic
    /// attack. Applied as a single gate per enemy turn.
    pub ability_chance: f64,

    /// Whether a stun actually costs the victim their next turn. When false,
    /// stuns are reported in the log but the scheduler ignores them.
    pub enforce_stun: bool,

    /// Base probability of a flee attempt succeeding.
    pub flee_base_chance: f64,

    /// Flee probability adjustment per level of difference between the
    /// fleeing player and the mean enemy level.
    pub flee_level_weight: f64,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of concurrent status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 4;

    // ===== fixed rules =====
    /// Every successful hit deals at least this much damage, regardless of
    /// the defender's defense stat.
    pub const MIN_DAMAGE: u32 = 1;
    /// Sides on the initiative die.
    pub const INITIATIVE_DIE: u32 = 20;
    /// Lower bound of the basic-attack damage variance multiplier.
    pub const VARIANCE_MIN: f64 = 0.8;
    /// Upper bound of the basic-attack damage variance multiplier.
    pub const VARIANCE_MAX: f64 = 1.2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ABILITY_CHANCE: f64 = 0.3;
    pub const DEFAULT_FLEE_BASE_CHANCE: f64 = 0.5;
    pub const DEFAULT_FLEE_LEVEL_WEIGHT: f64 = 0.05;

    pub fn new() -> Self {
        Self {
            ability_chance: Self::DEFAULT_ABILITY_CHANCE,
            enforce_stun: true,
            flee_base_chance: Self::DEFAULT_FLEE_BASE_CHANCE,
            flee_level_weight: Self::DEFAULT_FLEE_LEVEL_WEIGHT,
        }
    }

    /// Config with stuns reported in messages only, matching legacy behavior.
    pub fn cosmetic_stun() -> Self {
        Self {
            enforce_stun: false,
            ..Self::new()
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
