//! The shared surface over players and enemies.

use crate::combat::calculate_damage;

/// Which side of the encounter a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Player,
    Enemy,
}

/// Stable reference to a combatant within one encounter.
///
/// Indices point into the encounter's player/enemy lists, which never shrink
/// while an encounter is running (defeated combatants stay at zero health),
/// so a reference taken at `start()` stays valid for the whole fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantRef {
    pub role: Role,
    pub index: usize,
}

impl CombatantRef {
    pub const fn player(index: usize) -> Self {
        Self {
            role: Role::Player,
            index,
        }
    }

    pub const fn enemy(index: usize) -> Self {
        Self {
            role: Role::Enemy,
            index,
        }
    }
}

/// Capability surface shared by anything that can deal and receive damage.
///
/// Damage and healing resolution is identical in both directions
/// (enemy→player and player→enemy), so both live here as provided methods
/// on top of the vitals accessors.
pub trait Combatant {
    fn name(&self) -> &str;
    fn health(&self) -> u32;
    fn max_health(&self) -> u32;
    fn defense(&self) -> u32;

    /// Sets current health. Implementations clamp to `[0, max_health]`.
    fn set_health(&mut self, health: u32);

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Applies raw damage through the defense formula and returns the actual
    /// damage dealt (always at least 1 on a successful hit).
    fn take_damage(&mut self, raw_damage: u32) -> u32 {
        let actual = calculate_damage(raw_damage, self.defense());
        self.set_health(self.health().saturating_sub(actual));
        actual
    }

    /// Heals up to `amount` and returns the actual (clamped, never negative)
    /// amount restored.
    fn heal(&mut self, amount: u32) -> u32 {
        let healed = self.health().saturating_add(amount).min(self.max_health());
        let delta = healed - self.health();
        self.set_health(healed);
        delta
    }
}
