//! Attack resolution against a live combatant.

use crate::state::Combatant;

/// Result of applying one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Damage dealt after the defense formula.
    pub actual_damage: u32,
    /// True only on the hit that dropped the target to zero. Hitting an
    /// already-defeated target never sets this, which is what keeps reward
    /// grants to exactly one per defeat.
    pub target_defeated: bool,
}

/// Resolves raw damage against a target.
pub fn resolve_attack(raw_damage: u32, target: &mut dyn Combatant) -> AttackResult {
    let was_alive = target.is_alive();
    let actual_damage = target.take_damage(raw_damage);

    AttackResult {
        actual_damage,
        target_defeated: was_alive && !target.is_alive(),
    }
}
