//! Loot and reward resolution on enemy defeat.
//!
//! One gate roll against the enemy's `item_drop_chance` decides whether the
//! drop table is consulted at all; each table entry then rolls its own
//! chance independently, so a single gate pass can yield anywhere from zero
//! to every listed item.

use crate::rng::PcgRng;
use crate::state::{EnemyState, ItemDrop};

/// Everything a defeated enemy pays out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefeatRewards {
    pub experience: u32,
    pub gold: u32,
    pub drops: Vec<ItemDrop>,
}

/// Computes the payout for defeating `enemy`.
///
/// Reward amounts are fixed per enemy instance; only the drops are random.
pub fn resolve_defeat(enemy: &EnemyState, rng: &mut PcgRng) -> DefeatRewards {
    let mut drops = Vec::new();

    if rng.chance(enemy.item_drop_chance) {
        for entry in &enemy.possible_drops {
            if rng.chance(entry.chance) {
                drops.push(entry.item.clone());
            }
        }
    }

    DefeatRewards {
        experience: enemy.experience_reward,
        gold: enemy.gold_reward,
        drops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EnemyState, EnemyTier, ItemDrop};

    #[test]
    fn rewards_are_fixed_per_enemy_instance() {
        let enemy = EnemyState::builder("Wolf", 2).build();
        let mut rng = PcgRng::seeded(1);

        let rewards = resolve_defeat(&enemy, &mut rng);
        assert_eq!(rewards.experience, enemy.experience_reward);
        assert_eq!(rewards.gold, enemy.gold_reward);
    }

    #[test]
    fn failed_gate_yields_no_drops() {
        // Drop chance 0 forces the gate to fail regardless of the roll.
        let mut enemy = EnemyState::builder("Wolf", 2)
            .drop(ItemDrop::material("Wolf Pelt", 7), 1.0)
            .build();
        enemy.item_drop_chance = 0.0;

        let mut rng = PcgRng::seeded(1);
        let rewards = resolve_defeat(&enemy, &mut rng);
        assert!(rewards.drops.is_empty());
    }

    #[test]
    fn gate_pass_rolls_each_entry_independently() {
        // Boss gate is guaranteed; entry chances of 1.0 and 0.0 make the
        // per-entry outcome deterministic as well.
        let enemy = EnemyState::builder("Dragon", 5)
            .drop(ItemDrop::material("Dragon Scale", 200), 1.0)
            .drop(ItemDrop::material("Dragon Tooth", 155), 0.0)
            .tier(EnemyTier::Boss)
            .build();

        let mut rng = PcgRng::seeded(9);
        let rewards = resolve_defeat(&enemy, &mut rng);
        assert_eq!(rewards.drops.len(), 1);
        assert_eq!(rewards.drops[0].name, "Dragon Scale");
    }
}
