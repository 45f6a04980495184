//! Named enemy templates.
//!
//! Each template layers stats, flavor, abilities, and drop tables on top of
//! the level-derived baselines. Builders are exposed separately from built
//! enemies so callers can still adjust the tier before the one-shot tier
//! scaling runs.

use combat_core::state::{AbilityKind, EnemyBuilder, EnemyState, EnemyTier, ItemDrop};

/// Builds an enemy from a named template.
///
/// Unknown template names fall back to a baseline enemy carrying the given
/// name, so location tables can list creatures that have no bespoke entry.
pub fn from_template(template: &str, level: u32) -> EnemyState {
    template_builder(template, level).build()
}

/// The builder behind [`from_template`], tier not yet applied.
///
/// The Dragon template comes pre-set to [`EnemyTier::Boss`].
pub fn template_builder(template: &str, level: u32) -> EnemyBuilder {
    match template {
        "Wolf" => EnemyState::builder("Wolf", level)
            .attack(6 + level * 2)
            .defense(3 + level)
            .description("A fierce wolf with sharp teeth and quick movements.")
            .attack_messages([
                "lunges at you with sharp teeth",
                "claws at you viciously",
                "bites at your leg",
                "howls and charges at you",
            ])
            .drop(ItemDrop::material("Wolf Pelt", 5 + level), 0.7)
            .drop(ItemDrop::material("Wolf Fang", 8 + level * 2), 0.4),

        "Goblin" => EnemyState::builder("Goblin", level)
            .attack(5 + level * 2)
            .defense(2 + level)
            .description("A small, green-skinned creature with a mischievous grin.")
            .attack_messages([
                "swings a crude dagger at you",
                "throws a small rock at your head",
                "stabs at you with a sharpened stick",
                "jumps at you with its claws out",
            ])
            .ability("Sneak Attack", AbilityKind::Damage, 1.5, 0.2)
            .drop(ItemDrop::material("Goblin Ear", 3 + level), 0.6)
            .drop(
                ItemDrop::weapon("Crude Dagger", 4 + level, 10 + level * 3),
                0.3,
            ),

        "Skeleton" => EnemyState::builder("Skeleton", level)
            .attack(7 + level * 2)
            .defense(4 + level)
            .description("An animated skeleton, its bones clacking as it moves.")
            .attack_messages([
                "swings a rusty sword at you",
                "tries to grab you with bony fingers",
                "thrusts a broken blade toward you",
                "attacks with an eerie silence",
            ])
            .resistance("pierce", 0.3)
            .weakness("crush", 0.5)
            .drop(ItemDrop::material("Bone Shard", 4 + level), 0.8)
            .drop(
                ItemDrop::weapon("Rusty Sword", 5 + level, 8 + level * 2),
                0.4,
            ),

        "Troll" => EnemyState::builder("Troll", level)
            .max_health(40 + level * 15)
            .attack(10 + level * 3)
            .defense(6 + level * 2)
            .experience_reward(35 + level * 20)
            .gold_reward(15 + level * 5)
            .description("A large, muscular troll with tough skin and a nasty temperament.")
            .attack_messages([
                "smashes its club down at you",
                "swings a massive fist toward your head",
                "tries to grab and crush you",
                "roars and charges at you",
            ])
            .ability("Regenerate", AbilityKind::Heal, 0.1, 0.4)
            .drop(ItemDrop::material("Troll Hide", 20 + level * 5), 0.6)
            .drop(
                ItemDrop::weapon("Troll Club", 12 + level * 3, 25 + level * 8),
                0.3,
            ),

        "Dragon" => EnemyState::builder("Dragon", level)
            .tier(EnemyTier::Boss)
            .description("A massive dragon with scales like armor and fiery breath.")
            .attack_messages([
                "breathes a torrent of fire at you",
                "slashes with razor-sharp claws",
                "whips its spiked tail toward you",
                "snaps at you with massive jaws",
            ])
            .ability("Fire Breath", AbilityKind::Damage, 2.0, 0.4)
            .ability("Wing Buffet", AbilityKind::Stun, 0.0, 0.2)
            .resistance("fire", 0.8)
            .drop(ItemDrop::material("Dragon Scale", 100 + level * 20), 1.0)
            .drop(ItemDrop::material("Dragon Tooth", 80 + level * 15), 0.8)
            .drop(
                ItemDrop::material("Dragon Fire Essence", 150 + level * 25),
                0.5,
            ),

        "Bandit" => EnemyState::builder("Bandit", level)
            .description("A rough-looking human wielding a weapon and looking for trouble.")
            .ability("Disarm", AbilityKind::Stun, 0.0, 0.2)
            .drop(
                ItemDrop::miscellaneous("Stolen Goods", 10 + level * 3),
                0.6,
            ),

        "Slime" => EnemyState::builder("Slime", level)
            .attack(4 + level * 2)
            .defense(2 + level)
            .description("A gelatinous blob that oozes across the ground.")
            .attack_messages([
                "engulfs your foot",
                "sprays acidic goo at you",
                "stretches and slams into you",
                "attempts to absorb your weapon",
            ])
            .resistance("pierce", 0.5)
            .weakness("fire", 0.3),

        other => EnemyState::builder(other, level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::state::ItemKind;

    #[test]
    fn wolf_overrides_offense_and_keeps_baseline_rewards() {
        let wolf = from_template("Wolf", 3);

        assert_eq!(wolf.attack, 12);
        assert_eq!(wolf.defense, 6);
        // Rewards stay at the level-derived baseline.
        assert_eq!(wolf.experience_reward, 65);
        assert_eq!(wolf.gold_reward, 14);
        assert_eq!(wolf.possible_drops.len(), 2);
        assert_eq!(wolf.possible_drops[0].item.name, "Wolf Pelt");
        assert_eq!(wolf.possible_drops[0].item.value, 8);
    }

    #[test]
    fn dragon_is_a_boss_with_guaranteed_drop_gate() {
        let dragon = from_template("Dragon", 5);

        assert_eq!(dragon.tier, EnemyTier::Boss);
        assert_eq!(dragon.item_drop_chance, 1.0);
        // Boss scaling on the level-5 baseline: (20 + 50) * 3.
        assert_eq!(dragon.max_health, 210);
        assert!(dragon.abilities.contains_key("Fire Breath"));
        assert!(dragon.abilities.contains_key("Wing Buffet"));
    }

    #[test]
    fn goblin_drops_include_a_weapon() {
        let goblin = from_template("Goblin", 2);

        let dagger = &goblin.possible_drops[1].item;
        assert_eq!(dagger.kind, ItemKind::Weapon);
        assert_eq!(dagger.damage, Some(6));
        assert_eq!(dagger.value, 16);
    }

    #[test]
    fn troll_overrides_vitals_and_rewards() {
        let troll = from_template("Troll", 2);

        assert_eq!(troll.max_health, 70);
        assert_eq!(troll.attack, 16);
        assert_eq!(troll.defense, 10);
        assert_eq!(troll.experience_reward, 75);
        assert_eq!(troll.gold_reward, 25);
    }

    #[test]
    fn unknown_template_falls_back_to_baseline() {
        let yeti = from_template("Yeti", 4);

        assert_eq!(yeti.name, "Yeti");
        assert_eq!(yeti.max_health, 60);
        assert_eq!(yeti.attack, 13);
        assert_eq!(yeti.description, "A level 4 Yeti.");
    }
}
