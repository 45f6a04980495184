//! Enemy stat blocks and their one-shot construction.
//!
//! Tier scaling (Elite/Boss) compounds multiplicatively, so it must be
//! applied exactly once. [`EnemyBuilder`] owns that step: the tier is part
//! of construction and there is no mutable setter on a built enemy.

use std::collections::BTreeMap;

use super::combatant::Combatant;
use super::player::ItemDrop;
use super::status::StatusEffects;

/// Effect category of an enemy ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    /// Attack scaled by the multiplier.
    Damage,
    /// Self-heal for `max_health * multiplier`.
    Heal,
    /// Costs the target their next turn (when stun enforcement is on).
    Stun,
}

/// A named alternative to the basic attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub kind: AbilityKind,
    pub multiplier: f64,
    /// Per-ability trigger weight. Carried as data for content authors;
    /// selection among abilities is uniform once the single per-turn
    /// ability gate passes.
    pub chance: f64,
}

/// One entry in an enemy's drop table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropEntry {
    pub item: ItemDrop,
    pub chance: f64,
}

/// Stat-scaling tier, applied once at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyTier {
    #[default]
    Normal,
    Elite,
    Boss,
}

/// An enemy's combat state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub experience_reward: u32,
    pub gold_reward: u32,
    /// Gate probability for the whole drop table, in `[0, 1]`.
    pub item_drop_chance: f64,
    pub possible_drops: Vec<DropEntry>,
    pub abilities: BTreeMap<String, Ability>,
    /// Damage-type resistance percentages. Data-only: not consulted by
    /// damage resolution.
    pub resistances: BTreeMap<String, f64>,
    /// Damage-type weakness percentages. Data-only, like `resistances`.
    pub weaknesses: BTreeMap<String, f64>,
    /// Flavor fragments for basic-attack log lines.
    pub attack_messages: Vec<String>,
    pub description: String,
    pub tier: EnemyTier,
    pub status_effects: StatusEffects,
}

impl EnemyState {
    /// Starts building an enemy with level-derived baseline stats.
    pub fn builder(name: impl Into<String>, level: u32) -> EnemyBuilder {
        EnemyBuilder::new(name, level)
    }
}

impl Combatant for EnemyState {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        self.max_health
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }
}

/// Builder for [`EnemyState`].
///
/// Baselines scale with level; every stat can be overridden before `build()`
/// applies the tier multipliers as the final, unrepeatable step.
#[derive(Clone, Debug)]
pub struct EnemyBuilder {
    name: String,
    level: u32,
    max_health: u32,
    attack: u32,
    defense: u32,
    experience_reward: u32,
    gold_reward: u32,
    item_drop_chance: f64,
    possible_drops: Vec<DropEntry>,
    abilities: BTreeMap<String, Ability>,
    resistances: BTreeMap<String, f64>,
    weaknesses: BTreeMap<String, f64>,
    attack_messages: Vec<String>,
    description: Option<String>,
    tier: EnemyTier,
}

impl EnemyBuilder {
    const DEFAULT_ATTACK_MESSAGES: [&'static str; 4] = [
        "swings at you with great force",
        "lunges toward you",
        "attacks with a fierce growl",
        "strikes quickly",
    ];

    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            max_health: 20 + level * 10,
            attack: 5 + level * 2,
            defense: 2 + level,
            experience_reward: 20 + level * 15,
            gold_reward: 5 + level * 3,
            item_drop_chance: 0.3,
            possible_drops: Vec::new(),
            abilities: BTreeMap::new(),
            resistances: BTreeMap::new(),
            weaknesses: BTreeMap::new(),
            attack_messages: Self::DEFAULT_ATTACK_MESSAGES
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            description: None,
            tier: EnemyTier::Normal,
        }
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    pub fn experience_reward(mut self, experience_reward: u32) -> Self {
        self.experience_reward = experience_reward;
        self
    }

    pub fn gold_reward(mut self, gold_reward: u32) -> Self {
        self.gold_reward = gold_reward;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn attack_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attack_messages = messages.into_iter().map(Into::into).collect();
        self
    }

    pub fn ability(
        mut self,
        name: impl Into<String>,
        kind: AbilityKind,
        multiplier: f64,
        chance: f64,
    ) -> Self {
        self.abilities.insert(
            name.into(),
            Ability {
                kind,
                multiplier,
                chance,
            },
        );
        self
    }

    pub fn drop(mut self, item: ItemDrop, chance: f64) -> Self {
        self.possible_drops.push(DropEntry { item, chance });
        self
    }

    pub fn resistance(mut self, damage_type: impl Into<String>, percentage: f64) -> Self {
        self.resistances.insert(damage_type.into(), percentage);
        self
    }

    pub fn weakness(mut self, damage_type: impl Into<String>, percentage: f64) -> Self {
        self.weaknesses.insert(damage_type.into(), percentage);
        self
    }

    pub fn tier(mut self, tier: EnemyTier) -> Self {
        self.tier = tier;
        self
    }

    /// Finalizes the enemy, applying tier scaling exactly once.
    pub fn build(self) -> EnemyState {
        let (max_health, attack, defense, experience, gold, drop_chance) = match self.tier {
            EnemyTier::Normal => (
                self.max_health,
                self.attack,
                self.defense,
                self.experience_reward,
                self.gold_reward,
                self.item_drop_chance,
            ),
            EnemyTier::Elite => (
                scale(self.max_health, 1.5),
                scale(self.attack, 1.3),
                scale(self.defense, 1.3),
                self.experience_reward * 2,
                self.gold_reward * 2,
                0.6,
            ),
            EnemyTier::Boss => (
                self.max_health * 3,
                self.attack * 2,
                scale(self.defense, 1.5),
                self.experience_reward * 5,
                self.gold_reward * 5,
                1.0,
            ),
        };

        let description = self
            .description
            .unwrap_or_else(|| format!("A level {} {}.", self.level, self.name));

        EnemyState {
            name: self.name,
            level: self.level,
            health: max_health,
            max_health,
            attack,
            defense,
            experience_reward: experience,
            gold_reward: gold,
            item_drop_chance: drop_chance,
            possible_drops: self.possible_drops,
            abilities: self.abilities,
            resistances: self.resistances,
            weaknesses: self.weaknesses,
            attack_messages: self.attack_messages,
            description,
            tier: self.tier,
            status_effects: StatusEffects::empty(),
        }
    }
}

fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_stats_scale_with_level() {
        let enemy = EnemyState::builder("Wolf", 3).build();

        assert_eq!(enemy.max_health, 50);
        assert_eq!(enemy.health, 50);
        assert_eq!(enemy.attack, 11);
        assert_eq!(enemy.defense, 5);
        assert_eq!(enemy.experience_reward, 65);
        assert_eq!(enemy.gold_reward, 14);
        assert_eq!(enemy.tier, EnemyTier::Normal);
    }

    #[test]
    fn elite_tier_scales_once_at_build() {
        let enemy = EnemyState::builder("Wolf", 1).tier(EnemyTier::Elite).build();

        // Base at level 1: hp 30, atk 7, def 3, xp 35, gold 8.
        assert_eq!(enemy.max_health, 45);
        assert_eq!(enemy.attack, 9);
        assert_eq!(enemy.defense, 3);
        assert_eq!(enemy.experience_reward, 70);
        assert_eq!(enemy.gold_reward, 16);
        assert_eq!(enemy.item_drop_chance, 0.6);
    }

    #[test]
    fn boss_tier_guarantees_drop_gate() {
        let enemy = EnemyState::builder("Dragon", 5).tier(EnemyTier::Boss).build();

        assert_eq!(enemy.item_drop_chance, 1.0);
        assert_eq!(enemy.max_health, (20 + 50) * 3);
        assert_eq!(enemy.health, enemy.max_health);
    }

    #[test]
    fn repeated_tier_calls_do_not_compound() {
        let enemy = EnemyState::builder("Ogre", 2)
            .tier(EnemyTier::Elite)
            .tier(EnemyTier::Elite)
            .build();

        let once = EnemyState::builder("Ogre", 2).tier(EnemyTier::Elite).build();
        assert_eq!(enemy.max_health, once.max_health);
        assert_eq!(enemy.attack, once.attack);
    }

    #[test]
    fn default_description_names_level() {
        let enemy = EnemyState::builder("Goblin", 2).build();
        assert_eq!(enemy.description, "A level 2 Goblin.");
    }
}
