//! Player-side combat state.
//!
//! The engine treats this as the narrow collaborator interface from the
//! surrounding game: vitals and stats in, experience/gold/inventory out.
//! Class bonuses, leveling curves, and equipment management beyond the
//! equipped weapon belong to the outer game, not to combat.

use std::collections::BTreeMap;

use super::combatant::Combatant;
use super::status::StatusEffects;

/// An equipped weapon, exposing the damage value used in place of the
/// player's base attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// A learned skill: a mana-gated damage multiplier on the basic attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub mana_cost: u32,
    pub damage_multiplier: f64,
}

/// Item category labels carried on drops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Material,
    Weapon,
    Miscellaneous,
}

/// An item as it lands in a player's inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
    /// Present on weapon drops only.
    pub damage: Option<u32>,
}

impl ItemDrop {
    pub fn material(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Material,
            value,
            damage: None,
        }
    }

    pub fn weapon(name: impl Into<String>, damage: u32, value: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Weapon,
            value,
            damage: Some(damage),
        }
    }

    pub fn miscellaneous(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Miscellaneous,
            value,
            damage: None,
        }
    }
}

/// A player's combat-relevant state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    /// Initiative modifier added to the d20 roll at encounter start.
    pub speed: u32,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub weapon: Option<Weapon>,
    pub skills: BTreeMap<String, Skill>,
    pub inventory: Vec<ItemDrop>,
    pub status_effects: StatusEffects,
}

impl PlayerState {
    /// Creates a fresh level-1 player with baseline stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: 100,
            max_health: 100,
            mana: 50,
            max_mana: 50,
            attack: 10,
            defense: 5,
            speed: 5,
            level: 1,
            experience: 0,
            gold: 50,
            weapon: None,
            skills: BTreeMap::new(),
            inventory: Vec::new(),
            status_effects: StatusEffects::empty(),
        }
    }

    /// Outgoing attack power: equipped weapon damage, or base attack.
    pub fn attack_power(&self) -> u32 {
        self.weapon.as_ref().map_or(self.attack, |w| w.damage)
    }

    /// Adds experience and handles level-up.
    ///
    /// Returns true if the player leveled up. The next level requires
    /// `level * 100` experience; on level-up both pools refill.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.experience += amount;

        if self.experience >= self.level * 100 {
            self.level += 1;
            self.max_health += 10;
            self.max_mana += 5;
            self.attack += 2;
            self.defense += 1;
            self.health = self.max_health;
            self.mana = self.max_mana;
            return true;
        }
        false
    }

    /// Spends mana if available. Returns false (and deducts nothing) when
    /// the pool is too low.
    pub fn use_mana(&mut self, amount: u32) -> bool {
        if self.mana < amount {
            return false;
        }
        self.mana -= amount;
        true
    }

    pub fn add_to_inventory(&mut self, item: ItemDrop) {
        self.inventory.push(item);
    }

    pub fn learn_skill(&mut self, name: impl Into<String>, skill: Skill) {
        self.skills.insert(name.into(), skill);
    }
}

impl Combatant for PlayerState {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_power_prefers_equipped_weapon() {
        let mut player = PlayerState::new("Aria");
        assert_eq!(player.attack_power(), 10);

        player.weapon = Some(Weapon::new("Iron Sword", 14));
        assert_eq!(player.attack_power(), 14);
    }

    #[test]
    fn gain_experience_levels_up_and_refills_pools() {
        let mut player = PlayerState::new("Aria");
        player.health = 40;
        player.mana = 5;

        assert!(!player.gain_experience(50));
        assert_eq!(player.level, 1);

        assert!(player.gain_experience(60));
        assert_eq!(player.level, 2);
        assert_eq!(player.health, player.max_health);
        assert_eq!(player.mana, player.max_mana);
    }

    #[test]
    fn use_mana_rejects_insufficient_pool_without_deducting() {
        let mut player = PlayerState::new("Aria");
        player.mana = 8;

        assert!(!player.use_mana(10));
        assert_eq!(player.mana, 8);

        assert!(player.use_mana(8));
        assert_eq!(player.mana, 0);
    }

    #[test]
    fn set_health_clamps_to_max() {
        let mut player = PlayerState::new("Aria");
        player.set_health(1000);
        assert_eq!(player.health, player.max_health);
    }
}
