//! Random enemy and encounter generation.
//!
//! Generation draws from the caller's [`PcgRng`], so a seeded generator
//! produces the same bestiary every time.

use combat_core::rng::PcgRng;
use combat_core::state::{EnemyState, EnemyTier};

use crate::templates::template_builder;

/// Chance for any randomly generated enemy to be promoted to elite.
const LONE_ELITE_CHANCE: f64 = 0.1;
/// Chance for a multi-enemy encounter to promote its strongest member.
const GROUP_ELITE_CHANCE: f64 = 0.2;
/// Level adjustments drawn per encounter member; weighted toward no change.
const LEVEL_OFFSETS: [i64; 7] = [-1, -1, 0, 0, 0, 1, 1];

/// Terrain bucket an encounter is rolled for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    Forest,
    Cave,
    Mountain,
    Swamp,
    Desert,
    Ruins,
    #[default]
    Any,
}

impl LocationKind {
    /// Template names that can spawn in this terrain.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Forest => &["Wolf", "Goblin", "Bear"],
            Self::Cave => &["Bat", "Skeleton", "Troll"],
            Self::Mountain => &["Wolf", "Eagle", "Yeti"],
            Self::Swamp => &["Alligator", "Poison Spider", "Slime"],
            Self::Desert => &["Scorpion", "Sand Worm", "Mummy"],
            Self::Ruins => &["Skeleton", "Ghost", "Animated Armor"],
            Self::Any => &["Wolf", "Goblin", "Skeleton", "Bandit", "Slime"],
        }
    }
}

/// Rolls a single enemy for the given level and terrain.
pub fn random_enemy(level: u32, location: LocationKind, rng: &mut PcgRng) -> EnemyState {
    build_enemy(level, location, rng, false)
}

/// Rolls a full encounter for the given terrain, scaled around the player's
/// level.
///
/// Each member's level is the player's shifted by a weighted offset and
/// floored at 1. Multi-enemy groups have one extra chance to promote their
/// highest-level member (the first one, on ties) to elite.
pub fn random_encounter(
    location: LocationKind,
    player_level: u32,
    count: usize,
    rng: &mut PcgRng,
) -> Vec<EnemyState> {
    let levels: Vec<u32> = (0..count)
        .map(|_| {
            let offset = LEVEL_OFFSETS[rng.pick_index(LEVEL_OFFSETS.len())];
            (i64::from(player_level) + offset).max(1) as u32
        })
        .collect();

    let promoted = if count > 1 && rng.chance(GROUP_ELITE_CHANCE) {
        let mut strongest = 0;
        for (index, &level) in levels.iter().enumerate() {
            if level > levels[strongest] {
                strongest = index;
            }
        }
        Some(strongest)
    } else {
        None
    };

    levels
        .iter()
        .enumerate()
        .map(|(index, &level)| build_enemy(level, location, rng, promoted == Some(index)))
        .collect()
}

fn build_enemy(
    level: u32,
    location: LocationKind,
    rng: &mut PcgRng,
    force_elite: bool,
) -> EnemyState {
    let templates = location.templates();
    let template = templates[rng.pick_index(templates.len())];

    let elite = force_elite || rng.chance(LONE_ELITE_CHANCE);

    let mut builder = template_builder(template, level);
    if elite {
        builder = builder.tier(EnemyTier::Elite);
    }

    let mut enemy = builder.build();
    if elite {
        enemy.name = format!("Elite {}", enemy.name);
    }
    enemy
}
