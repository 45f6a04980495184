//! Encounter catalog loader.
//!
//! An encounter template is a hand-authored enemy lineup pinned to a minimum
//! level; spawning shifts every member's level by the player's distance from
//! that minimum, floored at 1.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::state::{EnemyState, EnemyTier};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::templates::template_builder;

/// One enemy slot in an encounter template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterEntry {
    /// Template name; unknown names fall back to a baseline enemy.
    pub template: String,
    /// Level when the player is exactly at the template's minimum level.
    pub level: u32,
    /// Tier override. Left out, the template's own tier stands (notably the
    /// Dragon template, which is always a boss).
    #[serde(default)]
    pub tier: Option<EnemyTier>,
}

/// A named enemy lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterTemplate {
    pub min_level: u32,
    pub entries: Vec<EncounterEntry>,
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterCatalog {
    pub encounters: BTreeMap<String, EncounterTemplate>,
}

impl EncounterCatalog {
    /// Spawns the named encounter scaled to the player's level, or `None` if
    /// the catalog has no such template.
    pub fn spawn(&self, name: &str, player_level: u32) -> Option<Vec<EnemyState>> {
        let template = self.encounters.get(name)?;
        let level_shift = i64::from(player_level) - i64::from(template.min_level);

        let enemies = template
            .entries
            .iter()
            .map(|entry| {
                let level = (i64::from(entry.level) + level_shift).max(1) as u32;
                let mut builder = template_builder(&entry.template, level);
                if let Some(tier) = entry.tier {
                    builder = builder.tier(tier);
                }
                builder.build()
            })
            .collect();

        Some(enemies)
    }
}

/// Loader for encounter catalogs from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load an encounter catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EncounterCatalog> {
        let content = read_file(path)?;
        let catalog: EncounterCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter catalog RON: {}", e))?;

        Ok(catalog)
    }
}
