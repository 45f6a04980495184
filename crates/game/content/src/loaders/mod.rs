//! Loaders for reading encounter content from RON data files.

pub mod encounters;

pub use encounters::{EncounterCatalog, EncounterEntry, EncounterLoader, EncounterTemplate};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
