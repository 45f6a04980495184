//! File-based SnapshotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use combat_core::Encounter;

use super::{RepositoryError, SnapshotRepository};

/// Stores each snapshot as `session_{id}.json` under a base directory.
///
/// JSON keeps saves inspectable and hand-editable; writes go through a temp
/// file and an atomic rename so a crash never leaves a truncated save.
pub struct FileSnapshotRepository {
    base_dir: PathBuf,
}

impl FileSnapshotRepository {
    /// Creates the repository, creating the base directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn snapshot_path(&self, id: u64) -> PathBuf {
        self.base_dir.join(format!("session_{id}.json"))
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, id: u64, encounter: &Encounter) -> Result<(), RepositoryError> {
        let path = self.snapshot_path(id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(encounter)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved session[{}] to {}", id, path.display());

        Ok(())
    }

    fn load(&self, id: u64) -> Result<Option<Encounter>, RepositoryError> {
        let path = self.snapshot_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let encounter: Encounter = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded session[{}] from {}", id, path.display());

        Ok(Some(encounter))
    }

    fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let path = self.snapshot_path(id);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted session[{}]", id);
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<u64>, RepositoryError> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("session_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<u64>()
            {
                ids.push(id);
            }
        }

        Ok(ids)
    }
}
