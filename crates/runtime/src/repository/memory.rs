//! In-memory SnapshotRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use combat_core::Encounter;

use super::{RepositoryError, SnapshotRepository};

/// Keeps snapshots in a map; useful for tests and short-lived servers.
#[derive(Default)]
pub struct InMemorySnapshotRepo {
    snapshots: RwLock<HashMap<u64, Encounter>>,
}

impl InMemorySnapshotRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for InMemorySnapshotRepo {
    fn save(&self, id: u64, encounter: &Encounter) -> Result<(), RepositoryError> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        snapshots.insert(id, encounter.clone());
        Ok(())
    }

    fn load(&self, id: u64) -> Result<Option<Encounter>, RepositoryError> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshots.get(&id).cloned())
    }

    fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        snapshots.remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<u64>, RepositoryError> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshots.keys().copied().collect())
    }
}
