//! Persistence for encounter snapshots.
//!
//! Repositories handle the data that changes during play: whole-encounter
//! snapshots keyed by session id. A restored snapshot carries the encounter's
//! RNG state, so a resumed fight plays out exactly as the original would
//! have. Static content (templates, encounter catalogs) is the content
//! crate's business, not a repository's.

mod error;
mod file;
mod memory;

pub use error::RepositoryError;
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepo;

use combat_core::Encounter;

/// Storage backend for encounter snapshots.
pub trait SnapshotRepository: Send + Sync {
    /// Persists a snapshot, replacing any existing one under the same id.
    fn save(&self, id: u64, encounter: &Encounter) -> Result<(), RepositoryError>;

    /// Loads the snapshot stored under `id`, or `None` if there is none.
    fn load(&self, id: u64) -> Result<Option<Encounter>, RepositoryError>;

    /// Removes the snapshot stored under `id`. Missing snapshots are not an
    /// error.
    fn delete(&self, id: u64) -> Result<(), RepositoryError>;

    /// Ids of every stored snapshot, in no particular order.
    fn list_ids(&self) -> Result<Vec<u64>, RepositoryError>;
}
