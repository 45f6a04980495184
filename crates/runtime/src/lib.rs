//! Async session layer over the combat engine.
//!
//! The runtime owns running encounters and their persistence:
//! - [`SessionManager`] hands out shared handles to live encounters keyed by
//!   monotonically increasing session ids
//! - [`SnapshotRepository`] implementations persist encounter snapshots, in
//!   memory or as JSON files on disk
//!
//! The engine itself stays synchronous and deterministic; everything async
//! lives here.

pub mod error;
pub mod repository;
pub mod session;

pub use error::{Result, RuntimeError};
pub use repository::{
    FileSnapshotRepository, InMemorySnapshotRepo, RepositoryError, SnapshotRepository,
};
pub use session::{SessionId, SessionManager};
