//! Session lifecycle management.
//!
//! [`SessionManager`] owns every running encounter behind an
//! `Arc<tokio::sync::Mutex<_>>` handle, so callers can hold a fight across
//! await points while the manager stays free to create and end other
//! sessions. Ids are monotonically increasing and never reused within a
//! manager's lifetime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use combat_content::{LocationKind, random_encounter};
use combat_core::state::{EnemyState, PlayerState};
use combat_core::{Encounter, EncounterSummary, PcgRng};
use tokio::sync::{Mutex, RwLock};

use crate::error::{Result, RuntimeError};
use crate::repository::SnapshotRepository;

/// Opaque handle to a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// The raw id, as used for repository keys.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of running combat sessions.
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Encounter>>>>,
    next_id: AtomicU64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates and starts a session with a random seed.
    ///
    /// Returns the session id and the opening message (initiative order).
    pub async fn create_session(
        &self,
        players: Vec<PlayerState>,
        enemies: Vec<EnemyState>,
    ) -> Result<(SessionId, String)> {
        self.create_session_seeded(players, enemies, rand::random())
            .await
    }

    /// Creates and starts a session with a fixed seed, for replays and tests.
    pub async fn create_session_seeded(
        &self,
        players: Vec<PlayerState>,
        enemies: Vec<EnemyState>,
        seed: u64,
    ) -> Result<(SessionId, String)> {
        let mut encounter = Encounter::new(players, enemies, seed);
        let opening = encounter.start()?;

        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(encounter)));

        tracing::info!("Started combat session {}", id);
        Ok((id, opening))
    }

    /// Rolls a random encounter for the terrain, scaled to the strongest
    /// player, and starts a session for it.
    pub async fn create_random_session(
        &self,
        players: Vec<PlayerState>,
        location: LocationKind,
        count: usize,
    ) -> Result<(SessionId, String)> {
        let player_level = players.iter().map(|p| p.level).max().unwrap_or(1);

        let mut rng = PcgRng::seeded(rand::random());
        let enemies = random_encounter(location, player_level, count, &mut rng);

        self.create_session_seeded(players, enemies, rand::random())
            .await
    }

    /// Shared handle to a running session's encounter.
    pub async fn session(&self, id: SessionId) -> Result<Arc<Mutex<Encounter>>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::SessionNotFound(id))
    }

    /// Ends a session and removes it from the registry.
    ///
    /// The encounter's own `end()` resolves the outcome; encounters already
    /// over (victory, defeat, or flee) report that unchanged.
    pub async fn end_session(&self, id: SessionId) -> Result<EncounterSummary> {
        let handle = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(RuntimeError::SessionNotFound(id))?;

        let summary = handle.lock().await.end();
        tracing::info!("Ended combat session {}: {}", id, summary.outcome);
        Ok(summary)
    }

    /// Ids of every running session, ascending.
    pub async fn active_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.read().await.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Persists a snapshot of a running session.
    pub async fn save_session(&self, id: SessionId, repo: &dyn SnapshotRepository) -> Result<()> {
        let handle = self.session(id).await?;
        let encounter = handle.lock().await;
        repo.save(id.0, &encounter)?;
        Ok(())
    }

    /// Restores a session from a snapshot, registering it under its stored
    /// id. Future ids are bumped past it so they never collide.
    pub async fn restore_session(
        &self,
        id: u64,
        repo: &dyn SnapshotRepository,
    ) -> Result<SessionId> {
        let session_id = SessionId(id);
        let encounter = repo
            .load(id)?
            .ok_or(RuntimeError::SessionNotFound(session_id))?;

        self.next_id.fetch_max(id + 1, Ordering::Relaxed);
        self.sessions
            .write()
            .await
            .insert(session_id, Arc::new(Mutex::new(encounter)));

        tracing::info!("Restored combat session {}", session_id);
        Ok(session_id)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
