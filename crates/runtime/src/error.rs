//! Errors raised by the session layer.

use crate::repository::RepositoryError;
use crate::session::SessionId;

/// Runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("no session with id {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Encounter(#[from] combat_core::EncounterError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
