//! Errors surfaced by the encounter engine.
//!
//! Only rejections that leave the encounter completely untouched are errors.
//! Outcomes that consume the acting combatant's turn (invalid target,
//! unknown skill, insufficient mana) are reported in-band as turn messages.

/// Rejections that make no state change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterError {
    #[error("combat is not active")]
    NotActive,

    #[error("combat has already started")]
    AlreadyStarted,

    #[error("cannot start combat without both players and enemies")]
    MissingSide,

    #[error("it's not your turn yet")]
    NotYourTurn,
}
