//! Status effects consulted by the turn scheduler.
//!
//! Only effects the scheduler acts on live here. Durations are counted in
//! the affected combatant's own turns: a one-turn stun is consumed the next
//! time that combatant would act.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    /// Loses their next turn(s).
    Stunned,
}

/// A single status effect with its remaining duration in own-turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    pub remaining_turns: u8,
}

/// Active status effects on a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn is_stunned(&self) -> bool {
        self.has(StatusEffectKind::Stunned)
    }

    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == kind && e.remaining_turns > 0)
    }

    /// Applies a stun for the given number of the victim's turns.
    ///
    /// If already stunned, keeps the longer duration.
    pub fn apply_stun(&mut self, turns: u8) {
        self.apply(StatusEffectKind::Stunned, turns);
    }

    fn apply(&mut self, kind: StatusEffectKind, turns: u8) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining_turns = existing.remaining_turns.max(turns);
            return;
        }

        if !self.effects.is_full() {
            self.effects.push(StatusEffect {
                kind,
                remaining_turns: turns,
            });
        }
    }

    /// Spends one turn of an active stun. Returns true if a stun was
    /// consumed (the caller skips the turn in that case).
    pub fn consume_stun(&mut self) -> bool {
        let Some(effect) = self
            .effects
            .iter_mut()
            .find(|e| e.kind == StatusEffectKind::Stunned && e.remaining_turns > 0)
        else {
            return false;
        };

        effect.remaining_turns -= 1;
        self.effects.retain(|e| e.remaining_turns > 0);
        true
    }
}
