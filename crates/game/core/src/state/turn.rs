//! Initiative and turn-order bookkeeping.

use super::combatant::CombatantRef;

/// Immutable pairing of a combatant and its initiative score.
///
/// The sequence of these entries, frozen at encounter start, is the
/// canonical seating order for the whole encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeEntry {
    pub combatant: CombatantRef,
    pub initiative: u32,
}

/// The live scheduling state of an encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Frozen at `start()`; never reordered afterwards.
    pub initiative_order: Vec<InitiativeEntry>,
    /// Working copy of the initiative order filtered to living combatants,
    /// rebuilt at the start of every round.
    pub turn_order: Vec<InitiativeEntry>,
    /// Index of the combatant whose turn it is, into `turn_order`.
    pub current_turn: usize,
    /// Rounds are 1-based; incremented on each full pass of the turn order.
    pub round: u32,
}

impl TurnState {
    /// Freezes the initiative order and derives the first working order.
    ///
    /// Entries must already be sorted by descending initiative (stable, so
    /// insertion order breaks ties).
    pub fn freeze<F>(&mut self, entries: Vec<InitiativeEntry>, is_alive: F)
    where
        F: Fn(CombatantRef) -> bool,
    {
        self.initiative_order = entries;
        self.round = 1;
        self.rebuild_turn_order(is_alive);
    }

    /// Refilters the frozen order to survivors and resets the pointer.
    pub fn rebuild_turn_order<F>(&mut self, is_alive: F)
    where
        F: Fn(CombatantRef) -> bool,
    {
        self.turn_order = self
            .initiative_order
            .iter()
            .filter(|entry| is_alive(entry.combatant))
            .copied()
            .collect();
        self.current_turn = 0;
    }

    /// The entry whose turn it currently is.
    pub fn current_entry(&self) -> Option<InitiativeEntry> {
        self.turn_order.get(self.current_turn).copied()
    }

    /// Moves the pointer forward. Returns true on wraparound, which is the
    /// caller's cue to open a new round and rebuild the order.
    pub fn advance(&mut self) -> bool {
        if self.turn_order.is_empty() {
            return false;
        }
        self.current_turn = (self.current_turn + 1) % self.turn_order.len();
        self.current_turn == 0
    }
}
