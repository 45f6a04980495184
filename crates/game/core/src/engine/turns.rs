//! Initiative rolls and turn-order advancement.

use crate::state::{Combatant, CombatantRef, InitiativeEntry, Role};

use super::{Encounter, EncounterError, EncounterPhase, TurnReport};

impl Encounter {
    /// Starts the encounter: rolls initiative, freezes the seating order,
    /// and opens round 1.
    ///
    /// Players roll `d20 + speed`; enemies roll a bare `d20`. The order is
    /// sorted by descending score with ties broken by insertion order
    /// (players before enemies, each in list order) and never reordered for
    /// the rest of the encounter.
    pub fn start(&mut self) -> Result<String, EncounterError> {
        if self.phase != EncounterPhase::Pending {
            return Err(EncounterError::AlreadyStarted);
        }
        if !self.players.iter().any(|p| p.is_alive()) || self.enemies.is_empty() {
            return Err(EncounterError::MissingSide);
        }

        let mut entries = Vec::with_capacity(self.players.len() + self.enemies.len());

        for (index, player) in self.players.iter().enumerate() {
            entries.push(InitiativeEntry {
                combatant: CombatantRef::player(index),
                initiative: self.rng.roll_initiative() + player.speed,
            });
        }
        for index in 0..self.enemies.len() {
            entries.push(InitiativeEntry {
                combatant: CombatantRef::enemy(index),
                initiative: self.rng.roll_initiative(),
            });
        }

        // Stable sort: equal scores keep insertion order.
        entries.sort_by(|a, b| b.initiative.cmp(&a.initiative));

        let mut message = String::from("Combat has begun!\nInitiative order:\n");
        for (position, entry) in entries.iter().enumerate() {
            let (name, label) = match entry.combatant.role {
                Role::Player => (self.players[entry.combatant.index].name.as_str(), "Player"),
                Role::Enemy => (self.enemies[entry.combatant.index].name.as_str(), "Enemy"),
            };
            message.push_str(&format!(
                "{}. {} ({}) - Initiative: {}\n",
                position + 1,
                name,
                label,
                entry.initiative
            ));
        }

        let Self {
            turn,
            players,
            enemies,
            ..
        } = self;
        turn.freeze(entries, |combatant| match combatant.role {
            Role::Player => players[combatant.index].is_alive(),
            Role::Enemy => enemies[combatant.index].is_alive(),
        });

        self.phase = EncounterPhase::Active;
        self.log.append(message.clone());
        Ok(message)
    }

    /// Advances the turn pointer after a consumed turn, opening a new round
    /// on wraparound, then logs the message and reports end status.
    pub(super) fn finish_action(&mut self, mut message: String) -> TurnReport {
        {
            let Self {
                turn,
                players,
                enemies,
                ..
            } = self;

            if turn.advance() {
                turn.round += 1;
                message.push_str(&format!("\nRound {} begins!", turn.round));

                // Drop combatants that died mid-round; survivors keep their
                // frozen relative order.
                turn.rebuild_turn_order(|combatant| match combatant.role {
                    Role::Player => players[combatant.index].is_alive(),
                    Role::Enemy => enemies[combatant.index].is_alive(),
                });
            }
        }

        self.log.append(message.clone());
        TurnReport {
            combat_over: self.check_end(),
            message,
        }
    }
}
