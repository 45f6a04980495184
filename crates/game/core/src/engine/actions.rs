//! Turn resolution: enemy turns via `next_turn`, player turns via
//! `player_action`.
//!
//! Turn consumption rules: "not your turn" and calls on an inactive
//! encounter reject without touching anything; a successful flee ends the
//! encounter on the spot; every other resolved action consumes the acting
//! combatant's turn, including invalid targets, unknown skills, and
//! insufficient mana.

use crate::combat::{ability_heal_amount, ability_raw_damage, resolve_attack};
use crate::rewards::resolve_defeat;
use crate::rng::PcgRng;
use crate::state::{AbilityKind, Combatant, EnemyState, PlayerState, Role};

use super::{Encounter, EncounterError, EncounterPhase, TurnReport};

/// A player's choice for their turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Basic attack with the equipped weapon (or bare hands).
    Attack { target: usize },
    /// Named skill: mana-gated damage multiplier on the weapon-or-base
    /// attack value.
    Skill { skill: String, target: usize },
    /// Item usage is not wired into combat yet; still consumes the turn.
    UseItem,
    /// Attempt to escape the encounter.
    Flee,
}

impl Encounter {
    /// Resolves the current turn-order entry without player input.
    ///
    /// Living enemies act (ability or basic attack against a random living
    /// player); defeated combatants are skipped with a message; a living
    /// player's turn passes, which lets an external turn-timer policy force
    /// the fight forward.
    pub fn next_turn(&mut self) -> Result<TurnReport, EncounterError> {
        if self.phase != EncounterPhase::Active {
            return Err(EncounterError::NotActive);
        }

        // End condition is checked before resolving anything.
        let entry = if self.check_end() {
            None
        } else {
            self.turn.current_entry()
        };
        let Some(entry) = entry else {
            let summary = self.end();
            return Ok(TurnReport {
                message: summary.message,
                combat_over: true,
            });
        };

        let message = match entry.combatant.role {
            Role::Enemy => self.resolve_enemy_turn(entry.combatant.index),
            Role::Player => self.resolve_player_pass(entry.combatant.index),
        };

        Ok(self.finish_action(message))
    }

    /// Resolves one player action.
    ///
    /// Rejects with [`EncounterError::NotYourTurn`] (no state change, not
    /// even turn advancement) unless `player_index` is exactly the entity at
    /// the current turn-order position.
    pub fn player_action(
        &mut self,
        player_index: usize,
        action: PlayerAction,
    ) -> Result<TurnReport, EncounterError> {
        if self.phase != EncounterPhase::Active {
            return Err(EncounterError::NotActive);
        }

        let Some(entry) = self.turn.current_entry() else {
            return Err(EncounterError::NotActive);
        };
        if entry.combatant.role != Role::Player || entry.combatant.index != player_index {
            return Err(EncounterError::NotYourTurn);
        }

        let player_name = self.players[player_index].name.clone();

        if self.config.enforce_stun && self.players[player_index].status_effects.is_stunned() {
            self.players[player_index].status_effects.consume_stun();
            return Ok(self.finish_action(format!(
                "{player_name}'s turn: You are stunned and lose your turn!"
            )));
        }

        let message = match action {
            PlayerAction::Attack { target } => {
                if target >= self.enemies.len() {
                    format!("{player_name}'s turn: Invalid target.")
                } else {
                    self.resolve_player_strike(player_index, target, None)
                }
            }
            PlayerAction::Skill { ref skill, target } => {
                if target >= self.enemies.len() {
                    format!("{player_name}'s turn: Invalid target.")
                } else {
                    match self.players[player_index].skills.get(skill).copied() {
                        None => {
                            format!("{player_name}'s turn: You don't have the skill {skill}.")
                        }
                        Some(s) if !self.players[player_index].use_mana(s.mana_cost) => format!(
                            "{player_name}'s turn: You don't have enough mana to use {skill}."
                        ),
                        Some(s) => self.resolve_player_strike(
                            player_index,
                            target,
                            Some((skill.as_str(), s.damage_multiplier)),
                        ),
                    }
                }
            }
            PlayerAction::UseItem => {
                format!("{player_name}'s turn: Item usage is not implemented yet.")
            }
            PlayerAction::Flee => {
                let mean_enemy_level = self
                    .enemies
                    .iter()
                    .map(|e| f64::from(e.level))
                    .sum::<f64>()
                    / self.enemies.len() as f64;
                let level_diff =
                    f64::from(self.players[player_index].level) - mean_enemy_level;
                let chance =
                    self.config.flee_base_chance + self.config.flee_level_weight * level_diff;

                // chance() clamps to [0, 1], so extreme level gaps degrade
                // to guaranteed success/failure instead of misbehaving.
                if self.rng.chance(chance) {
                    self.phase = EncounterPhase::Ended;
                    let message =
                        format!("{player_name}'s turn: You successfully fled from combat!");
                    self.log.append(message.clone());
                    return Ok(TurnReport {
                        message,
                        combat_over: true,
                    });
                }
                format!("{player_name}'s turn: You tried to flee but couldn't escape!")
            }
        };

        Ok(self.finish_action(message))
    }

    /// Attack or skill strike against a validated enemy index.
    fn resolve_player_strike(
        &mut self,
        player_index: usize,
        target_index: usize,
        skill: Option<(&str, f64)>,
    ) -> String {
        let Self {
            players,
            enemies,
            rng,
            ..
        } = self;
        let player = &mut players[player_index];
        let enemy = &mut enemies[target_index];

        let base = player.attack_power();
        let raw = match skill {
            None => (f64::from(base) * rng.damage_variance()) as u32,
            Some((_, multiplier)) => (f64::from(base) * multiplier) as u32,
        };

        let result = resolve_attack(raw, &mut *enemy);

        let mut message = match skill {
            None => format!(
                "{}'s turn: You attack the {} for {} damage!",
                player.name, enemy.name, result.actual_damage
            ),
            Some((skill_name, _)) => format!(
                "{}'s turn: You use {} on the {} for {} damage!",
                player.name, skill_name, enemy.name, result.actual_damage
            ),
        };

        if result.target_defeated {
            message.push_str(&defeat_payout(player, enemy, rng));
        }

        message
    }

    /// A living enemy's turn: single ability gate, otherwise basic attack.
    fn resolve_enemy_turn(&mut self, index: usize) -> String {
        let Self {
            players,
            enemies,
            rng,
            config,
            ..
        } = self;
        let enemy = &mut enemies[index];

        if !enemy.is_alive() {
            return format!("{}'s turn: but it's already defeated.", enemy.name);
        }
        if config.enforce_stun && enemy.status_effects.is_stunned() {
            enemy.status_effects.consume_stun();
            return format!("{}'s turn: it is stunned and loses its turn!", enemy.name);
        }

        let living: Vec<usize> = players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_alive())
            .map(|(i, _)| i)
            .collect();
        if living.is_empty() {
            return format!("{}'s turn: there are no targets available.", enemy.name);
        }
        let target_index = living[rng.pick_index(living.len())];

        if !enemy.abilities.is_empty() && rng.chance(config.ability_chance) {
            let names: Vec<String> = enemy.abilities.keys().cloned().collect();
            let ability_name = names[rng.pick_index(names.len())].clone();
            let ability = enemy.abilities[&ability_name];

            match ability.kind {
                AbilityKind::Damage => {
                    let raw = ability_raw_damage(enemy.attack, ability.multiplier);
                    let target = &mut players[target_index];
                    let result = resolve_attack(raw, &mut *target);
                    let mut message = format!(
                        "{name}'s turn: The {name} uses {ability_name} and deals {damage} damage!",
                        name = enemy.name,
                        damage = result.actual_damage,
                    );
                    if result.target_defeated {
                        message.push_str(&format!("\n{} has been defeated!", target.name));
                    }
                    message
                }
                AbilityKind::Heal => {
                    let amount = ability_heal_amount(enemy.max_health, ability.multiplier);
                    let actual = enemy.heal(amount);
                    format!(
                        "{name}'s turn: The {name} uses {ability_name} and heals for {actual} health!",
                        name = enemy.name,
                    )
                }
                AbilityKind::Stun => {
                    let target = &mut players[target_index];
                    if config.enforce_stun {
                        target.status_effects.apply_stun(1);
                    }
                    format!(
                        "{name}'s turn: The {name} uses {ability_name}! {target} is stunned and loses their next turn!",
                        name = enemy.name,
                        target = target.name,
                    )
                }
            }
        } else {
            let raw = (f64::from(enemy.attack) * rng.damage_variance()) as u32;
            let flavor = if enemy.attack_messages.is_empty() {
                "attacks".to_string()
            } else {
                enemy.attack_messages[rng.pick_index(enemy.attack_messages.len())].clone()
            };

            let target = &mut players[target_index];
            let result = resolve_attack(raw, &mut *target);
            let mut message = format!(
                "{name}'s turn: The {name} {flavor} and deals {damage} damage.",
                name = enemy.name,
                damage = result.actual_damage,
            );
            if result.target_defeated {
                message.push_str(&format!("\n{} has been defeated!", target.name));
            }
            message
        }
    }

    /// A player's turn resolved without input: skipped if defeated or
    /// stunned, otherwise passed.
    fn resolve_player_pass(&mut self, index: usize) -> String {
        let player = &mut self.players[index];

        if !player.is_alive() {
            return format!("{}'s turn: but they are already defeated.", player.name);
        }
        if self.config.enforce_stun && player.status_effects.is_stunned() {
            player.status_effects.consume_stun();
            return format!(
                "{name}'s turn: {name} is stunned and loses the turn!",
                name = player.name
            );
        }

        format!(
            "{name}'s turn: {name} hesitates and the turn passes.",
            name = player.name
        )
    }
}

/// Applies the payout for a freshly defeated enemy to the acting player and
/// renders the reward lines.
fn defeat_payout(player: &mut PlayerState, enemy: &EnemyState, rng: &mut PcgRng) -> String {
    let rewards = resolve_defeat(enemy, rng);

    let mut message = format!(
        "\nYou defeated the {}!\nYou gained {} experience and {} gold!",
        enemy.name, rewards.experience, rewards.gold
    );

    let leveled_up = player.gain_experience(rewards.experience);
    player.gold += rewards.gold;

    if leveled_up {
        message.push_str(&format!(
            "\nCongratulations! You leveled up to level {}!",
            player.level
        ));
    }

    for item in rewards.drops {
        message.push_str(&format!("\nThe {} dropped {}!", enemy.name, item.name));
        player.add_to_inventory(item);
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::engine::EncounterOutcome;
    use crate::state::{CombatantRef, Skill};

    fn fast_player(name: &str) -> PlayerState {
        let mut player = PlayerState::new(name);
        // Guarantees the player wins initiative: d20 + 100 > d20.
        player.speed = 100;
        player
    }

    fn punching_bag(name: &str) -> EnemyState {
        EnemyState::builder(name, 1).max_health(500).build()
    }

    fn started(players: Vec<PlayerState>, enemies: Vec<EnemyState>, seed: u64) -> Encounter {
        let mut encounter = Encounter::new(players, enemies, seed);
        encounter.start().unwrap();
        encounter
    }

    fn run_enemy_turns(encounter: &mut Encounter) -> Vec<String> {
        let mut messages = Vec::new();
        while encounter.is_active()
            && encounter.current_combatant().map(|c| c.role) == Some(Role::Enemy)
        {
            messages.push(encounter.next_turn().unwrap().message);
        }
        messages
    }

    #[test]
    fn start_rejects_missing_or_defeated_sides() {
        let mut no_enemies = Encounter::new(vec![PlayerState::new("Aria")], vec![], 1);
        assert_eq!(no_enemies.start(), Err(EncounterError::MissingSide));

        let mut downed = PlayerState::new("Aria");
        downed.health = 0;
        let mut dead_side = Encounter::new(
            vec![downed],
            vec![EnemyState::builder("Goblin", 1).build()],
            1,
        );
        assert_eq!(dead_side.start(), Err(EncounterError::MissingSide));
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut encounter = started(
            vec![fast_player("Aria")],
            vec![EnemyState::builder("Goblin", 1).build()],
            1,
        );
        assert_eq!(encounter.start(), Err(EncounterError::AlreadyStarted));
    }

    #[test]
    fn initiative_is_sorted_descending_with_speed_bonus() {
        let encounter = started(
            vec![fast_player("Aria")],
            vec![
                EnemyState::builder("Goblin", 1).build(),
                EnemyState::builder("Wolf", 2).build(),
            ],
            7,
        );

        let order = &encounter.turn.initiative_order;
        assert_eq!(order.len(), 3);
        assert!(order.windows(2).all(|w| w[0].initiative >= w[1].initiative));
        assert_eq!(order[0].combatant, CombatantRef::player(0));
    }

    #[test]
    fn actions_are_rejected_before_start() {
        let mut encounter = Encounter::new(
            vec![PlayerState::new("Aria")],
            vec![EnemyState::builder("Goblin", 1).build()],
            1,
        );

        assert_eq!(
            encounter.player_action(0, PlayerAction::UseItem),
            Err(EncounterError::NotActive)
        );
        assert_eq!(encounter.next_turn(), Err(EncounterError::NotActive));
    }

    #[test]
    fn out_of_turn_action_changes_nothing() {
        let mut slow = PlayerState::new("Borin");
        slow.speed = 0;
        let mut encounter = started(
            vec![fast_player("Aria"), slow],
            vec![punching_bag("Ogre")],
            11,
        );

        let before_health = encounter.enemies[0].health;
        assert_eq!(
            encounter.player_action(1, PlayerAction::Attack { target: 0 }),
            Err(EncounterError::NotYourTurn)
        );
        assert_eq!(encounter.turn.current_turn, 0);
        assert_eq!(encounter.enemies[0].health, before_health);
        assert!(encounter.is_active());
    }

    #[test]
    fn seeded_fight_kills_enemy_and_pays_out_once() {
        // Level 1 baseline rewards: 35 experience, 8 gold.
        let enemy = EnemyState::builder("Goblin", 1)
            .max_health(26)
            .attack(7)
            .defense(2)
            .build();
        let mut encounter = started(vec![fast_player("Aria")], vec![enemy], 42);

        let mut last_health = encounter.enemies[0].health;
        for _ in 0..60 {
            if !encounter.enemies[0].is_alive() {
                break;
            }
            match encounter.current_combatant().map(|c| c.role) {
                Some(Role::Player) => {
                    let report = encounter
                        .player_action(0, PlayerAction::Attack { target: 0 })
                        .unwrap();
                    assert!(report.message.contains("You attack the Goblin"));
                    assert!(encounter.enemies[0].health < last_health);
                    last_health = encounter.enemies[0].health;
                }
                _ => {
                    encounter.next_turn().unwrap();
                }
            }
        }

        assert_eq!(encounter.enemies[0].health, 0);
        assert_eq!(encounter.players[0].experience, 35);
        assert_eq!(encounter.players[0].gold, 50 + 8);
        assert!(encounter.check_end());

        let summary = encounter.end();
        assert_eq!(summary.outcome, EncounterOutcome::Victory);
        assert_eq!(encounter.end().outcome, EncounterOutcome::AlreadyEnded);
    }

    #[test]
    fn corpse_attacks_grant_no_second_reward() {
        let rat = EnemyState::builder("Rat", 1).max_health(1).build();
        let mut encounter = started(vec![fast_player("Aria")], vec![rat, punching_bag("Ogre")], 5);

        let report = encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        assert!(report.message.contains("You defeated the Rat!"));
        let gold_after_kill = encounter.players[0].gold;
        assert_eq!(gold_after_kill, 50 + 8);

        // The dead rat's slot is skipped, not resolved.
        let messages = run_enemy_turns(&mut encounter);
        assert!(messages.iter().any(|m| m.contains("already defeated")));

        let report = encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        assert!(!report.message.contains("You defeated"));
        assert_eq!(encounter.players[0].gold, gold_after_kill);
        assert_eq!(encounter.players[0].experience, 35);
    }

    #[test]
    fn flee_succeeds_at_extreme_level_advantage() {
        let mut veteran = fast_player("Aria");
        veteran.level = 100;
        let mut encounter = started(
            vec![veteran],
            vec![EnemyState::builder("Goblin", 1).build()],
            3,
        );

        let report = encounter.player_action(0, PlayerAction::Flee).unwrap();
        assert!(report.combat_over);
        assert!(report.message.contains("You successfully fled from combat!"));
        assert!(!encounter.is_active());
        // The escape does not burn a turn-order slot.
        assert_eq!(encounter.turn.current_turn, 0);
        assert_eq!(encounter.end().outcome, EncounterOutcome::AlreadyEnded);
    }

    #[test]
    fn failed_flee_consumes_the_turn() {
        let mut encounter = started(
            vec![fast_player("Aria")],
            vec![EnemyState::builder("Ancient Dragon", 100).build()],
            3,
        );

        let report = encounter.player_action(0, PlayerAction::Flee).unwrap();
        assert!(report.message.contains("You tried to flee but couldn't escape!"));
        assert!(encounter.is_active());
        assert_eq!(encounter.turn.current_turn, 1);
    }

    #[test]
    fn invalid_target_consumes_the_turn() {
        let mut encounter = started(vec![fast_player("Aria")], vec![punching_bag("Ogre")], 8);

        let report = encounter
            .player_action(0, PlayerAction::Attack { target: 5 })
            .unwrap();
        assert!(report.message.contains("Invalid target."));
        assert_eq!(encounter.enemies[0].health, 500);
        assert_eq!(encounter.turn.current_turn, 1);
    }

    #[test]
    fn unknown_skill_and_low_mana_consume_the_turn() {
        let mut player = fast_player("Aria");
        player.learn_skill(
            "Fireball",
            Skill {
                mana_cost: 60,
                damage_multiplier: 1.5,
            },
        );
        let mut encounter = started(vec![player], vec![punching_bag("Ogre")], 8);

        let report = encounter
            .player_action(
                0,
                PlayerAction::Skill {
                    skill: "Icebolt".to_string(),
                    target: 0,
                },
            )
            .unwrap();
        assert!(report.message.contains("You don't have the skill Icebolt."));
        assert_eq!(encounter.turn.current_turn, 1);

        run_enemy_turns(&mut encounter);

        // Costs 60 against a pool of 50; nothing is deducted.
        let report = encounter
            .player_action(
                0,
                PlayerAction::Skill {
                    skill: "Fireball".to_string(),
                    target: 0,
                },
            )
            .unwrap();
        assert!(
            report
                .message
                .contains("You don't have enough mana to use Fireball.")
        );
        assert_eq!(encounter.players[0].mana, 50);
        assert_eq!(encounter.enemies[0].health, 500);
    }

    #[test]
    fn skill_deducts_mana_and_applies_multiplier() {
        let mut player = fast_player("Aria");
        player.learn_skill(
            "Power Strike",
            Skill {
                mana_cost: 10,
                damage_multiplier: 2.0,
            },
        );
        let mut encounter = started(vec![player], vec![punching_bag("Ogre")], 8);

        let report = encounter
            .player_action(
                0,
                PlayerAction::Skill {
                    skill: "Power Strike".to_string(),
                    target: 0,
                },
            )
            .unwrap();

        // raw 10 * 2.0 = 20 against defense 3: 2000 / 103 = 19.
        assert!(report.message.contains("You use Power Strike on the Ogre for 19 damage!"));
        assert_eq!(encounter.players[0].mana, 40);
        assert_eq!(encounter.enemies[0].health, 500 - 19);
    }

    #[test]
    fn next_turn_passes_a_living_player() {
        let mut encounter = started(vec![fast_player("Aria")], vec![punching_bag("Ogre")], 8);

        let report = encounter.next_turn().unwrap();
        assert!(report.message.contains("hesitates and the turn passes"));
        assert_eq!(encounter.turn.current_turn, 1);
    }

    #[test]
    fn round_advances_once_per_full_pass() {
        let mut encounter = started(vec![fast_player("Aria")], vec![punching_bag("Ogre")], 8);
        assert_eq!(encounter.round(), 1);

        encounter.player_action(0, PlayerAction::UseItem).unwrap();
        let messages = run_enemy_turns(&mut encounter);

        assert_eq!(encounter.round(), 2);
        assert!(messages.iter().any(|m| m.contains("Round 2 begins!")));
    }

    #[test]
    fn victory_is_reported_when_all_enemies_fall() {
        let enemies = vec![
            EnemyState::builder("Rat", 1).max_health(1).build(),
            EnemyState::builder("Bat", 1).max_health(1).build(),
        ];
        let mut encounter = started(vec![fast_player("Aria")], enemies, 13);

        encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        run_enemy_turns(&mut encounter);
        encounter
            .player_action(0, PlayerAction::Attack { target: 1 })
            .unwrap();

        let report = encounter.next_turn().unwrap();
        assert!(report.combat_over);
        assert!(
            report
                .message
                .contains("Combat has ended.\nVictory! All enemies have been defeated.")
        );
        assert!(!encounter.is_active());
    }

    #[test]
    fn defeat_is_reported_when_all_players_fall() {
        let titan = EnemyState::builder("Titan", 1)
            .max_health(500)
            .attack(10_000)
            .build();
        let mut encounter = started(vec![fast_player("Aria")], vec![titan], 13);

        encounter.player_action(0, PlayerAction::UseItem).unwrap();
        let report = encounter.next_turn().unwrap();
        assert!(report.message.contains("Aria has been defeated!"));
        assert!(report.combat_over);
        assert_eq!(encounter.players[0].health, 0);

        let report = encounter.next_turn().unwrap();
        assert!(report.combat_over);
        assert!(
            report
                .message
                .contains("Combat has ended.\nDefeat! All players have been defeated.")
        );
    }

    #[test]
    fn enforced_stun_costs_the_player_a_turn() {
        let witch = EnemyState::builder("Witch", 1)
            .max_health(500)
            .ability("Hex", AbilityKind::Stun, 0.0, 0.25)
            .build();
        let mut config = CombatConfig::new();
        config.ability_chance = 1.0;

        let mut encounter =
            Encounter::with_config(vec![fast_player("Aria")], vec![witch], 21, config);
        encounter.start().unwrap();

        encounter.player_action(0, PlayerAction::UseItem).unwrap();
        let messages = run_enemy_turns(&mut encounter);
        assert!(messages.iter().any(|m| m.contains("Aria is stunned")));
        assert!(encounter.players[0].status_effects.is_stunned());

        let report = encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        assert!(report.message.contains("You are stunned and lose your turn!"));
        assert_eq!(encounter.enemies[0].health, 500);
        assert!(!encounter.players[0].status_effects.is_stunned());
    }

    #[test]
    fn cosmetic_stun_leaves_the_player_acting() {
        let witch = EnemyState::builder("Witch", 1)
            .max_health(500)
            .ability("Hex", AbilityKind::Stun, 0.0, 0.25)
            .build();
        let mut config = CombatConfig::cosmetic_stun();
        config.ability_chance = 1.0;

        let mut encounter =
            Encounter::with_config(vec![fast_player("Aria")], vec![witch], 21, config);
        encounter.start().unwrap();

        encounter.player_action(0, PlayerAction::UseItem).unwrap();
        let messages = run_enemy_turns(&mut encounter);
        assert!(messages.iter().any(|m| m.contains("is stunned")));
        assert!(!encounter.players[0].status_effects.is_stunned());

        let report = encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        assert!(report.message.contains("You attack the Witch"));
        assert!(encounter.enemies[0].health < 500);
    }

    #[test]
    fn ability_gate_zero_always_uses_basic_attacks() {
        let mage = EnemyState::builder("Mage", 1)
            .max_health(500)
            .ability("Annihilate", AbilityKind::Damage, 100.0, 0.9)
            .build();
        let mut config = CombatConfig::new();
        config.ability_chance = 0.0;

        let mut encounter =
            Encounter::with_config(vec![fast_player("Aria")], vec![mage], 17, config);
        encounter.start().unwrap();

        for _ in 0..5 {
            encounter.player_action(0, PlayerAction::UseItem).unwrap();
            let messages = run_enemy_turns(&mut encounter);
            assert!(messages.iter().all(|m| !m.contains("uses Annihilate")));
        }
        assert!(encounter.players[0].is_alive());
    }

    #[test]
    fn ability_gate_one_always_uses_abilities() {
        let troll = EnemyState::builder("Troll", 1)
            .max_health(500)
            .ability("Regenerate", AbilityKind::Heal, 0.1, 0.5)
            .build();
        let mut config = CombatConfig::new();
        config.ability_chance = 1.0;

        let mut encounter =
            Encounter::with_config(vec![fast_player("Aria")], vec![troll], 17, config);
        encounter.start().unwrap();

        encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        assert!(encounter.enemies[0].health < 500);

        let messages = run_enemy_turns(&mut encounter);
        assert!(
            messages
                .iter()
                .any(|m| m.contains("uses Regenerate and heals for"))
        );
        assert_eq!(encounter.enemies[0].health, 500);
    }

    #[test]
    fn big_reward_levels_the_player_up() {
        let dummy = EnemyState::builder("Training Dummy", 1)
            .max_health(1)
            .experience_reward(150)
            .build();
        let mut encounter = started(vec![fast_player("Aria")], vec![dummy], 2);

        let report = encounter
            .player_action(0, PlayerAction::Attack { target: 0 })
            .unwrap();
        assert!(
            report
                .message
                .contains("Congratulations! You leveled up to level 2!")
        );
        assert_eq!(encounter.players[0].level, 2);
        assert_eq!(encounter.players[0].health, encounter.players[0].max_health);
        assert_eq!(encounter.players[0].max_health, 110);
    }

    #[test]
    fn same_seed_replays_the_same_fight() {
        let build = || {
            started(
                vec![fast_player("Aria")],
                vec![EnemyState::builder("Goblin", 2).build()],
                99,
            )
        };
        let mut first = build();
        let mut second = build();

        for _ in 0..6 {
            if !first.is_active() {
                break;
            }
            match first.current_combatant().map(|c| c.role) {
                Some(Role::Player) => {
                    let a = first
                        .player_action(0, PlayerAction::Attack { target: 0 })
                        .unwrap();
                    let b = second
                        .player_action(0, PlayerAction::Attack { target: 0 })
                        .unwrap();
                    assert_eq!(a.message, b.message);
                }
                _ => {
                    let a = first.next_turn().unwrap();
                    let b = second.next_turn().unwrap();
                    assert_eq!(a.message, b.message);
                }
            }
        }

        assert_eq!(first.players[0], second.players[0]);
        assert_eq!(first.enemies[0], second.enemies[0]);
    }
}
