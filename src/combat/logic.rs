//! Battle resolver: runs one stage's fight to completion, interpreting the
//! player's choice each turn.

use std::io;

use rand::Rng;

use super::types::{Action, BattleLog, BattleOutcome, Monster, Player, Tone, TurnChances};
use crate::core::constants::*;
use crate::ui::{battle_frame, Console};

/// Rolls this turn's four chances. Each chance gets an independent increment
/// in `[STAGE_INCREMENT_MIN, STAGE_INCREMENT_MAX)` scaled by `stage - 1` and
/// capped at its ceiling. Recomputed at the top of every turn.
pub fn roll_turn_chances(stage: u32, rng: &mut impl Rng) -> TurnChances {
    let scale = (stage - 1) as f64;
    let mut roll = |(base, cap): (f64, f64)| {
        let increment = rng.gen_range(STAGE_INCREMENT_MIN..STAGE_INCREMENT_MAX);
        (base + increment * scale).min(cap)
    };
    TurnChances {
        attack: roll(ATTACK_CHANCE),
        multi_attack: roll(MULTI_ATTACK_DISPLAY_CHANCE),
        flee: roll(FLEE_CHANCE),
        counter: roll(COUNTER_CHANCE),
    }
}

/// The monster's damage response after a non-lethal player turn.
///
/// With `counter_success` the monster's own roll is reflected back onto it at
/// x1.5 and the player takes nothing. Otherwise the roll is mitigated by
/// `defense`: a full block also heals the player with a potion, a partial
/// block subtracts the mitigation, and zero defense means the full hit lands.
pub fn handle_monster_attack(
    player: &mut Player,
    monster: &mut Monster,
    log: &mut BattleLog,
    defense: i32,
    counter_success: bool,
    rng: &mut impl Rng,
) {
    if counter_success {
        let strike = monster.attack(rng);
        let reflected = (strike.damage as f64 * COUNTER_REFLECT_MULTIPLIER).floor() as i32;
        monster.hp -= reflected;
        log.push(
            format!("You turn the monster's blow back on it for {reflected} damage."),
            Tone::Guard,
        );
        return;
    }

    let strike = monster.attack(rng);
    if defense > 0 {
        if defense >= strike.damage {
            log.push(
                "You block the attack completely and drink a potion.",
                Tone::Guard,
            );
            player.hp = (player.hp + BLOCK_POTION_HEAL).min(player.max_hp());
            log.push(
                format!(
                    "The potion restores {BLOCK_POTION_HEAL} HP. Current HP: {}",
                    player.hp
                ),
                Tone::Good,
            );
        } else {
            log.push("You deflect part of the monster's attack.", Tone::Guard);
            let effective = strike.damage - defense;
            player.hp -= effective;
            log.push(
                format!("The monster hits you for {effective} damage."),
                Tone::Bad,
            );
        }
    } else {
        player.hp -= strike.damage;
        log.push(
            format!("The monster hits you for {} damage.", strike.damage),
            Tone::Bad,
        );
    }
}

/// Resolves one player turn. Returns the stage's outcome when the turn ends
/// it (kill or successful flee); the caller handles lethal damage to the
/// player afterwards.
///
/// `counter_success` is pre-rolled once per turn by the caller, whatever the
/// chosen action.
pub fn resolve_turn(
    action: Option<Action>,
    stage: u32,
    player: &mut Player,
    monster: &mut Monster,
    log: &mut BattleLog,
    chances: &TurnChances,
    counter_success: bool,
    rng: &mut impl Rng,
) -> Option<BattleOutcome> {
    match action {
        Some(Action::Attack) => {
            let outcome = player.attack(monster, stage, rng);
            let tag = if outcome.critical { " Critical!" } else { "" };
            log.push(
                format!("You strike the monster for {} damage.{tag}", outcome.damage),
                Tone::Good,
            );
            if !monster.is_alive() {
                return Some(record_kill(player, log));
            }
            handle_monster_attack(player, monster, log, 0, false, rng);
        }
        Some(Action::MultiAttack) => {
            let outcome = player.multi_attack(monster, stage, rng);
            log.push(
                format!(
                    "You attack {} times for {} total damage.",
                    outcome.num_attacks, outcome.total_damage
                ),
                Tone::Good,
            );
            if !monster.is_alive() {
                return Some(record_kill(player, log));
            }
            handle_monster_attack(player, monster, log, 0, false, rng);
        }
        Some(Action::Defend) => {
            let mitigation = player.defend(rng);
            log.push("You brace for the monster's attack.", Tone::Guard);
            handle_monster_attack(player, monster, log, mitigation, false, rng);
        }
        Some(Action::Counter) => {
            // The counter roll hits the monster in both branches; a failed
            // counter turns the same roll on the player as well.
            let outcome = player.counter_attack(monster, stage, rng);
            let tag = if outcome.critical { " Critical!" } else { "" };
            if counter_success {
                log.push(
                    format!(
                        "Your counter lands! The monster takes {} damage.{tag}",
                        outcome.damage
                    ),
                    Tone::Guard,
                );
            } else {
                log.push(
                    format!(
                        "Your counter fails. The monster hits you for {} damage.",
                        outcome.damage
                    ),
                    Tone::Bad,
                );
                player.hp -= outcome.damage;
            }
            if !monster.is_alive() {
                return Some(record_kill(player, log));
            }
        }
        Some(Action::Flee) => {
            if rng.gen_bool(chances.flee) {
                log.push("You flee the battle.", Tone::Event);
                return Some(BattleOutcome::PlayerFled);
            }
            log.push("You fail to escape.", Tone::Bad);
            handle_monster_attack(player, monster, log, 0, false, rng);
        }
        None => {
            // No retaliation: a bad choice costs the player nothing but the turn
            log.push("Invalid choice.", Tone::Bad);
        }
    }
    None
}

fn record_kill(player: &mut Player, log: &mut BattleLog) -> BattleOutcome {
    log.push("The monster has been slain!", Tone::Event);
    player.heal();
    BattleOutcome::PlayerWon
}

/// Runs one stage's battle to a terminal outcome. Every turn the full frame
/// (status, accumulated log, prompt) is redrawn before input is read, and a
/// final frame is drawn when the battle ends.
pub fn run_battle<C: Console, R: Rng>(
    stage: u32,
    player: &mut Player,
    monster: &mut Monster,
    console: &mut C,
    rng: &mut R,
) -> io::Result<BattleOutcome> {
    let mut log = BattleLog::new();
    loop {
        let chances = roll_turn_chances(stage, rng);
        console.render(&battle_frame(stage, player, monster, &log, &chances))?;
        let choice = console.read_choice()?;

        // Rolled every turn regardless of the chosen action
        let counter_success = rng.gen_bool(chances.counter);

        let mut outcome = resolve_turn(
            Action::from_input(&choice),
            stage,
            player,
            monster,
            &mut log,
            &chances,
            counter_success,
            rng,
        );

        if outcome.is_none() && player.hp <= 0 {
            if player.try_persist(stage, rng) {
                log.push(
                    format!("Your fighting spirit flares! HP restored to {}.", player.hp),
                    Tone::Event,
                );
            } else {
                log.push("You have been defeated.", Tone::Bad);
                outcome = Some(BattleOutcome::PlayerLost);
            }
        }

        if let Some(outcome) = outcome {
            console.render(&battle_frame(stage, player, monster, &log, &chances))?;
            return Ok(outcome);
        }
    }
}
