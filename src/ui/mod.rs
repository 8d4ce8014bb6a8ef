//! Presentation port between the game logic and the terminal.
//!
//! Combat and campaign code only talk to the [`Console`] trait, so the math
//! stays pure and the tests and the simulator can run headless.

pub mod terminal;

pub use terminal::TerminalConsole;

use std::io;

use crate::combat::types::{BattleLog, Line, Monster, Player, Tone, TurnChances};

/// What the game needs from a display: redraw a full frame, block on one line
/// of input, and print a standalone message.
pub trait Console {
    /// Clears the screen and draws the given lines top to bottom.
    fn render(&mut self, lines: &[Line]) -> io::Result<()>;

    /// Blocks until the player enters one line of text; returns it without
    /// the trailing line terminator.
    fn read_choice(&mut self) -> io::Result<String>;

    /// Prints a single message outside the battle frame (game over,
    /// full clear).
    fn announce(&mut self, text: &str, tone: Tone) -> io::Result<()>;
}

/// Composes the full battle frame: status header, accumulated log, and the
/// action prompt with this turn's percentages.
pub fn battle_frame(
    stage: u32,
    player: &Player,
    monster: &Monster,
    log: &BattleLog,
    chances: &TurnChances,
) -> Vec<Line> {
    let mut lines = Vec::with_capacity(log.entries().len() + 6);

    lines.push(Line::new("=== Current Status ===", Tone::Heading));
    lines.push(Line::new(
        format!(
            "| Stage: {} | Player HP: {} | ATK: {} | DEF: {} | Monster HP: {} | ATK: {} |",
            stage, player.hp, player.attack_power, player.defense_power, monster.hp,
            monster.attack_power
        ),
        Tone::Stage,
    ));
    lines.push(Line::new("=====================", Tone::Heading));
    lines.push(Line::new("", Tone::Plain));

    lines.extend(log.entries().iter().cloned());
    if !log.is_empty() {
        lines.push(Line::new("", Tone::Plain));
    }

    lines.push(Line::new(
        format!(
            "1. Attack ({}%, double damage)  2. Multi-Attack ({}%, 1-3 hits)  \
             3. Defend & Recover (50%)  4. Counter ({}%, x1.5 reflect)  5. Flee ({}%)",
            percent(chances.attack),
            percent(chances.multi_attack),
            percent(chances.counter),
            percent(chances.flee),
        ),
        Tone::Prompt,
    ));

    lines
}

fn percent(chance: f64) -> u32 {
    (chance * 100.0).round() as u32
}
