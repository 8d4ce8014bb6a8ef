//! Campaign loop: stages 1 through 100, one fresh monster per stage,
//! post-victory stat growth, game over on defeat.

use std::io;

use rand::Rng;

use crate::combat::logic::run_battle;
use crate::combat::types::{BattleOutcome, Monster, Player, Tone};
use crate::core::constants::FINAL_STAGE;
use crate::ui::Console;

/// How a campaign ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignResult {
    FullClear,
    Defeated { stage: u32 },
}

/// Runs a full campaign with a fresh player and the real battle resolver.
pub fn run_campaign<C: Console, R: Rng>(
    console: &mut C,
    rng: &mut R,
) -> io::Result<CampaignResult> {
    let mut player = Player::new();
    run_campaign_with(&mut player, console, rng, run_battle)
}

/// Campaign loop with the battle function injected, so tests and the
/// simulator can drive it with scripted resolvers.
///
/// Fleeing a stage still advances it; only defeat stops the campaign. Stat
/// growth runs after every survived stage, including stage 100.
pub fn run_campaign_with<C, R, F>(
    player: &mut Player,
    console: &mut C,
    rng: &mut R,
    mut battle: F,
) -> io::Result<CampaignResult>
where
    C: Console,
    R: Rng,
    F: FnMut(u32, &mut Player, &mut Monster, &mut C, &mut R) -> io::Result<BattleOutcome>,
{
    let mut stage = 1;
    while stage <= FINAL_STAGE {
        let mut monster = Monster::new(stage);
        battle(stage, player, &mut monster, console, rng)?;

        if player.hp <= 0 {
            console.announce("Game over!", Tone::Bad)?;
            return Ok(CampaignResult::Defeated { stage });
        }

        player.increase_stats(rng);
        // The next stage constructs a brand-new monster, so this only touches
        // one that is about to be dropped
        monster.increase_stats(stage, rng);
        stage += 1;
    }

    console.announce("Congratulations! You cleared every stage.", Tone::Good)?;
    Ok(CampaignResult::FullClear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::Line;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct RecordingConsole {
        announcements: Vec<String>,
    }

    impl RecordingConsole {
        fn new() -> Self {
            Self {
                announcements: Vec::new(),
            }
        }
    }

    impl Console for RecordingConsole {
        fn render(&mut self, _lines: &[Line]) -> io::Result<()> {
            Ok(())
        }

        fn read_choice(&mut self) -> io::Result<String> {
            Ok("1".to_string())
        }

        fn announce(&mut self, text: &str, _tone: Tone) -> io::Result<()> {
            self.announcements.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_full_clear_runs_exactly_one_hundred_stages() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut console = RecordingConsole::new();
        let mut player = Player::new();
        let mut stages_fought = Vec::new();

        let result = run_campaign_with(
            &mut player,
            &mut console,
            &mut rng,
            |stage, _player, monster, _console, _rng| {
                stages_fought.push(stage);
                monster.hp = 0;
                Ok(BattleOutcome::PlayerWon)
            },
        )
        .unwrap();

        assert_eq!(result, CampaignResult::FullClear);
        assert_eq!(stages_fought.len(), 100);
        assert_eq!(stages_fought.first(), Some(&1));
        assert_eq!(stages_fought.last(), Some(&100));
        // Growth runs after every stage, stage 100 included
        assert_eq!(player.stage_clear_count, 100);
        assert_eq!(player.max_hp(), 3100);
        assert!((10 + 5 * 100..=10 + 9 * 100).contains(&player.attack_power));
        assert!((5 + 3 * 100..=5 + 6 * 100).contains(&player.defense_power));
        assert!(player.hp <= player.max_hp());
        assert_eq!(
            console.announcements,
            vec!["Congratulations! You cleared every stage.".to_string()]
        );
    }

    #[test]
    fn test_monsters_are_rebuilt_from_the_stage_number() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut console = RecordingConsole::new();
        let mut player = Player::new();

        run_campaign_with(
            &mut player,
            &mut console,
            &mut rng,
            |stage, _player, monster, _console, _rng| {
                // Fresh construction each stage, untouched by the previous
                // stage's vestigial growth call
                assert_eq!(monster.hp, 50 + 10 * stage as i32);
                assert_eq!(monster.attack_power, 5 + stage as i32);
                monster.hp = 0;
                Ok(BattleOutcome::PlayerWon)
            },
        )
        .unwrap();
    }

    #[test]
    fn test_defeat_stops_the_campaign() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut console = RecordingConsole::new();
        let mut player = Player::new();

        let result = run_campaign_with(
            &mut player,
            &mut console,
            &mut rng,
            |stage, player, monster, _console, _rng| {
                if stage == 3 {
                    player.hp = -2;
                    Ok(BattleOutcome::PlayerLost)
                } else {
                    monster.hp = 0;
                    Ok(BattleOutcome::PlayerWon)
                }
            },
        )
        .unwrap();

        assert_eq!(result, CampaignResult::Defeated { stage: 3 });
        assert_eq!(player.stage_clear_count, 2);
        assert_eq!(console.announcements, vec!["Game over!".to_string()]);
    }

    #[test]
    fn test_fleeing_still_advances_the_stage() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut console = RecordingConsole::new();
        let mut player = Player::new();

        let result = run_campaign_with(
            &mut player,
            &mut console,
            &mut rng,
            |_stage, _player, _monster, _console, _rng| Ok(BattleOutcome::PlayerFled),
        )
        .unwrap();

        // A campaign of nothing but flight still walks all 100 stages
        assert_eq!(result, CampaignResult::FullClear);
        assert_eq!(player.stage_clear_count, 100);
    }
}
