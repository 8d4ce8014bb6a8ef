//! Headless Monte Carlo campaign simulator.
//!
//! Drives the real campaign and battle code with a fixed input policy in
//! place of the terminal, to sanity-check balance across many runs.

use std::io;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::campaign::{run_campaign_with, CampaignResult};
use crate::combat::logic::run_battle;
use crate::combat::types::{Line, Player, Tone};
use crate::core::constants::FINAL_STAGE;
use crate::ui::Console;

/// Fixed per-turn input policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    AlwaysAttack,
    AlwaysMultiAttack,
    DefendThenAttack,
    AlwaysCounter,
}

impl Policy {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "attack" => Some(Policy::AlwaysAttack),
            "multi" => Some(Policy::AlwaysMultiAttack),
            "defend" => Some(Policy::DefendThenAttack),
            "counter" => Some(Policy::AlwaysCounter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::AlwaysAttack => "attack",
            Policy::AlwaysMultiAttack => "multi",
            Policy::DefendThenAttack => "defend",
            Policy::AlwaysCounter => "counter",
        }
    }

    fn choice(&self, turn: u64) -> &'static str {
        match self {
            Policy::AlwaysAttack => "1",
            Policy::AlwaysMultiAttack => "2",
            Policy::DefendThenAttack => {
                if turn % 2 == 0 {
                    "3"
                } else {
                    "1"
                }
            }
            Policy::AlwaysCounter => "4",
        }
    }
}

/// A `Console` that answers the prompt from a policy and draws nothing.
pub struct PolicyConsole {
    policy: Policy,
    turn: u64,
}

impl PolicyConsole {
    pub fn new(policy: Policy) -> Self {
        Self { policy, turn: 0 }
    }
}

impl Console for PolicyConsole {
    fn render(&mut self, _lines: &[Line]) -> io::Result<()> {
        Ok(())
    }

    fn read_choice(&mut self) -> io::Result<String> {
        let choice = self.policy.choice(self.turn);
        self.turn += 1;
        Ok(choice.to_string())
    }

    fn announce(&mut self, _text: &str, _tone: Tone) -> io::Result<()> {
        Ok(())
    }
}

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of campaigns to run
    pub runs: u32,
    /// Base seed for reproducibility (None = random); run `i` uses seed + i
    pub seed: Option<u64>,
    /// Input policy answering every prompt
    pub policy: Policy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: None,
            policy: Policy::AlwaysAttack,
        }
    }
}

/// Aggregate results of a simulation batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReport {
    pub runs: u32,
    pub full_clears: u32,
    pub defeats: u32,
    /// Sum over runs of the highest stage fought
    pub total_stages_reached: u64,
    pub best_stage: u32,
}

impl SimReport {
    pub fn average_stage_reached(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_stages_reached as f64 / self.runs as f64
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Runs:        {}\n\
             Full clears: {}\n\
             Defeats:     {}\n\
             Avg stage:   {:.1}\n\
             Best stage:  {}",
            self.runs,
            self.full_clears,
            self.defeats,
            self.average_stage_reached(),
            self.best_stage,
        )
    }
}

/// Runs `config.runs` campaigns and aggregates the outcomes.
pub fn run_simulation(config: &SimConfig) -> io::Result<SimReport> {
    let mut report = SimReport {
        runs: config.runs,
        full_clears: 0,
        defeats: 0,
        total_stages_reached: 0,
        best_stage: 0,
    };

    for run_idx in 0..config.runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut console = PolicyConsole::new(config.policy);
        let mut player = Player::new();

        let result = run_campaign_with(&mut player, &mut console, &mut rng, run_battle)?;

        let stage_reached = match result {
            CampaignResult::FullClear => {
                report.full_clears += 1;
                FINAL_STAGE
            }
            CampaignResult::Defeated { stage } => {
                report.defeats += 1;
                stage
            }
        };
        report.total_stages_reached += stage_reached as u64;
        report.best_stage = report.best_stage.max(stage_reached);
    }

    Ok(report)
}
