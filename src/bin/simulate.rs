//! Campaign balance simulator CLI.
//!
//! Runs headless Monte Carlo campaigns under a fixed input policy.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 100 attack-only runs
//!   cargo run --bin simulate -- -n 1000 -p defend  # 1000 defend/attack runs
//!   cargo run --bin simulate -- --seed 42          # Reproducible batch

use std::env;
use std::io;

use gauntlet::simulator::{run_simulation, Policy, SimConfig};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Usage: simulate [-n RUNS] [--seed SEED] [-p attack|multi|defend|counter]");
            std::process::exit(1);
        }
    };

    println!("Gauntlet campaign simulator");
    println!("  Runs:   {}", config.runs);
    println!("  Policy: {}", config.policy.name());
    if let Some(seed) = config.seed {
        println!("  Seed:   {}", seed);
    }
    println!();

    let report = run_simulation(&config)?;
    println!("{}", report.to_text());
    Ok(())
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                let value = args.get(i + 1).ok_or("missing value for --runs")?;
                config.runs = value
                    .parse()
                    .map_err(|_| format!("invalid run count: {value}"))?;
                i += 2;
            }
            "--seed" => {
                let value = args.get(i + 1).ok_or("missing value for --seed")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {value}"))?,
                );
                i += 2;
            }
            "-p" | "--policy" => {
                let value = args.get(i + 1).ok_or("missing value for --policy")?;
                config.policy =
                    Policy::parse(value).ok_or_else(|| format!("unknown policy: {value}"))?;
                i += 2;
            }
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(config)
}
