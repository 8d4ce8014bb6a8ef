//! Gauntlet - Terminal Turn-Combat Stage Crawler
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod campaign;
pub mod combat;
pub mod core;
pub mod simulator;
pub mod ui;

pub use campaign::{run_campaign, CampaignResult};
pub use combat::types::{Monster, Player};
