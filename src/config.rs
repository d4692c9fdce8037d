//! Command line configuration.
//!
//! Flags take priority, then `MORPION_*` environment variables, then defaults.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::morpion::BoardState;
use crate::search::DEPTH_BOUND;

#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(version, about = "Tic-tac-toe against an exhaustive minimax search", long_about = None)]
pub struct Config {
    /// Plies the search tree is built to
    #[arg(long, global = true, env = "MORPION_DEPTH", default_value_t = DEPTH_BOUND)]
    pub depth: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, env = "MORPION_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the console
    Play {
        /// Let the computer open the game as X
        #[arg(long)]
        computer_first: bool,
    },

    /// Round robin between the automated players
    Tourny {
        /// Games per pairing and mark
        #[arg(long, default_value_t = 4)]
        rounds: usize,
    },

    /// Show how the search sees a board, e.g. "XO./.X./..."
    Analyze { board: BoardState },
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 || self.depth > DEPTH_BOUND {
            bail!("depth must be between 1 and {}, got {}", DEPTH_BOUND, self.depth);
        }

        if let Command::Tourny { rounds: 0 } = self.command {
            bail!("a tournament needs at least one round");
        }

        Ok(())
    }
}
