//! CLI argument definitions for f1dt
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "f1dt")]
#[command(about = "F1 Delta Time crate engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open crates and print the generated tokens
    #[command(visible_alias = "o")]
    Open {
        /// Crate tier, by name or code (legendary/epic/rare/common or 0-3)
        tier: String,

        /// Number of crates to open
        #[arg(short, long, default_value_t = 1)]
        count: u32,

        /// Entropy seed; a clock-derived seed is used if not provided
        #[arg(short, long)]
        seed: Option<u64>,

        /// Season stamped into tokens (uses configured default if not provided)
        #[arg(long)]
        season: Option<u16>,

        /// Initial generation counter value
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },

    /// Decode token identifiers back into their fields
    #[command(visible_alias = "d")]
    Decode {
        /// Token identifier(s), 32 hex characters each
        tokens: Vec<String>,
    },

    /// Print the odds tables as percentages
    Odds {
        /// Limit output to one crate tier
        #[arg(short, long)]
        tier: Option<String>,
    },

    /// Open many crates and report the aggregate distribution
    #[command(visible_alias = "sim")]
    Simulate {
        /// Crate tier, by name or code
        tier: String,

        /// Number of crates to sample
        #[arg(short, long, default_value_t = 2_000)]
        crates: u64,

        /// Entropy seed; a clock-derived seed is used if not provided
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the summary as JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default season
        #[arg(long)]
        season: Option<u16>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
