mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            tier,
            count,
            seed,
            season,
            offset,
        } => {
            commands::open::handle(&tier, count, seed, season, offset)?;
        }

        Commands::Decode { tokens } => {
            commands::decode::handle(&tokens)?;
        }

        Commands::Odds { tier } => {
            commands::odds::handle(tier.as_deref())?;
        }

        Commands::Simulate {
            tier,
            crates,
            seed,
            json,
        } => {
            commands::simulate::handle(&tier, crates, seed, json)?;
        }

        Commands::Configure { season, show } => {
            commands::configure::handle(season, show)?;
        }
    }

    Ok(())
}
