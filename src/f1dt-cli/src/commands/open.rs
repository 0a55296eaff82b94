//! Crate opening command handler

use anyhow::{Context, Result};
use f1dt::entropy::DigestEntropy;
use f1dt::generator::{ContentGenerator, GeneratorConfig};
use f1dt::reference::team_by_code;

use crate::config::Config;

const FALLBACK_SEASON: u16 = 2020;

/// Handle the open command
pub fn handle(
    tier: &str,
    count: u32,
    seed: Option<u64>,
    season: Option<u16>,
    offset: u64,
) -> Result<()> {
    let tier = super::parse_tier(tier)?;
    let config = Config::load()?;
    let season = season
        .or(config.default_season)
        .unwrap_or(FALLBACK_SEASON);

    let seed = seed.unwrap_or_else(super::seed_from_clock);
    let generator = ContentGenerator::new(GeneratorConfig {
        season,
        counter_offset: offset,
    });
    let mut entropy = DigestEntropy::new(seed);

    println!("Opening {count} {} crate(s), seed {seed}\n", tier.name());
    println!(
        "{:<34} {:>7} {:<11} {:<11} {:<13} {}",
        "Token", "Counter", "Rarity", "Type", "SubType", "Team"
    );
    println!("{}", "-".repeat(90));

    for _ in 0..count {
        let contents = generator
            .open_crate(tier, &mut entropy)
            .context("Failed to open crate")?;

        for token in contents.tokens {
            let fields = token.decode().context("Generated token failed to decode")?;
            let team = team_by_code(fields.model).map_or("-", |t| t.name);
            println!(
                "{:<34} {:>7} {:<11} {:<11} {:<13} {}",
                token.to_string(),
                fields.counter,
                fields.rarity.name(),
                fields.item_type.name(),
                fields.subtype.name(),
                team
            );
        }
    }

    Ok(())
}
