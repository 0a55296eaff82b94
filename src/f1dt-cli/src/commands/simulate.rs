//! Distribution simulation command handler

use anyhow::{Context, Result};
use f1dt::entropy::DigestEntropy;
use f1dt::generator::{ContentGenerator, GeneratorConfig};
use f1dt::reference::{ITEM_TYPES, RARITIES};
use f1dt::stats::sample_crates;

/// Handle the simulate command
pub fn handle(tier: &str, crates: u64, seed: Option<u64>, json: bool) -> Result<()> {
    let tier = super::parse_tier(tier)?;
    let seed = seed.unwrap_or_else(super::seed_from_clock);

    let generator = ContentGenerator::new(GeneratorConfig::default());
    let mut entropy = DigestEntropy::new(seed);
    let summary =
        sample_crates(&generator, tier, crates, &mut entropy).context("Sampling failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} crates ({} items), seed {seed}\n",
        summary.crates,
        tier.name(),
        summary.items
    );

    println!("Rarity:");
    for &rarity in RARITIES.iter().rev() {
        println!(
            "  {:<11} {:>6.2}%",
            rarity.name(),
            summary.rarity_percent(rarity)
        );
    }

    println!("\nItem types:");
    for &item_type in &ITEM_TYPES {
        println!(
            "  {:<11} {:>6.2}%",
            item_type.name(),
            summary.type_percent(item_type)
        );
    }

    println!("\nSubtype splits (within type):");
    for &item_type in &ITEM_TYPES {
        for &subtype in item_type.subtypes() {
            println!(
                "  {:<7} {:<13} {:>6.2}%",
                item_type.name(),
                subtype.name(),
                summary.subtype_percent_within_type(item_type, subtype)
            );
        }
    }

    Ok(())
}
