//! Odds table display command handler

use anyhow::Result;
use f1dt::odds::{item_type_weight, rarity_weight, DRAW_SCALE};
use f1dt::reference::{CrateTier, CRATE_TIERS, ITEM_TYPES, RARITIES};

fn percent(weight: u64) -> f64 {
    weight as f64 * 100.0 / DRAW_SCALE as f64
}

/// Handle the odds command
pub fn handle(tier: Option<&str>) -> Result<()> {
    let tiers: Vec<CrateTier> = match tier {
        Some(t) => vec![super::parse_tier(t)?],
        None => CRATE_TIERS.to_vec(),
    };

    for tier in &tiers {
        println!("{} crate:", tier.name());
        for &rarity in RARITIES.iter().rev() {
            println!(
                "  {:<11} {:>6.2}%",
                rarity.name(),
                percent(rarity_weight(*tier, rarity))
            );
        }
        println!();
    }

    println!("Item types (all tiers):");
    for &item_type in &ITEM_TYPES {
        let subtypes = item_type.subtypes();
        let split = if subtypes.is_empty() {
            "-".to_string()
        } else {
            format!("uniform over {}", subtypes.len())
        };
        println!(
            "  {:<11} {:>6.2}%   subtypes: {}",
            item_type.name(),
            percent(item_type_weight(item_type)),
            split
        );
    }

    Ok(())
}
