//! Command handlers for the f1dt CLI

pub mod configure;
pub mod decode;
pub mod odds;
pub mod open;
pub mod simulate;

use anyhow::{bail, Result};
use f1dt::reference::{CrateTier, CRATE_TIERS};
use std::time::{SystemTime, UNIX_EPOCH};

/// Parse a tier argument: accepts a tier name (case-insensitive) or a raw
/// selector code.
pub fn parse_tier(input: &str) -> Result<CrateTier> {
    if let Ok(code) = input.parse::<u8>() {
        return match CrateTier::from_code(code) {
            Some(tier) => Ok(tier),
            None => bail!("unknown crate tier code: {code} (valid: 0-3)"),
        };
    }

    for tier in CRATE_TIERS {
        if tier.name().eq_ignore_ascii_case(input) {
            return Ok(tier);
        }
    }

    bail!("unknown crate tier: '{input}' (legendary, epic, rare, common, or 0-3)")
}

/// Clock-derived fallback seed for runs where reproducibility doesn't matter
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
