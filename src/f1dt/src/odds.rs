//! Odds tables and draw resolution
//!
//! All tables are cumulative weight thresholds in units of 1/100_000
//! ([`DRAW_SCALE`]). A raw `u64` draw is reduced into `[0, DRAW_SCALE)` and
//! the first threshold exceeding it wins. Tables are fixed at compile time
//! and shared read-only.

use crate::reference::{CrateTier, ItemType, Rarity, SubType};

/// Resolution of every odds table: weights are expressed in units of
/// 1/100_000, so a weight of 21_000 means 21%.
pub const DRAW_SCALE: u64 = 100_000;

// Per-tier cumulative rarity thresholds. Apex keeps an explicit zero-weight
// first row: it can never be drawn in-band, only minted through the
// out-of-band elite mechanism.
const LEGENDARY_CRATE_RARITY: &[(Rarity, u64)] = &[
    (Rarity::Apex, 0),
    (Rarity::Legendary, 21_000),
    (Rarity::Epic, 25_500),
    (Rarity::Rare, 52_000),
    (Rarity::Common, 100_000),
];

const EPIC_CRATE_RARITY: &[(Rarity, u64)] = &[
    (Rarity::Apex, 0),
    (Rarity::Legendary, 2_500),
    (Rarity::Epic, 23_500),
    (Rarity::Rare, 52_000),
    (Rarity::Common, 100_000),
];

const RARE_CRATE_RARITY: &[(Rarity, u64)] = &[
    (Rarity::Apex, 0),
    (Rarity::Legendary, 1_000),
    (Rarity::Epic, 3_500),
    (Rarity::Rare, 36_000),
    (Rarity::Common, 100_000),
];

const COMMON_CRATE_RARITY: &[(Rarity, u64)] = &[
    (Rarity::Apex, 0),
    (Rarity::Legendary, 500),
    (Rarity::Epic, 1_000),
    (Rarity::Rare, 25_000),
    (Rarity::Common, 100_000),
];

// Item type thresholds, identical for every crate tier.
const ITEM_TYPE_TABLE: &[(ItemType, u64)] = &[
    (ItemType::Car, 10_000),
    (ItemType::Driver, 20_000),
    (ItemType::Gear, 58_000),
    (ItemType::Part, 96_000),
    (ItemType::Tyres, 100_000),
];

/// Cumulative rarity threshold table for a crate tier
pub fn rarity_table(tier: CrateTier) -> &'static [(Rarity, u64)] {
    match tier {
        CrateTier::Legendary => LEGENDARY_CRATE_RARITY,
        CrateTier::Epic => EPIC_CRATE_RARITY,
        CrateTier::Rare => RARE_CRATE_RARITY,
        CrateTier::Common => COMMON_CRATE_RARITY,
    }
}

/// Resolve a draw to a rarity using the tier's threshold table.
pub fn resolve_rarity(tier: CrateTier, draw: u64) -> Rarity {
    let r = draw % DRAW_SCALE;
    let table = rarity_table(tier);
    for &(rarity, threshold) in table {
        if r < threshold {
            return rarity;
        }
    }
    // Every table ends at DRAW_SCALE and r < DRAW_SCALE, so the loop always
    // returns; the final row is the fallback.
    table[table.len() - 1].0
}

/// Resolve a draw to an item type.
pub fn resolve_item_type(draw: u64) -> ItemType {
    let r = draw % DRAW_SCALE;
    for &(item_type, threshold) in ITEM_TYPE_TABLE {
        if r < threshold {
            return item_type;
        }
    }
    ITEM_TYPE_TABLE[ITEM_TYPE_TABLE.len() - 1].0
}

/// Resolve a draw to a subtype, uniform over the type's subtype set.
/// Types without subtypes resolve to [`SubType::None`] without consuming
/// anything from the draw.
pub fn resolve_subtype(item_type: ItemType, draw: u64) -> SubType {
    let set = item_type.subtypes();
    if set.is_empty() {
        return SubType::None;
    }
    set[(draw % set.len() as u64) as usize]
}

/// In-band weight of a rarity within a tier, in [`DRAW_SCALE`] units.
pub fn rarity_weight(tier: CrateTier, rarity: Rarity) -> u64 {
    let mut previous = 0;
    for &(row, threshold) in rarity_table(tier) {
        if row == rarity {
            return threshold - previous;
        }
        previous = threshold;
    }
    0
}

/// Weight of an item type, in [`DRAW_SCALE`] units.
pub fn item_type_weight(item_type: ItemType) -> u64 {
    let mut previous = 0;
    for &(row, threshold) in ITEM_TYPE_TABLE {
        if row == item_type {
            return threshold - previous;
        }
        previous = threshold;
    }
    0
}
