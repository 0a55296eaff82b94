//! Reference data for F1 Delta Time crate items
//!
//! Hardcoded reference data for game concepts: crate tiers, item rarities,
//! item types and their subtypes, and the team/model table. This data is
//! immutable after initialization and shared freely across readers.

pub mod item_type;
pub mod rarity;
pub mod team;
pub mod tier;

pub use item_type::{item_type_by_code, subtype_by_code, ItemType, SubType, ITEM_TYPES};
pub use rarity::{rarity_by_code, Rarity, RARITIES};
pub use team::{team_by_code, Team, TEAMS};
pub use tier::{CrateTier, CRATE_TIERS};
