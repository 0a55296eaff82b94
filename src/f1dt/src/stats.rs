//! Aggregate distribution accounting
//!
//! Folds opened crates into per-rarity, per-type, and per-subtype counts so
//! large-sample runs can check the odds tables against their tolerance
//! bands. Used by the `simulate` CLI command and the acceptance tests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entropy::EntropySource;
use crate::generator::{ContentGenerator, CrateContents, GenerateError};
use crate::reference::{CrateTier, ItemType, Rarity, SubType};
use crate::serial::SerialError;

/// Item counts aggregated over a number of opened crates.
///
/// Maps are keyed by display name so the serialized form reads directly as
/// a report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DistributionSummary {
    pub crates: u64,
    pub items: u64,
    pub rarity: BTreeMap<&'static str, u64>,
    pub item_type: BTreeMap<&'static str, u64>,
    pub subtype: BTreeMap<&'static str, u64>,
}

impl DistributionSummary {
    /// Decode one crate's tokens into the counts.
    pub fn record(&mut self, contents: &CrateContents) -> Result<(), SerialError> {
        for token in &contents.tokens {
            let fields = token.decode()?;
            *self.rarity.entry(fields.rarity.name()).or_insert(0) += 1;
            *self.item_type.entry(fields.item_type.name()).or_insert(0) += 1;
            if fields.item_type.has_subtype() {
                *self.subtype.entry(fields.subtype.name()).or_insert(0) += 1;
            }
            self.items += 1;
        }
        self.crates += 1;
        Ok(())
    }

    /// Share of all items with this rarity, in percent.
    pub fn rarity_percent(&self, rarity: Rarity) -> f64 {
        self.percent_of_items(self.rarity.get(rarity.name()).copied().unwrap_or(0))
    }

    /// Share of all items with this type, in percent.
    pub fn type_percent(&self, item_type: ItemType) -> f64 {
        self.percent_of_items(self.item_type.get(item_type.name()).copied().unwrap_or(0))
    }

    /// Share of a subtype within its own item type's items, in percent.
    pub fn subtype_percent_within_type(&self, item_type: ItemType, subtype: SubType) -> f64 {
        let type_count = self.item_type.get(item_type.name()).copied().unwrap_or(0);
        if type_count == 0 {
            return 0.0;
        }
        let count = self.subtype.get(subtype.name()).copied().unwrap_or(0);
        count as f64 * 100.0 / type_count as f64
    }

    fn percent_of_items(&self, count: u64) -> f64 {
        if self.items == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.items as f64
    }
}

/// Open `crates` crates of one tier and fold the results into a summary.
pub fn sample_crates(
    generator: &ContentGenerator,
    tier: CrateTier,
    crates: u64,
    entropy: &mut dyn EntropySource,
) -> Result<DistributionSummary, GenerateError> {
    let mut summary = DistributionSummary::default();
    for _ in 0..crates {
        let contents = generator.open_crate(tier, entropy)?;
        summary.record(&contents)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::DigestEntropy;
    use crate::generator::GeneratorConfig;

    fn sampled(crates: u64, seed: u64) -> DistributionSummary {
        let generator = ContentGenerator::new(GeneratorConfig::default());
        let mut entropy = DigestEntropy::new(seed);
        sample_crates(&generator, CrateTier::Legendary, crates, &mut entropy).unwrap()
    }

    #[test]
    fn test_counts_add_up() {
        let summary = sampled(100, 11);
        assert_eq!(summary.crates, 100);
        assert_eq!(summary.items, 500);
        assert_eq!(summary.rarity.values().sum::<u64>(), 500);
        assert_eq!(summary.item_type.values().sum::<u64>(), 500);
        // Subtype counts only cover the types that carry one.
        let with_subtype: u64 = [ItemType::Gear, ItemType::Part, ItemType::Tyres]
            .iter()
            .map(|t| summary.item_type.get(t.name()).copied().unwrap_or(0))
            .sum();
        assert_eq!(summary.subtype.values().sum::<u64>(), with_subtype);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        use crate::reference::{ITEM_TYPES, RARITIES};

        let summary = sampled(200, 12);
        let rarity_total: f64 = RARITIES.iter().map(|&r| summary.rarity_percent(r)).sum();
        assert!((rarity_total - 100.0).abs() < 1e-9);
        let type_total: f64 = ITEM_TYPES.iter().map(|&t| summary.type_percent(t)).sum();
        assert!((type_total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_reports_zero() {
        let summary = DistributionSummary::default();
        assert_eq!(summary.rarity_percent(Rarity::Common), 0.0);
        assert_eq!(
            summary.subtype_percent_within_type(ItemType::Gear, SubType::Helmet),
            0.0
        );
    }

    #[test]
    fn test_summary_serializes_as_a_report() {
        let summary = sampled(10, 13);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["crates"], 10);
        assert_eq!(json["items"], 50);
        assert!(json["rarity"].is_object());
    }
}
