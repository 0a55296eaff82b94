//! Crate tier definitions

/// Crate tier: selects which odds table a crate opening uses.
///
/// Tier codes follow the original crate SKU numbering, best tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrateTier {
    Legendary,
    Epic,
    Rare,
    Common,
}

/// All crate tiers, best first
pub const CRATE_TIERS: [CrateTier; 4] = [
    CrateTier::Legendary,
    CrateTier::Epic,
    CrateTier::Rare,
    CrateTier::Common,
];

impl CrateTier {
    /// Tier selector code as used by callers (sale SKUs, CLI)
    pub fn code(self) -> u8 {
        match self {
            CrateTier::Legendary => 0,
            CrateTier::Epic => 1,
            CrateTier::Rare => 2,
            CrateTier::Common => 3,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            CrateTier::Legendary => "Legendary",
            CrateTier::Epic => "Epic",
            CrateTier::Rare => "Rare",
            CrateTier::Common => "Common",
        }
    }

    /// Parse a raw tier selector. Returns `None` for unknown codes; callers
    /// must reject those before any generation state is touched.
    pub fn from_code(code: u8) -> Option<CrateTier> {
        CRATE_TIERS.iter().copied().find(|t| t.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_codes_roundtrip() {
        for tier in CRATE_TIERS {
            assert_eq!(CrateTier::from_code(tier.code()), Some(tier));
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(CrateTier::from_code(4), None);
        assert_eq!(CrateTier::from_code(10), None);
        assert_eq!(CrateTier::from_code(255), None);
    }
}
