//! Rarity definitions

/// Per-item rarity classification.
///
/// Codes are the stable wire values used in the token serial layout.
/// Ascending code means ascending rarity: Common=1 up to Apex=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Apex,
}

/// All rarities in ascending order
pub const RARITIES: [Rarity; 5] = [
    Rarity::Common,
    Rarity::Rare,
    Rarity::Epic,
    Rarity::Legendary,
    Rarity::Apex,
];

impl Rarity {
    /// Wire code for the token serial layout
    pub fn code(self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Apex => 5,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Apex => "Apex",
        }
    }
}

/// Get rarity by wire code
pub fn rarity_by_code(code: u8) -> Option<Rarity> {
    RARITIES.iter().copied().find(|r| r.code() == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_lookup() {
        assert_eq!(rarity_by_code(1), Some(Rarity::Common));
        assert_eq!(rarity_by_code(5), Some(Rarity::Apex));
        assert_eq!(rarity_by_code(0), None);
        assert_eq!(rarity_by_code(6), None);
    }

    #[test]
    fn test_codes_are_distinct_and_ascending() {
        for pair in RARITIES.windows(2) {
            assert!(pair[0].code() < pair[1].code());
        }
    }

    #[test]
    fn test_rarity_ordering_matches_codes() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Legendary < Rarity::Apex);
    }
}
