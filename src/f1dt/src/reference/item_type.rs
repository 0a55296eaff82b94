//! Item type and subtype definitions

/// Category of a generated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Car,
    Driver,
    Gear,
    Part,
    Tyres,
}

/// All item types in wire-code order
pub const ITEM_TYPES: [ItemType; 5] = [
    ItemType::Car,
    ItemType::Driver,
    ItemType::Gear,
    ItemType::Part,
    ItemType::Tyres,
];

impl ItemType {
    /// Wire code for the token serial layout
    pub fn code(self) -> u8 {
        match self {
            ItemType::Car => 1,
            ItemType::Driver => 2,
            ItemType::Gear => 3,
            ItemType::Part => 4,
            ItemType::Tyres => 5,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ItemType::Car => "Car",
            ItemType::Driver => "Driver",
            ItemType::Gear => "Gear",
            ItemType::Part => "Part",
            ItemType::Tyres => "Tyres",
        }
    }

    /// Subtype set for this item type. Cars and drivers have none.
    pub fn subtypes(self) -> &'static [SubType] {
        match self {
            ItemType::Car | ItemType::Driver => &[],
            ItemType::Gear => GEAR_SUBTYPES,
            ItemType::Part => PART_SUBTYPES,
            ItemType::Tyres => TYRE_SUBTYPES,
        }
    }

    /// Whether items of this type carry a subtype
    pub fn has_subtype(self) -> bool {
        !self.subtypes().is_empty()
    }
}

/// Item subtype. Codes share one namespace across all item types so a
/// subtype code alone is unambiguous; `None` (code 0) marks types without
/// subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubType {
    None,
    // Gear
    Helmet,
    Suit,
    Gloves,
    Boots,
    // Part
    FrontWing,
    RearWing,
    Engine,
    Brakes,
    Suspension,
    Gearbox,
    // Tyres
    Wet,
    Intermediate,
    Soft,
    Medium,
    Hard,
}

const GEAR_SUBTYPES: &[SubType] = &[
    SubType::Helmet,
    SubType::Suit,
    SubType::Gloves,
    SubType::Boots,
];

const PART_SUBTYPES: &[SubType] = &[
    SubType::FrontWing,
    SubType::RearWing,
    SubType::Engine,
    SubType::Brakes,
    SubType::Suspension,
    SubType::Gearbox,
];

const TYRE_SUBTYPES: &[SubType] = &[
    SubType::Wet,
    SubType::Intermediate,
    SubType::Soft,
    SubType::Medium,
    SubType::Hard,
];

impl SubType {
    /// Wire code for the token serial layout
    pub fn code(self) -> u8 {
        match self {
            SubType::None => 0,
            SubType::Helmet => 1,
            SubType::Suit => 2,
            SubType::Gloves => 3,
            SubType::Boots => 4,
            SubType::FrontWing => 5,
            SubType::RearWing => 6,
            SubType::Engine => 7,
            SubType::Brakes => 8,
            SubType::Suspension => 9,
            SubType::Gearbox => 10,
            SubType::Wet => 11,
            SubType::Intermediate => 12,
            SubType::Soft => 13,
            SubType::Medium => 14,
            SubType::Hard => 15,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            SubType::None => "-",
            SubType::Helmet => "Helmet",
            SubType::Suit => "Suit",
            SubType::Gloves => "Gloves",
            SubType::Boots => "Boots",
            SubType::FrontWing => "Front Wing",
            SubType::RearWing => "Rear Wing",
            SubType::Engine => "Engine",
            SubType::Brakes => "Brakes",
            SubType::Suspension => "Suspension",
            SubType::Gearbox => "Gearbox",
            SubType::Wet => "Wet",
            SubType::Intermediate => "Intermediate",
            SubType::Soft => "Soft",
            SubType::Medium => "Medium",
            SubType::Hard => "Hard",
        }
    }

    /// The item type this subtype belongs to, or `None` for `SubType::None`
    pub fn item_type(self) -> Option<ItemType> {
        match self {
            SubType::None => None,
            s if GEAR_SUBTYPES.contains(&s) => Some(ItemType::Gear),
            s if PART_SUBTYPES.contains(&s) => Some(ItemType::Part),
            _ => Some(ItemType::Tyres),
        }
    }

    /// Whether this subtype is legal for the given item type
    pub fn belongs_to(self, item_type: ItemType) -> bool {
        match self {
            SubType::None => !item_type.has_subtype(),
            s => item_type.subtypes().contains(&s),
        }
    }
}

/// Get item type by wire code
pub fn item_type_by_code(code: u8) -> Option<ItemType> {
    ITEM_TYPES.iter().copied().find(|t| t.code() == code)
}

/// Get subtype by wire code
pub fn subtype_by_code(code: u8) -> Option<SubType> {
    if code == 0 {
        return Some(SubType::None);
    }
    GEAR_SUBTYPES
        .iter()
        .chain(PART_SUBTYPES)
        .chain(TYRE_SUBTYPES)
        .copied()
        .find(|s| s.code() == code)
}
