//! Token serial encoding for generated crate items
//!
//! Every generated item is identified by a 128-bit packed serial.
//!
//! Layout (MSB-first, fixed widths):
//!
//! | field   | bits | content                         |
//! |---------|------|---------------------------------|
//! | version | 8    | layout version, currently 1     |
//! | type    | 8    | [`ItemType`] code               |
//! | subtype | 8    | [`SubType`] code, 0 = none      |
//! | rarity  | 8    | [`Rarity`] code                 |
//! | season  | 16   | season year                     |
//! | model   | 16   | team/model code                 |
//! | counter | 64   | global generation counter       |
//!
//! Encoding is lossless and invertible; the counter field alone makes two
//! distinct items compare unequal. Text form is 32 lowercase hex characters.

mod bitstream;

use std::fmt;
use std::str::FromStr;

use crate::reference::{
    item_type_by_code, rarity_by_code, subtype_by_code, team_by_code, ItemType, Rarity, SubType,
};
use bitstream::{BitReader, BitWriter, TOKEN_BYTES};

/// Current token layout version
pub const SERIAL_VERSION: u8 = 1;

/// Errors that can occur during token encoding or decoding
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SerialError {
    /// A field value does not fit its allotted bit width. Truncating would
    /// mint colliding identifiers, so this always fails the operation.
    #[error("field '{field}' value {value} exceeds its {bits}-bit width")]
    FieldOverflow {
        field: &'static str,
        value: u64,
        bits: usize,
    },

    #[error("token image exhausted while reading '{0}'")]
    TooShort(&'static str),

    #[error("unsupported token layout version: {0}")]
    UnsupportedVersion(u8),

    #[error("unknown {field} code: {code}")]
    UnknownCode { field: &'static str, code: u64 },

    #[error("subtype {subtype:?} does not belong to item type {item_type:?}")]
    SubTypeMismatch {
        item_type: ItemType,
        subtype: SubType,
    },

    #[error("invalid token text: {0}")]
    InvalidText(String),
}

/// The attribute set packed into a token identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFields {
    pub item_type: ItemType,
    pub subtype: SubType,
    pub rarity: Rarity,
    pub season: u16,
    pub model: u16,
    pub counter: u64,
}

/// A packed 128-bit token identifier.
///
/// The all-zero value is never a valid encoded token (version 0), which is
/// why `Default` is safe to use for placeholder slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u128);

fn write_field(
    writer: &mut BitWriter,
    field: &'static str,
    value: u64,
    bits: usize,
) -> Result<(), SerialError> {
    if writer.write_bits(value, bits) {
        Ok(())
    } else {
        Err(SerialError::FieldOverflow { field, value, bits })
    }
}

fn read_field(
    reader: &mut BitReader,
    field: &'static str,
    bits: usize,
) -> Result<u64, SerialError> {
    reader.read_bits(bits).ok_or(SerialError::TooShort(field))
}

impl TokenId {
    /// Pack an attribute set into a token identifier.
    pub fn encode(fields: &TokenFields) -> Result<TokenId, SerialError> {
        let mut writer = BitWriter::new();
        write_field(&mut writer, "version", u64::from(SERIAL_VERSION), 8)?;
        write_field(&mut writer, "type", u64::from(fields.item_type.code()), 8)?;
        write_field(&mut writer, "subtype", u64::from(fields.subtype.code()), 8)?;
        write_field(&mut writer, "rarity", u64::from(fields.rarity.code()), 8)?;
        write_field(&mut writer, "season", u64::from(fields.season), 16)?;
        write_field(&mut writer, "model", u64::from(fields.model), 16)?;
        write_field(&mut writer, "counter", fields.counter, 64)?;

        Ok(TokenId(u128::from_be_bytes(writer.finish())))
    }

    /// Unpack a token identifier back into its attribute set.
    ///
    /// Validates the layout version, every enumerated code, and that the
    /// subtype is legal for the item type.
    pub fn decode(self) -> Result<TokenFields, SerialError> {
        let mut reader = BitReader::new(self.0.to_be_bytes());

        let version = read_field(&mut reader, "version", 8)? as u8;
        if version != SERIAL_VERSION {
            return Err(SerialError::UnsupportedVersion(version));
        }

        let type_code = read_field(&mut reader, "type", 8)?;
        let item_type = item_type_by_code(type_code as u8).ok_or(SerialError::UnknownCode {
            field: "type",
            code: type_code,
        })?;

        let subtype_code = read_field(&mut reader, "subtype", 8)?;
        let subtype = subtype_by_code(subtype_code as u8).ok_or(SerialError::UnknownCode {
            field: "subtype",
            code: subtype_code,
        })?;
        if !subtype.belongs_to(item_type) {
            return Err(SerialError::SubTypeMismatch { item_type, subtype });
        }

        let rarity_code = read_field(&mut reader, "rarity", 8)?;
        let rarity = rarity_by_code(rarity_code as u8).ok_or(SerialError::UnknownCode {
            field: "rarity",
            code: rarity_code,
        })?;

        let season = read_field(&mut reader, "season", 16)? as u16;

        let model = read_field(&mut reader, "model", 16)? as u16;
        if team_by_code(model).is_none() {
            return Err(SerialError::UnknownCode {
                field: "model",
                code: u64::from(model),
            });
        }

        let counter = read_field(&mut reader, "counter", 64)?;

        Ok(TokenFields {
            item_type,
            subtype,
            rarity,
            season,
            model,
            counter,
        })
    }

    /// The generation counter field, without decoding the full attribute
    /// set. The counter occupies the low 64 bits of the layout.
    pub fn counter(self) -> u64 {
        self.0 as u64
    }

    /// Raw packed value
    pub fn raw(self) -> u128 {
        self.0
    }

    /// Reconstruct from a raw packed value (e.g. read back from storage).
    pub fn from_raw(raw: u128) -> TokenId {
        TokenId(raw)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0.to_be_bytes()))
    }
}

impl FromStr for TokenId {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| SerialError::InvalidText(e.to_string()))?;
        let image: [u8; TOKEN_BYTES] = bytes.try_into().map_err(|b: Vec<u8>| {
            SerialError::InvalidText(format!(
                "expected {} bytes, got {}",
                TOKEN_BYTES,
                b.len()
            ))
        })?;
        Ok(TokenId(u128::from_be_bytes(image)))
    }
}
