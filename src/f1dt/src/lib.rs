//! # f1dt
//!
//! F1 Delta Time crate engine: given a crate tier and an entropy source,
//! produce five packed token identifiers whose aggregate rarity, type, and
//! subtype distributions match the published odds tables.
//!
//! This library provides:
//! - Cumulative odds tables per crate tier and the draw resolvers over them
//! - A lossless 128-bit token serial codec (encode and decode)
//! - The crate generator with its atomic, strictly monotonic counter
//! - An injectable entropy seam with a deterministic SHA-256 stream
//! - Distribution accounting for large-sample acceptance runs
//!
//! ## Example
//!
//! ```
//! use f1dt::entropy::DigestEntropy;
//! use f1dt::generator::{ContentGenerator, GeneratorConfig};
//! use f1dt::reference::CrateTier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ContentGenerator::new(GeneratorConfig::default());
//! let mut entropy = DigestEntropy::new(0xF1);
//!
//! let contents = generator.open_crate(CrateTier::Legendary, &mut entropy)?;
//! for token in contents.tokens {
//!     let fields = token.decode()?;
//!     println!("{token} {:?} {:?}", fields.rarity, fields.item_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod entropy;
pub mod generator;
pub mod odds;
pub mod reference;
pub mod serial;
pub mod stats;

// Re-export commonly used items
#[doc(inline)]
pub use entropy::{DigestEntropy, EntropyError, EntropySource};
#[doc(inline)]
pub use generator::{
    ContentGenerator, CrateContents, GenerateError, GeneratorConfig, CRATE_SIZE,
};
#[doc(inline)]
pub use reference::{CrateTier, ItemType, Rarity, SubType};
#[doc(inline)]
pub use serial::{SerialError, TokenFields, TokenId};
#[doc(inline)]
pub use stats::{sample_crates, DistributionSummary};
