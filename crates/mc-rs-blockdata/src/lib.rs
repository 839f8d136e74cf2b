//! Legacy block catalog: block types, their variants and the 4-bit data
//! values that encode them.
//!
//! Every block type has a [`Layout`] naming its attribute set and data
//! value convention. The [`catalog`] enumerates each layout once at startup
//! and freezes the result into per-type [`VariantRegistry`] lookups.
//!
//! ```
//! use mc_rs_blockdata::attribute::RailShape;
//! use mc_rs_blockdata::getters;
//!
//! let rail = getters::powered_rail(RailShape::AscendingEast, true).unwrap();
//! assert_eq!(rail.data(), 0x0A);
//! assert_eq!(rail.name(), "ASCENDING_EAST_POWERED");
//! ```

pub mod attribute;
pub mod block_type;
pub mod blocks;
pub mod catalog;
pub mod error;
pub mod facing;
pub mod getters;
pub mod layout;
pub mod registry;
pub mod state;
pub mod variant;

pub use block_type::BlockType;
pub use catalog::{catalog, Catalog};
pub use error::MaterialError;
pub use layout::Layout;
pub use registry::{RegistryBuilder, VariantRegistry};
pub use state::Attributes;
pub use variant::Variant;
