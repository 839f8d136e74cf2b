//! The process-wide block catalog.
//!
//! Built once on first access from [`BLOCK_TYPES`] and immutable afterwards.
//! Every variant is a `&'static` singleton.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::block_type::BlockType;
use crate::blocks::BLOCK_TYPES;
use crate::error::MaterialError;
use crate::registry::{RegistryBuilder, VariantRegistry};
use crate::state::Attributes;
use crate::variant::Variant;

const NAMESPACE: &str = "minecraft:";

/// Registries for every built-in block type, indexed by legacy id.
pub struct Catalog {
    registries: Vec<VariantRegistry>,
    by_name: HashMap<String, u8>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The catalog, built on first call.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::build)
}

impl Catalog {
    fn build() -> Self {
        let mut registries = Vec::with_capacity(BLOCK_TYPES.len());
        let mut by_name = HashMap::with_capacity(BLOCK_TYPES.len());

        for block in BLOCK_TYPES {
            let mut builder = RegistryBuilder::new(block);
            for attrs in block.layout.states() {
                match block.layout.encode(&attrs) {
                    Some(data) => {
                        builder.register(Variant::new(block, data, attrs));
                    }
                    None => warn!(block = block.name, ?attrs, "layout cannot encode state"),
                }
            }
            registries.push(builder.build());
            by_name.insert(block.name.to_ascii_lowercase(), block.id);
        }

        let catalog = Self {
            registries,
            by_name,
        };
        debug!(
            blocks = catalog.registries.len(),
            variants = catalog.variant_count(),
            "block catalog built"
        );
        catalog
    }

    pub fn registry(&self, id: u8) -> Option<&VariantRegistry> {
        self.registries.get(id as usize)
    }

    pub fn block(&self, id: u8) -> Option<&'static BlockType> {
        self.registry(id).map(VariantRegistry::block)
    }

    /// Like [`Catalog::block`], for callers that treat a missing id as an
    /// error.
    pub fn try_block(&self, id: u8) -> Result<&'static BlockType, MaterialError> {
        self.block(id).ok_or(MaterialError::UnknownBlock(id))
    }

    /// Exact match on the namespaced id, e.g. `"minecraft:golden_rail"`.
    pub fn block_by_namespaced_id(&self, namespaced_id: &str) -> Option<&'static BlockType> {
        let block = self.block_by_name(namespaced_id.strip_prefix(NAMESPACE)?)?;
        (block.namespaced_id == namespaced_id).then_some(block)
    }

    /// Case-insensitive match on the enum-style name (`GOLDEN_RAIL`) or
    /// the namespaced id with or without its `minecraft:` prefix.
    pub fn block_by_name(&self, name: &str) -> Option<&'static BlockType> {
        let lower = name.to_ascii_lowercase();
        let key = lower.strip_prefix(NAMESPACE).unwrap_or(lower.as_str());
        self.block(*self.by_name.get(key)?)
    }

    pub fn variant(&self, id: u8, data: u8) -> Option<&Variant> {
        self.registry(id)?.by_data(data)
    }

    /// Resolve a legacy global state id, `(id << 4) | data`.
    pub fn variant_by_full_id(&self, full_id: u16) -> Option<&Variant> {
        let id = u8::try_from(full_id >> 4).ok()?;
        self.variant(id, (full_id & 0xF) as u8)
    }

    /// Resolve `block` by name, then `variant` by name within it.
    pub fn variant_by_name(&self, block: &str, variant: &str) -> Option<&Variant> {
        let block = self.block_by_name(block)?;
        self.registry(block.id)?.by_name(variant)
    }

    /// The registered variant of `id` carrying exactly `attrs`.
    pub fn lookup(&self, id: u8, attrs: &Attributes) -> Option<&Variant> {
        self.registry(id)?.by_attributes(attrs)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &'static BlockType> + '_ {
        self.registries.iter().map(VariantRegistry::block)
    }

    /// Every variant of every block, by id then data value.
    pub fn variants(&self) -> impl Iterator<Item = &Variant> + '_ {
        self.registries.iter().flat_map(|r| r.types())
    }

    pub fn variant_count(&self) -> usize {
        self.registries.iter().map(VariantRegistry::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::attribute::{BlockFace, Flag, RailShape, SubType};
    use crate::blocks;

    #[test]
    fn every_variant_resolves_by_data() {
        for variant in catalog().variants() {
            let found = catalog().variant(variant.id(), variant.data()).unwrap();
            assert_eq!(found, variant);
            assert_eq!(found.name(), variant.name());
        }
    }

    #[test]
    fn every_variant_resolves_by_name_in_any_case() {
        for variant in catalog().variants() {
            let registry = catalog().registry(variant.id()).unwrap();
            assert_eq!(registry.by_name(variant.name()), Some(variant));
            let lower = variant.name().to_ascii_lowercase();
            assert_eq!(registry.by_name(&lower), Some(variant));
        }
    }

    #[test]
    fn every_variant_resolves_by_full_id() {
        for variant in catalog().variants() {
            assert!(variant.data() < 16, "{variant}");
            let found = catalog().variant_by_full_id(variant.full_id());
            assert_eq!(found, Some(variant));
        }
        assert!(catalog().variant_by_full_id(u16::MAX).is_none());
    }

    #[test]
    fn types_have_no_duplicates() {
        for block in catalog().blocks() {
            let registry = catalog().registry(block.id).unwrap();
            let types = registry.types();
            let data: HashSet<u8> = types.iter().map(Variant::data).collect();
            let names: HashSet<&str> = types.iter().map(Variant::name).collect();
            assert_eq!(data.len(), types.len(), "{block}");
            assert_eq!(names.len(), types.len(), "{block}");
            assert_eq!(types.len(), block.layout.states().len(), "{block}");
            assert!(types.windows(2).all(|w| w[0].data() < w[1].data()));
        }
    }

    #[test]
    fn every_block_has_a_default_variant() {
        for block in catalog().blocks() {
            assert!(block.default_variant().is_some(), "{block}");
        }
        assert_eq!(catalog().blocks().count(), BLOCK_TYPES.len());
    }

    #[test]
    fn powered_rail_reference_values() {
        let registry = catalog().registry(blocks::GOLDEN_RAIL).unwrap();
        let flat = Attributes::EMPTY
            .with_kind(SubType::Rail(RailShape::FlatNorthSouth))
            .with_flag(Flag::Powered, false);
        let ascending = Attributes::EMPTY
            .with_kind(SubType::Rail(RailShape::AscendingEast))
            .with_flag(Flag::Powered, true);

        let flat = registry.by_attributes(&flat).unwrap();
        let ascending = registry.by_attributes(&ascending).unwrap();
        assert_eq!(flat.data(), 0x00);
        assert_eq!(ascending.data(), 0x0A);
        assert_eq!(registry.by_data(0x0A), Some(ascending));
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn block_names_resolve_in_every_form() {
        let rail = catalog().block(blocks::GOLDEN_RAIL).unwrap();
        let names = [
            "GOLDEN_RAIL",
            "golden_rail",
            "minecraft:golden_rail",
            "Minecraft:Golden_Rail",
        ];
        for name in names {
            assert_eq!(catalog().block_by_name(name), Some(rail), "{name}");
        }

        let by_id = |id| catalog().block_by_namespaced_id(id);
        assert_eq!(by_id("minecraft:golden_rail"), Some(rail));
        assert_eq!(by_id("golden_rail"), None);
        assert_eq!(by_id("MINECRAFT:GOLDEN_RAIL"), None);
        assert_eq!(catalog().block_by_name("powered_rail"), None);
    }

    #[test]
    fn variant_by_block_and_variant_name() {
        let chest = catalog().variant_by_name("chest", "north").unwrap();
        assert_eq!(chest.facing(), Some(BlockFace::North));
        assert_eq!(chest.data(), 2);
        assert!(catalog().variant_by_name("chest", "up").is_none());
        let missing = catalog().variant_by_name("no_such_block", "north");
        assert!(missing.is_none());
    }

    #[test]
    fn out_of_table_lookups_miss() {
        assert!(catalog().block(198).is_none());
        let err = catalog().try_block(198).unwrap_err();
        assert_eq!(err, MaterialError::UnknownBlock(198));
        assert_eq!(catalog().try_block(blocks::AIR).unwrap().name, "AIR");
        assert!(catalog().registry(255).is_none());
        assert!(catalog().variant(blocks::STONE, 7).is_none());
        assert!(catalog().variant(blocks::AIR, 1).is_none());
    }

    #[test]
    fn catalog_is_built_once() {
        assert!(std::ptr::eq(catalog(), catalog()));
        assert!(catalog().variant_count() > BLOCK_TYPES.len());
    }
}
