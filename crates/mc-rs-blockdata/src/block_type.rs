//! Shared per-type block properties.

use std::fmt;

use crate::catalog::catalog;
use crate::layout::Layout;
use crate::registry::VariantRegistry;
use crate::variant::Variant;

/// Properties shared by every variant of one block type.
#[derive(Debug)]
pub struct BlockType {
    /// Legacy numeric block id.
    pub id: u8,
    /// Enum-style name, e.g. `"GOLDEN_RAIL"`.
    pub name: &'static str,
    /// Namespaced identifier, e.g. `"minecraft:golden_rail"`.
    pub namespaced_id: &'static str,
    /// Human-readable name, e.g. `"Powered Rail"`.
    pub display_name: &'static str,
    /// Mining hardness. `-1.0` = unbreakable, `0.0` = instant break.
    pub hardness: f32,
    pub blast_resistance: f32,
    pub layout: Layout,
}

impl BlockType {
    pub const fn new(
        id: u8,
        name: &'static str,
        namespaced_id: &'static str,
        display_name: &'static str,
        hardness: f32,
        blast_resistance: f32,
        layout: Layout,
    ) -> Self {
        Self {
            id,
            name,
            namespaced_id,
            display_name,
            hardness,
            blast_resistance,
            layout,
        }
    }

    pub fn is_unbreakable(&self) -> bool {
        self.hardness < 0.0
    }

    /// The catalog registry of this type. `None` for types outside the
    /// built-in table.
    pub fn registry(&self) -> Option<&'static VariantRegistry> {
        catalog()
            .registry(self.id)
            .filter(|r| r.block().namespaced_id == self.namespaced_id)
    }

    /// All variants, ascending by data value.
    pub fn variants(&self) -> &'static [Variant] {
        self.registry().map(|r| r.types()).unwrap_or(&[])
    }

    pub fn by_data(&self, data: u8) -> Option<&'static Variant> {
        self.registry()?.by_data(data)
    }

    pub fn by_name(&self, name: &str) -> Option<&'static Variant> {
        self.registry()?.by_name(name)
    }

    /// The variant with the lowest data value.
    pub fn default_variant(&self) -> Option<&'static Variant> {
        self.variants().first()
    }
}

impl PartialEq for BlockType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.namespaced_id == other.namespaced_id
    }
}

impl Eq for BlockType {}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.namespaced_id, self.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::blocks;
    use crate::catalog::catalog;

    #[test]
    fn unbreakable_blocks() {
        let bedrock = catalog().block(blocks::BEDROCK).unwrap();
        assert!(bedrock.is_unbreakable());
        let stone = catalog().block(blocks::STONE).unwrap();
        assert!(!stone.is_unbreakable());
    }

    #[test]
    fn default_variant_has_lowest_data() {
        let wool = catalog().block(blocks::WOOL).unwrap();
        let default = wool.default_variant().unwrap();
        assert_eq!(default.data(), 0);
        assert_eq!(default.name(), "WHITE");
    }

    #[test]
    fn variants_through_block_type() {
        let rail = catalog().block(blocks::RAIL).unwrap();
        assert_eq!(rail.variants().len(), 10);
        assert_eq!(rail.by_data(9).unwrap().name(), "CURVED_NORTH_EAST");
        assert_eq!(rail.by_name("curved_north_east").unwrap().data(), 9);
        assert!(rail.by_data(10).is_none());
    }

    #[test]
    fn display_shows_namespaced_id() {
        let stone = catalog().block(blocks::STONE).unwrap();
        assert_eq!(stone.to_string(), "minecraft:stone (1)");
    }
}
