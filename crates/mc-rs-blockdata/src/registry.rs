//! Per-block-type variant lookups.

use std::collections::BTreeMap;
use std::collections::HashMap;

use tracing::warn;

use crate::block_type::BlockType;
use crate::state::Attributes;
use crate::variant::Variant;

/// Number of distinct 4-bit data values.
pub const DATA_VALUES: usize = 16;

/// Frozen by-data and by-name lookups of one block type.
#[derive(Debug)]
pub struct VariantRegistry {
    block: &'static BlockType,
    /// Ascending by data value.
    variants: Vec<Variant>,
    by_data: [Option<usize>; DATA_VALUES],
    by_name: HashMap<String, usize>,
}

impl VariantRegistry {
    pub fn block(&self) -> &'static BlockType {
        self.block
    }

    /// Variant with data value `data`, if registered.
    pub fn by_data(&self, data: u8) -> Option<&Variant> {
        let index = (*self.by_data.get(data as usize)?)?;
        self.variants.get(index)
    }

    /// Case-insensitive exact match on the variant name.
    pub fn by_name(&self, name: &str) -> Option<&Variant> {
        let index = *self.by_name.get(&name.to_ascii_uppercase())?;
        self.variants.get(index)
    }

    /// The variant carrying exactly `attrs`, if this type registers one.
    pub fn by_attributes(&self, attrs: &Attributes) -> Option<&Variant> {
        let data = self.block.layout.encode(attrs)?;
        let variant = self.by_data(data)?;
        (variant.attributes() == attrs).then_some(variant)
    }

    /// All registered variants, ascending by data value.
    pub fn types(&self) -> &[Variant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Collects variants for one block type before freezing them.
pub struct RegistryBuilder {
    block: &'static BlockType,
    variants: BTreeMap<u8, Variant>,
}

impl RegistryBuilder {
    pub fn new(block: &'static BlockType) -> Self {
        Self {
            block,
            variants: BTreeMap::new(),
        }
    }

    /// Insert `variant`, replacing any variant with the same data value.
    /// Variants whose data value does not fit in 4 bits are dropped.
    pub fn register(&mut self, variant: Variant) -> &mut Self {
        let data = variant.data();
        if usize::from(data) >= DATA_VALUES {
            warn!(
                block = self.block.name,
                data,
                variant = variant.name(),
                "data value out of range, variant skipped"
            );
            return self;
        }
        if let Some(old) = self.variants.insert(data, variant) {
            warn!(
                block = self.block.name,
                data,
                replaced = old.name(),
                "overwriting registered variant"
            );
        }
        self
    }

    pub fn build(self) -> VariantRegistry {
        let variants: Vec<Variant> = self.variants.into_values().collect();
        let mut by_data = [None; DATA_VALUES];
        let mut by_name = HashMap::with_capacity(variants.len());
        for (index, variant) in variants.iter().enumerate() {
            by_data[usize::from(variant.data())] = Some(index);
            if let Some(previous) = by_name.insert(variant.name().to_ascii_uppercase(), index) {
                warn!(
                    block = self.block.name,
                    name = variant.name(),
                    shadowed = variants[previous].data(),
                    "duplicate variant name"
                );
            }
        }
        VariantRegistry {
            block: self.block,
            variants,
            by_data,
            by_name,
        }
    }
}
