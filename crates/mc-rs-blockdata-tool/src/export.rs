//! JSON export of the block catalog.

use std::collections::BTreeMap;
use std::path::Path;

use mc_rs_blockdata::{Attributes, Catalog, Variant};
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;

#[derive(Debug, Serialize)]
pub struct CatalogExport<'a> {
    pub block_count: usize,
    pub variant_count: usize,
    pub blocks: Vec<BlockExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BlockExport<'a> {
    pub id: u8,
    pub name: &'a str,
    pub namespaced_id: &'a str,
    pub display_name: &'a str,
    pub hardness: f32,
    pub blast_resistance: f32,
    pub variants: Vec<VariantExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct VariantExport<'a> {
    pub data: u8,
    pub full_id: u16,
    pub name: &'a str,
    /// Lower-case attribute name to value; absent attributes are omitted.
    pub attributes: BTreeMap<String, Value>,
}

impl<'a> CatalogExport<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let blocks: Vec<BlockExport<'a>> = catalog
            .blocks()
            .filter_map(|block| catalog.registry(block.id))
            .map(|registry| {
                let block = registry.block();
                BlockExport {
                    id: block.id,
                    name: block.name,
                    namespaced_id: block.namespaced_id,
                    display_name: block.display_name,
                    hardness: block.hardness,
                    blast_resistance: block.blast_resistance,
                    variants: registry.types().iter().map(VariantExport::new).collect(),
                }
            })
            .collect();
        Self {
            block_count: blocks.len(),
            variant_count: blocks.iter().map(|b| b.variants.len()).sum(),
            blocks,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ToolError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the export to `path`, returning the number of bytes written.
    pub fn write(&self, path: &Path, pretty: bool) -> Result<usize, ToolError> {
        let json = self.to_json(pretty)?;
        std::fs::write(path, &json).map_err(|source| ToolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(json.len())
    }
}

impl<'a> VariantExport<'a> {
    fn new(variant: &'a Variant) -> Self {
        Self {
            data: variant.data(),
            full_id: variant.full_id(),
            name: variant.name(),
            attributes: attribute_map(variant.attributes()),
        }
    }
}

fn attribute_map(attrs: &Attributes) -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();
    let mut put = |key: &str, value: Value| {
        map.insert(key.to_owned(), value);
    };
    if let Some(kind) = attrs.kind {
        put("kind", kind.as_str().into());
    }
    if let Some(wood) = attrs.wood {
        put("wood", wood.as_str().into());
    }
    if let Some(color) = attrs.color {
        put("color", color.as_str().into());
    }
    if let Some(half) = attrs.half {
        put("half", half.as_str().into());
    }
    if let Some(facing) = attrs.facing {
        put("facing", facing.as_str().into());
    }
    if let Some(axis) = attrs.axis {
        put("axis", axis.as_str().into());
    }
    if let Some(faces) = attrs.faces {
        put(
            "faces",
            faces.iter().map(|f| Value::from(f.as_str())).collect(),
        );
    }
    if let Some((counter, value)) = attrs.counter {
        put(&counter.as_str().to_ascii_lowercase(), value.into());
    }
    for flag in attrs.flags.declared() {
        if let Some(set) = attrs.flag(flag) {
            put(&flag.as_str().to_ascii_lowercase(), set.into());
        }
    }
    map
}
