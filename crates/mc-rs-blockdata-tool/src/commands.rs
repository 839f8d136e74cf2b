//! `lookup`, `find` and `summary` commands.

use mc_rs_blockdata::{BlockType, Catalog, Layout, Variant};
use tracing::{debug, info};

use crate::error::ToolError;

/// Parse `<id>` or `<id>:<data>`.
pub fn parse_reference(reference: &str) -> Result<(u8, Option<u8>), ToolError> {
    let bad = || ToolError::BadReference(reference.to_owned());
    let (id, data) = match reference.split_once(':') {
        Some((id, data)) => (id, Some(data)),
        None => (reference, None),
    };
    let id = id.trim().parse::<u8>().map_err(|_| bad())?;
    let data = match data {
        Some(data) => Some(data.trim().parse::<u8>().map_err(|_| bad())?),
        None => None,
    };
    Ok((id, data))
}

pub fn lookup(catalog: &Catalog, reference: &str) -> Result<String, ToolError> {
    let not_found = || ToolError::NotFound(reference.to_owned());
    let (id, data) = parse_reference(reference)?;
    match data {
        Some(data) => catalog
            .variant(id, data)
            .map(describe_variant)
            .ok_or_else(not_found),
        None => Ok(describe_block(catalog.try_block(id)?)),
    }
}

/// Resolve `name` as a block name or `<block>/<variant>`.
pub fn find(catalog: &Catalog, query: &str) -> Result<String, ToolError> {
    let not_found = || ToolError::NotFound(query.to_owned());
    match query.split_once('/') {
        Some((block, variant)) => catalog
            .variant_by_name(block, variant)
            .map(describe_variant)
            .ok_or_else(not_found),
        None => catalog
            .block_by_name(query)
            .map(describe_block)
            .ok_or_else(not_found),
    }
}

pub fn summary(catalog: &Catalog) {
    let mut layouts: Vec<(Layout, usize)> = Vec::new();
    for block in catalog.blocks() {
        match layouts.iter_mut().find(|(l, _)| *l == block.layout) {
            Some((_, count)) => *count += 1,
            None => layouts.push((block.layout, 1)),
        }
        debug!(
            id = block.id,
            name = block.name,
            variants = block.variants().len(),
            "block type"
        );
    }
    let unbreakable = catalog.blocks().filter(|b| b.is_unbreakable()).count();
    info!(
        "{} block types, {} variants, {} layouts",
        catalog.blocks().count(),
        catalog.variant_count(),
        layouts.len()
    );
    info!("Unbreakable block types: {unbreakable}");
}

/// Header line plus one row per variant.
pub fn describe_block(block: &BlockType) -> String {
    let header = format!(
        "{} {} \"{}\" hardness={} blast_resistance={}",
        block.id, block.namespaced_id, block.display_name, block.hardness, block.blast_resistance
    );
    let rows = block.variants().iter().map(variant_row);
    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}

fn variant_row(variant: &Variant) -> String {
    format!("  {:>2}  {}", variant.data(), variant.name())
}

pub fn describe_variant(variant: &Variant) -> String {
    let block = variant.block();
    format!(
        "{}:{} {}/{} full_id={}",
        block.id,
        variant.data(),
        block.namespaced_id,
        variant.name(),
        variant.full_id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_rs_blockdata::{catalog, MaterialError};

    #[test]
    fn references() {
        assert_eq!(parse_reference("35").unwrap(), (35, None));
        assert_eq!(parse_reference("35:14").unwrap(), (35, Some(14)));
        for bad in ["wool", "35:", "300", ":4"] {
            let parsed = parse_reference(bad);
            assert!(matches!(parsed, Err(ToolError::BadReference(_))), "{bad}");
        }
    }

    #[test]
    fn lookup_variant_and_block() {
        let line = lookup(catalog(), "35:14").unwrap();
        assert_eq!(line, "35:14 minecraft:wool/RED full_id=574");

        let block = lookup(catalog(), "27").unwrap();
        let mut lines = block.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("27 minecraft:golden_rail \"Powered"));
        assert_eq!(lines.next(), Some("   0  FLAT_NORTH_SOUTH"));
        assert_eq!(lines.count(), 11);
        assert!(block.contains("\n  10  ASCENDING_EAST_POWERED\n"));

        let missing = lookup(catalog(), "1:15");
        assert!(matches!(missing, Err(ToolError::NotFound(_))));
        assert!(matches!(
            lookup(catalog(), "250"),
            Err(ToolError::Material(MaterialError::UnknownBlock(250)))
        ));
    }

    #[test]
    fn find_by_name() {
        let line = find(catalog(), "minecraft:golden_rail/ascending_east_powered").unwrap();
        assert_eq!(
            line,
            "27:10 minecraft:golden_rail/ASCENDING_EAST_POWERED full_id=442"
        );
        assert!(find(catalog(), "OAK_STAIRS").unwrap().starts_with("53 "));
        let missing = find(catalog(), "chest/up");
        assert!(matches!(missing, Err(ToolError::NotFound(_))));
    }
}
