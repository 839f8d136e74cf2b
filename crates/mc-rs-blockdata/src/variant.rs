//! Variants and their derivation accessors.

use std::fmt;

use crate::attribute::{
    Axis, BlockFace, BlockHalf, Counter, DyeColor, FaceSet, Flag, SubType, WoodType,
};
use crate::block_type::BlockType;
use crate::catalog::catalog;
use crate::error::MaterialError;
use crate::state::Attributes;

/// One attribute combination of a block type.
///
/// Variants handed out by the catalog are `&'static` singletons. Derivation
/// accessors (`with_*`) never mutate: they return the registered sibling
/// with one attribute replaced.
#[derive(Debug, Clone)]
pub struct Variant {
    block: &'static BlockType,
    data: u8,
    name: String,
    attributes: Attributes,
}

impl Variant {
    /// Creates a variant named after its attribute tokens, or after the
    /// block type when it carries none.
    pub fn new(block: &'static BlockType, data: u8, attributes: Attributes) -> Self {
        let tokens = attributes.tokens();
        let name = if tokens.is_empty() {
            block.name.to_owned()
        } else {
            tokens.join("_")
        };
        Self {
            block,
            data,
            name,
            attributes,
        }
    }

    pub fn block(&self) -> &'static BlockType {
        self.block
    }

    pub fn id(&self) -> u8 {
        self.block.id
    }

    /// Legacy 4-bit data value.
    pub fn data(&self) -> u8 {
        self.data
    }

    /// Legacy global state id, `(id << 4) | data`.
    pub fn full_id(&self) -> u16 {
        (u16::from(self.block.id) << 4) | u16::from(self.data)
    }

    /// Enum-style name, unique within the block type.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    // Readers. `None` means the block type has no such attribute.

    pub fn facing(&self) -> Option<BlockFace> {
        self.attributes.facing
    }

    pub fn powered(&self) -> Option<bool> {
        self.attributes.flag(Flag::Powered)
    }

    pub fn open(&self) -> Option<bool> {
        self.attributes.flag(Flag::Open)
    }

    pub fn flag(&self, flag: Flag) -> Option<bool> {
        self.attributes.flag(flag)
    }

    pub fn color(&self) -> Option<DyeColor> {
        self.attributes.color
    }

    pub fn wood(&self) -> Option<WoodType> {
        self.attributes.wood
    }

    pub fn kind(&self) -> Option<SubType> {
        self.attributes.kind
    }

    pub fn axis(&self) -> Option<Axis> {
        self.attributes.axis
    }

    pub fn half(&self) -> Option<BlockHalf> {
        self.attributes.half
    }

    pub fn counter(&self) -> Option<(Counter, u8)> {
        self.attributes.counter
    }

    pub fn age(&self) -> Option<u8> {
        self.attributes.counter_value(Counter::Age)
    }

    pub fn faces(&self) -> Option<FaceSet> {
        self.attributes.faces
    }

    /// Whether brewing stand bottle `slot` (0..3) is filled.
    pub fn bottle(&self, slot: usize) -> Result<bool, MaterialError> {
        let flag = bottle_flag(slot)?;
        self.attributes
            .flag(flag)
            .ok_or_else(|| self.unsupported(flag.as_str()))
    }

    // Derivations.

    pub fn with_facing(&self, facing: BlockFace) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.facing.is_some(), "FACING")?;
        self.sibling("FACING", facing, self.attributes.with_facing(facing))
    }

    pub fn with_powered(&self, powered: bool) -> Result<&'static Variant, MaterialError> {
        self.with_flag(Flag::Powered, powered)
    }

    pub fn with_open(&self, open: bool) -> Result<&'static Variant, MaterialError> {
        self.with_flag(Flag::Open, open)
    }

    pub fn with_flag(&self, flag: Flag, value: bool) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.flag(flag).is_some(), flag.as_str())?;
        self.sibling(flag.as_str(), value, self.attributes.with_flag(flag, value))
    }

    pub fn with_color(&self, color: DyeColor) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.color.is_some(), "COLOR")?;
        self.sibling("COLOR", color, self.attributes.with_color(color))
    }

    pub fn with_wood(&self, wood: WoodType) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.wood.is_some(), "WOOD")?;
        self.sibling("WOOD", wood, self.attributes.with_wood(wood))
    }

    pub fn with_kind(&self, kind: SubType) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.kind.is_some(), "KIND")?;
        self.sibling("KIND", kind, self.attributes.with_kind(kind))
    }

    pub fn with_axis(&self, axis: Axis) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.axis.is_some(), "AXIS")?;
        self.sibling("AXIS", axis, self.attributes.with_axis(axis))
    }

    pub fn with_half(&self, half: BlockHalf) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.half.is_some(), "HALF")?;
        self.sibling("HALF", half, self.attributes.with_half(half))
    }

    pub fn with_counter(
        &self,
        counter: Counter,
        value: u8,
    ) -> Result<&'static Variant, MaterialError> {
        let present = self.attributes.counter_value(counter).is_some();
        self.require(present, counter.as_str())?;
        self.sibling(
            counter.as_str(),
            value,
            self.attributes.with_counter(counter, value),
        )
    }

    pub fn with_age(&self, age: u8) -> Result<&'static Variant, MaterialError> {
        self.with_counter(Counter::Age, age)
    }

    pub fn with_faces(&self, faces: FaceSet) -> Result<&'static Variant, MaterialError> {
        self.require(self.attributes.faces.is_some(), "FACES")?;
        self.sibling("FACES", faces, self.attributes.with_faces(faces))
    }

    pub fn with_bottle(
        &self,
        slot: usize,
        filled: bool,
    ) -> Result<&'static Variant, MaterialError> {
        self.with_flag(bottle_flag(slot)?, filled)
    }

    fn unsupported(&self, attribute: &'static str) -> MaterialError {
        MaterialError::UnsupportedAttribute {
            block: self.block.name,
            attribute,
        }
    }

    fn require(&self, present: bool, attribute: &'static str) -> Result<(), MaterialError> {
        if present {
            Ok(())
        } else {
            Err(self.unsupported(attribute))
        }
    }

    fn sibling(
        &self,
        attribute: &'static str,
        value: impl fmt::Display,
        attrs: Attributes,
    ) -> Result<&'static Variant, MaterialError> {
        catalog()
            .lookup(self.block.id, &attrs)
            .ok_or_else(|| MaterialError::UnregisteredCombination {
                block: self.block.name,
                attribute,
                value: value.to_string(),
            })
    }
}

fn bottle_flag(slot: usize) -> Result<Flag, MaterialError> {
    Flag::BOTTLES
        .get(slot)
        .copied()
        .ok_or(MaterialError::SlotOutOfRange {
            slot,
            limit: Flag::BOTTLES.len(),
        })
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.block.id == other.block.id && self.data == other.data
    }
}

impl Eq for Variant {}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.block.name, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{DoorHinge, RailShape};
    use crate::blocks;

    fn variant(id: u8, data: u8) -> &'static Variant {
        catalog().variant(id, data).unwrap()
    }

    /// Checks derive-then-read for one attribute over every variant.
    fn check_derivation<T: Copy + PartialEq + fmt::Debug>(
        values: &[T],
        read: impl Fn(&Variant) -> Option<T>,
        derive: impl Fn(&Variant, T) -> Result<&'static Variant, MaterialError>,
        clear: impl Fn(Attributes) -> Attributes,
    ) {
        for variant in catalog().variants() {
            if read(variant).is_none() {
                continue;
            }
            for &value in values {
                match derive(variant, value) {
                    Ok(derived) => {
                        assert_eq!(read(derived), Some(value), "{variant} -> {value:?}");
                        assert_eq!(
                            clear(*derived.attributes()),
                            clear(*variant.attributes()),
                            "{variant} -> {derived} changed another attribute"
                        );
                    }
                    Err(MaterialError::UnregisteredCombination { .. }) => {}
                    Err(e) => panic!("{variant} -> {value:?}: {e}"),
                }
            }
        }
    }

    #[test]
    fn derive_then_read_facing() {
        check_derivation(
            BlockFace::ALL,
            Variant::facing,
            Variant::with_facing,
            |mut a| {
                a.facing = None;
                a
            },
        );
    }

    #[test]
    fn derive_then_read_flags() {
        for &flag in Flag::ALL {
            check_derivation(
                &[false, true],
                |v| v.flag(flag),
                |v, value| v.with_flag(flag, value),
                |a| a.with_flag(flag, false),
            );
        }
    }

    #[test]
    fn derive_then_read_color_and_wood() {
        check_derivation(DyeColor::ALL, Variant::color, Variant::with_color, |mut a| {
            a.color = None;
            a
        });
        check_derivation(WoodType::ALL, Variant::wood, Variant::with_wood, |mut a| {
            a.wood = None;
            a
        });
    }

    #[test]
    fn derive_then_read_axis_and_half() {
        check_derivation(Axis::ALL, Variant::axis, Variant::with_axis, |mut a| {
            a.axis = None;
            a
        });
        check_derivation(BlockHalf::ALL, Variant::half, Variant::with_half, |mut a| {
            a.half = None;
            a
        });
    }

    #[test]
    fn derive_then_read_counters() {
        let values: Vec<u8> = (0..16).collect();
        for &counter in Counter::ALL {
            check_derivation(
                &values,
                |v| v.attributes().counter_value(counter),
                |v, value| v.with_counter(counter, value),
                |mut a| {
                    a.counter = None;
                    a
                },
            );
        }
    }

    #[test]
    fn derive_then_read_faces() {
        let sets: Vec<FaceSet> = catalog()
            .registry(blocks::VINE)
            .unwrap()
            .types()
            .iter()
            .filter_map(Variant::faces)
            .collect();
        assert_eq!(sets.len(), 16);
        check_derivation(&sets, Variant::faces, Variant::with_faces, |mut a| {
            a.faces = None;
            a
        });
    }

    #[test]
    fn rail_shape_derivation() {
        let rail = variant(blocks::GOLDEN_RAIL, 0x0);
        let ascending = rail
            .with_kind(SubType::Rail(RailShape::AscendingEast))
            .unwrap()
            .with_powered(true)
            .unwrap();
        assert_eq!(ascending.data(), 0x0A);
        assert_eq!(ascending.name(), "ASCENDING_EAST_POWERED");

        let err = rail
            .with_kind(SubType::Rail(RailShape::CurvedNorthEast))
            .unwrap_err();
        assert!(matches!(err, MaterialError::UnregisteredCombination { .. }));
    }

    #[test]
    fn upper_door_has_no_facing() {
        let upper = catalog()
            .registry(blocks::WOODEN_DOOR)
            .unwrap()
            .by_attributes(
                &Attributes::EMPTY
                    .with_half(BlockHalf::Top)
                    .with_kind(SubType::Hinge(DoorHinge::Left))
                    .with_flag(Flag::Powered, false),
            )
            .unwrap();
        assert_eq!(upper.facing(), None);
        assert_eq!(upper.open(), None);
        assert_eq!(
            upper.with_facing(BlockFace::North),
            Err(MaterialError::UnsupportedAttribute {
                block: "WOODEN_DOOR",
                attribute: "FACING",
            })
        );
        assert_eq!(upper.with_powered(true).unwrap().data(), 0x8 | 0x2);
    }

    #[test]
    fn brewing_stand_bottles() {
        let empty = variant(blocks::BREWING_STAND, 0);
        assert_eq!(empty.name(), "BREWING_STAND");
        assert_eq!(empty.bottle(1), Ok(false));

        let filled = empty
            .with_bottle(1, true)
            .unwrap()
            .with_bottle(2, true)
            .unwrap();
        assert_eq!(filled.data(), 0x2 | 0x4);
        assert_eq!(filled.bottle(2), Ok(true));
        assert_eq!(filled.bottle(0), Ok(false));

        assert_eq!(
            empty.with_bottle(3, true),
            Err(MaterialError::SlotOutOfRange { slot: 3, limit: 3 })
        );
        assert!(matches!(
            variant(blocks::STONE, 0).bottle(0),
            Err(MaterialError::UnsupportedAttribute { .. })
        ));
    }

    #[test]
    fn unsupported_attribute_on_plain_block() {
        let air = variant(blocks::AIR, 0);
        assert_eq!(air.name(), "AIR");
        assert!(air.with_powered(true).is_err());
        assert!(air.with_color(DyeColor::Red).is_err());
        assert_eq!(air.age(), None);
    }

    #[test]
    fn full_id_packs_block_and_data() {
        let wool = variant(blocks::WOOL, 14);
        assert_eq!(wool.full_id(), (35 << 4) | 14);
        assert_eq!(wool.to_string(), "WOOL:RED");
    }
}
