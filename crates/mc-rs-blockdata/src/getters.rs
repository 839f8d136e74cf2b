//! Typed entry points for common variants.
//!
//! Each getter builds the attribute tuple of one block type and resolves
//! it through the catalog. A `None` result means the requested combination
//! is not registered (e.g. a curved powered rail). The counter getters
//! (`cactus`, `sugar_cane`, `cauldron`, `snow_layer`, `crops`) clamp their
//! input into the block's range instead.

use crate::attribute::{
    Axis, BedPart, BlockFace, BlockHalf, Counter, DoorHinge, DyeColor, FaceSet, Flag,
    LeverOrientation, RailShape, SlabType, SubType, WoodType,
};
use crate::blocks;
use crate::catalog::catalog;
use crate::layout::Layout;
use crate::state::Attributes;
use crate::variant::Variant;

fn find(id: u8, attrs: Attributes) -> Option<&'static Variant> {
    catalog().lookup(id, &attrs)
}

/// Resolve a counter layout with `value` clamped into its range.
fn clamped(id: u8, counter: Counter, value: u8) -> Option<&'static Variant> {
    match catalog().block(id)?.layout {
        Layout::Counter { counter: c, min, max } if c == counter => find(
            id,
            Attributes::EMPTY.with_counter(counter, value.clamp(min, max)),
        ),
        _ => None,
    }
}

fn rail(id: u8, shape: RailShape, powered: bool) -> Option<&'static Variant> {
    find(
        id,
        Attributes::EMPTY
            .with_kind(SubType::Rail(shape))
            .with_flag(Flag::Powered, powered),
    )
}

pub fn powered_rail(shape: RailShape, powered: bool) -> Option<&'static Variant> {
    rail(blocks::GOLDEN_RAIL, shape, powered)
}

pub fn detector_rail(shape: RailShape, powered: bool) -> Option<&'static Variant> {
    rail(blocks::DETECTOR_RAIL, shape, powered)
}

pub fn activator_rail(shape: RailShape, powered: bool) -> Option<&'static Variant> {
    rail(blocks::ACTIVATOR_RAIL, shape, powered)
}

/// Unpowered fence gate of `wood`.
pub fn fence_gate(wood: WoodType, facing: BlockFace, open: bool) -> Option<&'static Variant> {
    find(
        blocks::fence_gate_for(wood),
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::Open, open)
            .with_flag(Flag::Powered, false),
    )
}

/// Lower half of any door block (wooden or iron).
pub fn door_lower(block: u8, facing: BlockFace, open: bool) -> Option<&'static Variant> {
    find(
        block,
        Attributes::EMPTY
            .with_half(BlockHalf::Bottom)
            .with_facing(facing)
            .with_flag(Flag::Open, open),
    )
}

pub fn door_upper(block: u8, hinge: DoorHinge, powered: bool) -> Option<&'static Variant> {
    find(
        block,
        Attributes::EMPTY
            .with_half(BlockHalf::Top)
            .with_kind(SubType::Hinge(hinge))
            .with_flag(Flag::Powered, powered),
    )
}

/// Lower half of the door made from `wood`.
pub fn wooden_door(wood: WoodType, facing: BlockFace, open: bool) -> Option<&'static Variant> {
    door_lower(blocks::door_for(wood), facing, open)
}

pub fn stairs(block: u8, facing: BlockFace, half: BlockHalf) -> Option<&'static Variant> {
    find(block, Attributes::EMPTY.with_facing(facing).with_half(half))
}

pub fn wooden_stairs(
    wood: WoodType,
    facing: BlockFace,
    half: BlockHalf,
) -> Option<&'static Variant> {
    stairs(blocks::stairs_for(wood), facing, half)
}

pub fn piston(sticky: bool, facing: BlockFace, extended: bool) -> Option<&'static Variant> {
    let id = if sticky {
        blocks::STICKY_PISTON
    } else {
        blocks::PISTON
    };
    find(
        id,
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::Extended, extended),
    )
}

pub fn lever(orientation: LeverOrientation, powered: bool) -> Option<&'static Variant> {
    find(
        blocks::LEVER,
        Attributes::EMPTY
            .with_kind(SubType::Lever(orientation))
            .with_flag(Flag::Powered, powered),
    )
}

pub fn button(block: u8, facing: BlockFace, powered: bool) -> Option<&'static Variant> {
    find(
        block,
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::Powered, powered),
    )
}

/// Any torch block; `facing` is the side the torch points out of.
pub fn torch(block: u8, facing: BlockFace) -> Option<&'static Variant> {
    find(block, Attributes::EMPTY.with_facing(facing))
}

pub fn bed(part: BedPart, facing: BlockFace, occupied: bool) -> Option<&'static Variant> {
    find(
        blocks::BED,
        Attributes::EMPTY
            .with_facing(facing)
            .with_kind(SubType::BedPart(part))
            .with_flag(Flag::Occupied, occupied),
    )
}

/// Log of `wood`, from `log` or `log2` as the wood requires.
pub fn log(wood: WoodType, axis: Axis) -> Option<&'static Variant> {
    let id = if wood.is_secondary() {
        blocks::LOG2
    } else {
        blocks::LOG
    };
    find(id, Attributes::EMPTY.with_wood(wood).with_axis(axis))
}

pub fn leaves(wood: WoodType, decayable: bool, check_decay: bool) -> Option<&'static Variant> {
    let id = if wood.is_secondary() {
        blocks::LEAVES2
    } else {
        blocks::LEAVES
    };
    find(
        id,
        Attributes::EMPTY
            .with_wood(wood)
            .with_flag(Flag::Decayable, decayable)
            .with_flag(Flag::CheckDecay, check_decay),
    )
}

pub fn planks(wood: WoodType) -> Option<&'static Variant> {
    find(blocks::PLANKS, Attributes::EMPTY.with_wood(wood))
}

/// Sapling of `wood`; `stage` is 0 or 1.
pub fn sapling(wood: WoodType, stage: u8) -> Option<&'static Variant> {
    find(
        blocks::SAPLING,
        Attributes::EMPTY
            .with_wood(wood)
            .with_counter(Counter::Stage, stage),
    )
}

/// Any dye-colored block: wool, stained glass, panes, clay, carpet.
pub fn colored(block: u8, color: DyeColor) -> Option<&'static Variant> {
    find(block, Attributes::EMPTY.with_color(color))
}

pub fn wool(color: DyeColor) -> Option<&'static Variant> {
    colored(blocks::WOOL, color)
}

pub fn slab(kind: SlabType, half: BlockHalf) -> Option<&'static Variant> {
    find(
        blocks::STONE_SLAB,
        Attributes::EMPTY
            .with_kind(SubType::Slab(kind))
            .with_half(half),
    )
}

/// `damage` is 0 (intact) to 2 (very damaged).
pub fn anvil(facing: BlockFace, damage: u8) -> Option<&'static Variant> {
    find(
        blocks::ANVIL,
        Attributes::EMPTY
            .with_facing(facing)
            .with_counter(Counter::Damage, damage),
    )
}

/// `delay` is in redstone ticks, 1 to 4.
pub fn repeater(facing: BlockFace, delay: u8, powered: bool) -> Option<&'static Variant> {
    let id = if powered {
        blocks::POWERED_REPEATER
    } else {
        blocks::UNPOWERED_REPEATER
    };
    find(
        id,
        Attributes::EMPTY
            .with_facing(facing)
            .with_counter(Counter::Delay, delay),
    )
}

pub fn comparator(facing: BlockFace, subtract: bool, powered: bool) -> Option<&'static Variant> {
    find(
        blocks::UNPOWERED_COMPARATOR,
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::Subtract, subtract)
            .with_flag(Flag::Powered, powered),
    )
}

pub fn trapdoor(
    block: u8,
    facing: BlockFace,
    open: bool,
    half: BlockHalf,
) -> Option<&'static Variant> {
    find(
        block,
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::Open, open)
            .with_half(half),
    )
}

pub fn tripwire(
    powered: bool,
    suspended: bool,
    attached: bool,
    disarmed: bool,
) -> Option<&'static Variant> {
    find(
        blocks::TRIPWIRE,
        Attributes::EMPTY
            .with_flag(Flag::Powered, powered)
            .with_flag(Flag::Suspended, suspended)
            .with_flag(Flag::Attached, attached)
            .with_flag(Flag::Disarmed, disarmed),
    )
}

/// Vine attached to `faces`; only horizontal faces are valid.
pub fn vine(faces: FaceSet) -> Option<&'static Variant> {
    find(blocks::VINE, Attributes::EMPTY.with_faces(faces))
}

pub fn skull(facing: BlockFace, no_drop: bool) -> Option<&'static Variant> {
    find(
        blocks::SKULL,
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::NoDrop, no_drop),
    )
}

pub fn hopper(facing: BlockFace, enabled: bool) -> Option<&'static Variant> {
    find(
        blocks::HOPPER,
        Attributes::EMPTY
            .with_facing(facing)
            .with_flag(Flag::Enabled, enabled),
    )
}

/// Any aged crop (wheat, carrots, potatoes, stems, nether wart) with `age`
/// clamped to the crop's maximum.
pub fn crops(block: u8, age: u8) -> Option<&'static Variant> {
    clamped(block, Counter::Age, age)
}

/// Age clamped to 0..=15.
pub fn cactus(age: u8) -> Option<&'static Variant> {
    clamped(blocks::CACTUS, Counter::Age, age)
}

/// Age clamped to 0..=15.
pub fn sugar_cane(age: u8) -> Option<&'static Variant> {
    clamped(blocks::REEDS, Counter::Age, age)
}

/// Water level clamped to 0..=3.
pub fn cauldron(level: u8) -> Option<&'static Variant> {
    clamped(blocks::CAULDRON, Counter::Level, level)
}

/// Layer count clamped to 1..=8.
pub fn snow_layer(layers: u8) -> Option<&'static Variant> {
    clamped(blocks::SNOW_LAYER, Counter::Layers, layers)
}
