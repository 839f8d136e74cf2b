//! Block layouts: the attribute set of a block type and its data value
//! combiner.
//!
//! Many block types share the same bit conventions (every wooden stair,
//! every colored block, every crop). A [`Layout`] names one convention;
//! [`Layout::states`] enumerates its attribute domain and
//! [`Layout::encode`] packs one attribute tuple into a data value.

use crate::attribute::{
    Axis, BedPart, BlockFace, BlockHalf, Counter, DirtType, DoorHinge, DoublePlantType, DyeColor,
    FaceSet, Flag, FlowerType, LeverOrientation, MonsterEggType, MushroomTexture, PrismarineType,
    QuartzType, RailShape, SandType, SandstoneType, SlabType, StoneBrickType, StoneType, SubType,
    TallGrassType, WallType, WoodType,
};
use crate::facing::FaceCode;
use crate::state::Attributes;

/// Top-half / powered / triggered bit shared by most layouts.
const HIGH_BIT: u8 = 0x8;

/// Which woods a wood-keyed layout covers. The legacy format ran out of
/// bits for logs and leaves, so acacia and dark oak live in a second id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WoodSet {
    /// Oak, spruce, birch, jungle.
    Primary,
    /// Acacia, dark oak.
    Secondary,
    All,
}

impl WoodSet {
    pub fn woods(self) -> &'static [WoodType] {
        match self {
            WoodSet::Primary => &[
                WoodType::Oak,
                WoodType::Spruce,
                WoodType::Birch,
                WoodType::Jungle,
            ],
            WoodSet::Secondary => &[WoodType::Acacia, WoodType::DarkOak],
            WoodSet::All => WoodType::ALL,
        }
    }

    fn code(self, wood: WoodType) -> Option<u8> {
        index_of(self.woods(), wood)
    }
}

/// Sub-kind families whose data value is simply the kind's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Stone,
    Dirt,
    Sand,
    Sandstone,
    TallGrass,
    Flower,
    MonsterEgg,
    StoneBrick,
    Mushroom,
    Wall,
    Prismarine,
}

impl Family {
    pub fn kinds(self) -> Vec<SubType> {
        match self {
            Family::Stone => StoneType::ALL.iter().map(|&t| SubType::Stone(t)).collect(),
            Family::Dirt => DirtType::ALL.iter().map(|&t| SubType::Dirt(t)).collect(),
            Family::Sand => SandType::ALL.iter().map(|&t| SubType::Sand(t)).collect(),
            Family::Sandstone => SandstoneType::ALL
                .iter()
                .map(|&t| SubType::Sandstone(t))
                .collect(),
            Family::TallGrass => TallGrassType::ALL
                .iter()
                .map(|&t| SubType::TallGrass(t))
                .collect(),
            Family::Flower => FlowerType::ALL
                .iter()
                .map(|&t| SubType::Flower(t))
                .collect(),
            Family::MonsterEgg => MonsterEggType::ALL
                .iter()
                .map(|&t| SubType::MonsterEgg(t))
                .collect(),
            Family::StoneBrick => StoneBrickType::ALL
                .iter()
                .map(|&t| SubType::StoneBrick(t))
                .collect(),
            Family::Mushroom => MushroomTexture::ALL
                .iter()
                .map(|&t| SubType::Mushroom(t))
                .collect(),
            Family::Wall => WallType::ALL.iter().map(|&t| SubType::Wall(t)).collect(),
            Family::Prismarine => PrismarineType::ALL
                .iter()
                .map(|&t| SubType::Prismarine(t))
                .collect(),
        }
    }

    fn code(self, kind: SubType) -> Option<u8> {
        match (self, kind) {
            (Family::Stone, SubType::Stone(t)) => index_of(StoneType::ALL, t),
            (Family::Dirt, SubType::Dirt(t)) => index_of(DirtType::ALL, t),
            (Family::Sand, SubType::Sand(t)) => index_of(SandType::ALL, t),
            (Family::Sandstone, SubType::Sandstone(t)) => index_of(SandstoneType::ALL, t),
            (Family::TallGrass, SubType::TallGrass(t)) => index_of(TallGrassType::ALL, t),
            (Family::Flower, SubType::Flower(t)) => index_of(FlowerType::ALL, t),
            (Family::MonsterEgg, SubType::MonsterEgg(t)) => index_of(MonsterEggType::ALL, t),
            (Family::StoneBrick, SubType::StoneBrick(t)) => index_of(StoneBrickType::ALL, t),
            (Family::Mushroom, SubType::Mushroom(t)) => Some(t.data()),
            (Family::Wall, SubType::Wall(t)) => index_of(WallType::ALL, t),
            (Family::Prismarine, SubType::Prismarine(t)) => index_of(PrismarineType::ALL, t),
            _ => None,
        }
    }
}

/// Attribute set and data value convention of a block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A single variant with data 0.
    Simple,
    SubTypes(Family),
    Planks,
    Sapling,
    Log(WoodSet),
    Leaves(WoodSet),
    WoodSlab,
    DoubleWoodSlab,
    Slab,
    DoubleSlab,
    RedSandstoneSlab,
    DoubleRedSandstoneSlab,
    Colored,
    /// One integer attribute stored as `value - min`.
    Counter { counter: Counter, min: u8, max: u8 },
    /// One flag stored in bit 0x1.
    Toggle(Flag),
    Directional,
    Piston,
    PistonHead,
    Bed,
    Rail,
    PoweredRail,
    Torch,
    Stairs,
    Wall,
    Horizontal,
    Door,
    Lever,
    Button,
    Repeater,
    Comparator,
    Trapdoor,
    FenceGate,
    EndPortalFrame,
    Cocoa,
    TripwireHook,
    Tripwire,
    Skull,
    Anvil,
    Hopper,
    Vine,
    Portal,
    Quartz,
    Hay,
    BrewingStand,
    DoublePlant,
}

impl Layout {
    /// Counter layout over `min..=max`.
    pub const fn counter(counter: Counter, min: u8, max: u8) -> Self {
        Layout::Counter { counter, min, max }
    }

    /// Every attribute tuple this layout can represent.
    pub fn states(self) -> Vec<Attributes> {
        use crate::attribute::Counter;
        use Layout::*;

        let base = Domain::new();
        let domain = match self {
            Simple => base,
            SubTypes(family) => base.kinds(family.kinds()),
            Planks | DoubleWoodSlab => base.woods(WoodSet::All),
            Sapling => base.woods(WoodSet::All).counter(Counter::Stage, 0, 1),
            Log(set) => base
                .woods(set)
                .axes(&[Axis::Y, Axis::X, Axis::Z, Axis::Bark]),
            Leaves(set) => base.woods(set).flag(Flag::Decayable).flag(Flag::CheckDecay),
            WoodSlab => base.woods(WoodSet::All).halves(),
            Slab => base.kinds(slab_kinds()).halves(),
            DoubleSlab => base.kinds(slab_kinds()).flag(Flag::Seamless),
            RedSandstoneSlab => base.halves(),
            DoubleRedSandstoneSlab => base.flag(Flag::Seamless),
            Colored => base.colors(),
            Layout::Counter { counter, min, max } => base.counter(counter, min, max),
            Toggle(flag) => base.flag(flag),
            Directional => base.faces(FaceCode::Index).flag(Flag::Triggered),
            Piston => base.faces(FaceCode::Index).flag(Flag::Extended),
            PistonHead => base.faces(FaceCode::Index).flag(Flag::Sticky),
            Bed => base
                .faces(FaceCode::Horizontal)
                .kinds(BedPart::ALL.iter().map(|&p| SubType::BedPart(p)).collect())
                .flag(Flag::Occupied),
            Rail => base.kinds(rail_kinds(RailShape::ALL)),
            PoweredRail => base
                .kinds(rail_kinds(&RailShape::ALL[..6]))
                .flag(Flag::Powered),
            Torch => base.faces(FaceCode::Torch),
            Stairs => base.faces(FaceCode::Stairs).halves(),
            Wall => base.faces(FaceCode::Wall),
            Horizontal => base.faces(FaceCode::Horizontal),
            Door => {
                let lower = Domain::of(Attributes::EMPTY.with_half(BlockHalf::Bottom))
                    .faces(FaceCode::Door)
                    .flag(Flag::Open);
                let upper = Domain::of(Attributes::EMPTY.with_half(BlockHalf::Top))
                    .kinds(DoorHinge::ALL.iter().map(|&h| SubType::Hinge(h)).collect())
                    .flag(Flag::Powered);
                lower.union(upper)
            }
            Lever => base
                .kinds(
                    LeverOrientation::ALL
                        .iter()
                        .map(|&o| SubType::Lever(o))
                        .collect(),
                )
                .flag(Flag::Powered),
            Button => base.faces(FaceCode::Button).flag(Flag::Powered),
            Repeater => base
                .faces(FaceCode::Horizontal)
                .counter(Counter::Delay, 1, 4),
            Comparator => base
                .faces(FaceCode::Horizontal)
                .flag(Flag::Subtract)
                .flag(Flag::Powered),
            Trapdoor => base.faces(FaceCode::Trapdoor).flag(Flag::Open).halves(),
            FenceGate => base
                .faces(FaceCode::Horizontal)
                .flag(Flag::Open)
                .flag(Flag::Powered),
            EndPortalFrame => base.faces(FaceCode::Horizontal).flag(Flag::Eye),
            Cocoa => base.faces(FaceCode::Horizontal).counter(Counter::Age, 0, 2),
            TripwireHook => base
                .faces(FaceCode::Horizontal)
                .flag(Flag::Attached)
                .flag(Flag::Powered),
            Tripwire => base
                .flag(Flag::Powered)
                .flag(Flag::Suspended)
                .flag(Flag::Attached)
                .flag(Flag::Disarmed),
            Skull => base.faces(FaceCode::Skull).flag(Flag::NoDrop),
            Anvil => base
                .faces(FaceCode::Horizontal)
                .counter(Counter::Damage, 0, 2),
            Hopper => base.faces(FaceCode::Hopper).flag(Flag::Enabled),
            Vine => base.face_sets(),
            Portal => base.axes(&[Axis::X, Axis::Z]),
            Quartz => {
                let plain = Domain::new().kinds(vec![
                    SubType::Quartz(QuartzType::Normal),
                    SubType::Quartz(QuartzType::Chiseled),
                ]);
                let pillar = Attributes::EMPTY.with_kind(SubType::Quartz(QuartzType::Pillar));
                let pillar = Domain::of(pillar).axes(&[Axis::Y, Axis::X, Axis::Z]);
                plain.union(pillar)
            }
            Hay => base.axes(&[Axis::Y, Axis::X, Axis::Z]),
            BrewingStand => Flag::BOTTLES.iter().fold(base, |d, &flag| d.flag(flag)),
            DoublePlant => {
                let plants = DoublePlantType::ALL
                    .iter()
                    .map(|&t| SubType::DoublePlant(t))
                    .collect();
                let bottom = Attributes::EMPTY.with_half(BlockHalf::Bottom);
                let lower = Domain::of(bottom).kinds(plants);
                let top = Attributes::EMPTY.with_half(BlockHalf::Top);
                let upper = Domain::of(top).faces(FaceCode::Horizontal);
                lower.union(upper)
            }
        };
        domain.0
    }

    /// Pack `attrs` into a data value, or `None` if this layout cannot
    /// represent the tuple.
    pub fn encode(self, attrs: &Attributes) -> Option<u8> {
        use crate::attribute::Counter;
        use Layout::*;

        let data = match self {
            Simple => 0,
            SubTypes(family) => family.code(attrs.kind?)?,
            Planks | DoubleWoodSlab => WoodSet::All.code(attrs.wood?)?,
            Sapling => {
                let stage = counter_in(attrs, Counter::Stage, 0, 1)?;
                WoodSet::All.code(attrs.wood?)? | (stage << 3)
            }
            Log(set) => set.code(attrs.wood?)? | log_axis_bits(attrs.axis?),
            Leaves(set) => {
                set.code(attrs.wood?)?
                    | bit_if(!attrs.flag(Flag::Decayable)?, 0x4)
                    | bit(attrs, Flag::CheckDecay, HIGH_BIT)?
            }
            WoodSlab => WoodSet::All.code(attrs.wood?)? | top_bit(attrs, HIGH_BIT)?,
            Slab => slab_code(attrs.kind?)? | top_bit(attrs, HIGH_BIT)?,
            DoubleSlab => slab_code(attrs.kind?)? | bit(attrs, Flag::Seamless, HIGH_BIT)?,
            RedSandstoneSlab => top_bit(attrs, HIGH_BIT)?,
            DoubleRedSandstoneSlab => bit(attrs, Flag::Seamless, HIGH_BIT)?,
            Colored => attrs.color?.data(),
            Layout::Counter { counter, min, max } => counter_in(attrs, counter, min, max)? - min,
            Toggle(flag) => bit(attrs, flag, 0x1)?,
            Directional => face(attrs, FaceCode::Index)? | bit(attrs, Flag::Triggered, HIGH_BIT)?,
            Piston => face(attrs, FaceCode::Index)? | bit(attrs, Flag::Extended, HIGH_BIT)?,
            PistonHead => face(attrs, FaceCode::Index)? | bit(attrs, Flag::Sticky, HIGH_BIT)?,
            Bed => {
                let head = match attrs.kind? {
                    SubType::BedPart(part) => bit_if(part == BedPart::Head, HIGH_BIT),
                    _ => return None,
                };
                face(attrs, FaceCode::Horizontal)? | bit(attrs, Flag::Occupied, 0x4)? | head
            }
            Rail => rail_code(attrs.kind?, RailShape::ALL.len())?,
            PoweredRail => rail_code(attrs.kind?, 6)? | bit(attrs, Flag::Powered, HIGH_BIT)?,
            Torch => face(attrs, FaceCode::Torch)?,
            Stairs => face(attrs, FaceCode::Stairs)? | top_bit(attrs, 0x4)?,
            Wall => face(attrs, FaceCode::Wall)?,
            Horizontal => face(attrs, FaceCode::Horizontal)?,
            Door => match attrs.half? {
                BlockHalf::Bottom => face(attrs, FaceCode::Door)? | bit(attrs, Flag::Open, 0x4)?,
                BlockHalf::Top => {
                    let right = match attrs.kind? {
                        SubType::Hinge(hinge) => bit_if(hinge == DoorHinge::Right, 0x1),
                        _ => return None,
                    };
                    HIGH_BIT | right | bit(attrs, Flag::Powered, 0x2)?
                }
            },
            Lever => {
                let orientation = match attrs.kind? {
                    SubType::Lever(o) => index_of(LeverOrientation::ALL, o)?,
                    _ => return None,
                };
                orientation | bit(attrs, Flag::Powered, HIGH_BIT)?
            }
            Button => face(attrs, FaceCode::Button)? | bit(attrs, Flag::Powered, HIGH_BIT)?,
            Repeater => {
                let delay = counter_in(attrs, Counter::Delay, 1, 4)?;
                face(attrs, FaceCode::Horizontal)? | ((delay - 1) << 2)
            }
            Comparator => {
                face(attrs, FaceCode::Horizontal)?
                    | bit(attrs, Flag::Subtract, 0x4)?
                    | bit(attrs, Flag::Powered, HIGH_BIT)?
            }
            Trapdoor => {
                face(attrs, FaceCode::Trapdoor)?
                    | bit(attrs, Flag::Open, 0x4)?
                    | top_bit(attrs, HIGH_BIT)?
            }
            FenceGate => {
                face(attrs, FaceCode::Horizontal)?
                    | bit(attrs, Flag::Open, 0x4)?
                    | bit(attrs, Flag::Powered, HIGH_BIT)?
            }
            EndPortalFrame => face(attrs, FaceCode::Horizontal)? | bit(attrs, Flag::Eye, 0x4)?,
            Cocoa => {
                face(attrs, FaceCode::Horizontal)? | (counter_in(attrs, Counter::Age, 0, 2)? << 2)
            }
            TripwireHook => {
                face(attrs, FaceCode::Horizontal)?
                    | bit(attrs, Flag::Attached, 0x4)?
                    | bit(attrs, Flag::Powered, HIGH_BIT)?
            }
            Tripwire => {
                bit(attrs, Flag::Powered, 0x1)?
                    | bit(attrs, Flag::Suspended, 0x2)?
                    | bit(attrs, Flag::Attached, 0x4)?
                    | bit(attrs, Flag::Disarmed, HIGH_BIT)?
            }
            Skull => face(attrs, FaceCode::Skull)? | bit(attrs, Flag::NoDrop, HIGH_BIT)?,
            Anvil => {
                face(attrs, FaceCode::Horizontal)?
                    | (counter_in(attrs, Counter::Damage, 0, 2)? << 2)
            }
            Hopper => {
                face(attrs, FaceCode::Hopper)? | bit_if(!attrs.flag(Flag::Enabled)?, HIGH_BIT)
            }
            Vine => vine_bits(attrs.faces?)?,
            Portal => match attrs.axis? {
                Axis::X => 1,
                Axis::Z => 2,
                _ => return None,
            },
            Quartz => match (attrs.kind?, attrs.axis) {
                (SubType::Quartz(QuartzType::Normal), None) => 0,
                (SubType::Quartz(QuartzType::Chiseled), None) => 1,
                (SubType::Quartz(QuartzType::Pillar), Some(Axis::Y)) => 2,
                (SubType::Quartz(QuartzType::Pillar), Some(Axis::X)) => 3,
                (SubType::Quartz(QuartzType::Pillar), Some(Axis::Z)) => 4,
                _ => return None,
            },
            Hay => match attrs.axis? {
                Axis::Bark => return None,
                axis => log_axis_bits(axis),
            },
            BrewingStand => {
                let mut data = 0;
                for (slot, &flag) in Flag::BOTTLES.iter().enumerate() {
                    data |= bit(attrs, flag, 1 << slot)?;
                }
                data
            }
            DoublePlant => match attrs.half? {
                BlockHalf::Bottom => match attrs.kind? {
                    SubType::DoublePlant(t) => index_of(DoublePlantType::ALL, t)?,
                    _ => return None,
                },
                BlockHalf::Top => HIGH_BIT | face(attrs, FaceCode::Horizontal)?,
            },
        };
        Some(data)
    }

    /// Total variant of [`Layout::encode`]: tuples the layout cannot
    /// represent fall back to data value `0`, the layout's default variant.
    ///
    /// The fallback hides caller mistakes; prefer `encode` or a registry
    /// lookup when the result must be correct.
    pub fn combine(self, attrs: &Attributes) -> u8 {
        self.encode(attrs).unwrap_or(0)
    }
}

/// Cartesian product builder over attribute tuples.
struct Domain(Vec<Attributes>);

impl Domain {
    fn new() -> Self {
        Self::of(Attributes::EMPTY)
    }

    fn of(attrs: Attributes) -> Self {
        Domain(vec![attrs])
    }

    fn expand<T: Copy>(self, values: &[T], apply: impl Fn(Attributes, T) -> Attributes) -> Self {
        Domain(
            self.0
                .into_iter()
                .flat_map(|attrs| values.iter().map(move |&v| (attrs, v)))
                .map(|(attrs, v)| apply(attrs, v))
                .collect(),
        )
    }

    fn union(mut self, other: Domain) -> Self {
        self.0.extend(other.0);
        self
    }

    fn kinds(self, kinds: Vec<SubType>) -> Self {
        self.expand(&kinds, Attributes::with_kind)
    }

    fn woods(self, set: WoodSet) -> Self {
        self.expand(set.woods(), Attributes::with_wood)
    }

    fn colors(self) -> Self {
        self.expand(DyeColor::ALL, Attributes::with_color)
    }

    fn halves(self) -> Self {
        self.expand(BlockHalf::ALL, Attributes::with_half)
    }

    fn faces(self, code: FaceCode) -> Self {
        let faces: Vec<BlockFace> = code.faces().collect();
        self.expand(&faces, Attributes::with_facing)
    }

    fn axes(self, axes: &[Axis]) -> Self {
        self.expand(axes, Attributes::with_axis)
    }

    fn face_sets(self) -> Self {
        let sets: Vec<FaceSet> = (0u8..16).map(vine_faces).collect();
        self.expand(&sets, Attributes::with_faces)
    }

    fn counter(self, counter: Counter, min: u8, max: u8) -> Self {
        let values: Vec<u8> = (min..=max).collect();
        self.expand(&values, |attrs, v| attrs.with_counter(counter, v))
    }

    fn flag(self, flag: Flag) -> Self {
        self.expand(&[false, true], |attrs, v| attrs.with_flag(flag, v))
    }
}

fn index_of<T: PartialEq>(all: &[T], value: T) -> Option<u8> {
    all.iter().position(|v| *v == value).map(|i| i as u8)
}

fn bit_if(condition: bool, mask: u8) -> u8 {
    if condition {
        mask
    } else {
        0
    }
}

/// `mask` if the flag is set, `0` if clear, `None` if undeclared.
fn bit(attrs: &Attributes, flag: Flag, mask: u8) -> Option<u8> {
    attrs.flag(flag).map(|set| bit_if(set, mask))
}

fn top_bit(attrs: &Attributes, mask: u8) -> Option<u8> {
    attrs.half.map(|half| bit_if(half == BlockHalf::Top, mask))
}

fn face(attrs: &Attributes, code: FaceCode) -> Option<u8> {
    code.encode(attrs.facing?)
}

fn counter_in(attrs: &Attributes, counter: Counter, min: u8, max: u8) -> Option<u8> {
    attrs
        .counter_value(counter)
        .filter(|v| (min..=max).contains(v))
}

fn log_axis_bits(axis: Axis) -> u8 {
    match axis {
        Axis::Y => 0x0,
        Axis::X => 0x4,
        Axis::Z => 0x8,
        Axis::Bark => 0xC,
    }
}

fn slab_kinds() -> Vec<SubType> {
    SlabType::ALL.iter().map(|&t| SubType::Slab(t)).collect()
}

fn slab_code(kind: SubType) -> Option<u8> {
    match kind {
        SubType::Slab(t) => index_of(SlabType::ALL, t),
        _ => None,
    }
}

fn rail_kinds(shapes: &[RailShape]) -> Vec<SubType> {
    shapes.iter().map(|&s| SubType::Rail(s)).collect()
}

fn rail_code(kind: SubType, shapes: usize) -> Option<u8> {
    match kind {
        SubType::Rail(shape) if (shape.data() as usize) < shapes => Some(shape.data()),
        _ => None,
    }
}

/// Inverse of [`vine_bits`].
fn vine_faces(bits: u8) -> FaceSet {
    let mut faces = FaceSet::EMPTY;
    for (i, &face) in BlockFace::HORIZONTAL.iter().enumerate() {
        faces = faces.with(face, bits & (1 << i) != 0);
    }
    faces
}

/// S1 W2 N4 E8.
fn vine_bits(faces: FaceSet) -> Option<u8> {
    if !faces.iter().all(BlockFace::is_horizontal) {
        return None;
    }
    Some(
        BlockFace::HORIZONTAL
            .iter()
            .enumerate()
            .filter(|&(_, &f)| faces.contains(f))
            .fold(0, |bits, (i, _)| bits | (1 << i)),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn layouts() -> Vec<Layout> {
        let mut layouts: Vec<Layout> = Vec::new();
        for block in crate::blocks::BLOCK_TYPES {
            if !layouts.contains(&block.layout) {
                layouts.push(block.layout);
            }
        }
        layouts
    }

    #[test]
    fn every_state_encodes_into_a_nibble() {
        for layout in layouts() {
            for attrs in layout.states() {
                let data = layout
                    .encode(&attrs)
                    .unwrap_or_else(|| panic!("{layout:?} cannot encode {attrs:?}"));
                assert!(data < 16, "{layout:?} encodes {attrs:?} as {data}");
            }
        }
    }

    #[test]
    fn encoding_is_injective() {
        for layout in layouts() {
            let states = layout.states();
            let distinct_states: HashSet<_> = states.iter().collect();
            assert_eq!(
                distinct_states.len(),
                states.len(),
                "{layout:?} repeats a state"
            );

            let encoded: HashSet<u8> = states.iter().filter_map(|a| layout.encode(a)).collect();
            assert_eq!(
                encoded.len(),
                states.len(),
                "{layout:?} has colliding data values"
            );
        }
    }

    #[test]
    fn layouts_fit_the_nibble() {
        for layout in layouts() {
            assert!(layout.states().len() <= 16, "{layout:?}");
        }
    }

    #[test]
    fn combine_falls_back_to_zero() {
        let stairs = Attributes::EMPTY
            .with_facing(BlockFace::Up)
            .with_half(BlockHalf::Top);
        assert_eq!(Layout::Stairs.encode(&stairs), None);
        assert_eq!(Layout::Stairs.combine(&stairs), 0);

        let valid = stairs.with_facing(BlockFace::North);
        assert_eq!(Layout::Stairs.combine(&valid), 0x3 | 0x4);
    }

    #[test]
    fn powered_rail_bits() {
        let flat = Attributes::EMPTY
            .with_kind(SubType::Rail(RailShape::FlatNorthSouth))
            .with_flag(Flag::Powered, false);
        assert_eq!(Layout::PoweredRail.encode(&flat), Some(0x00));

        let ascending = Attributes::EMPTY
            .with_kind(SubType::Rail(RailShape::AscendingEast))
            .with_flag(Flag::Powered, true);
        assert_eq!(Layout::PoweredRail.encode(&ascending), Some(0x02 | 0x08));

        let curved = flat.with_kind(SubType::Rail(RailShape::CurvedNorthEast));
        assert_eq!(Layout::PoweredRail.encode(&curved), None);
        let curved = Attributes::EMPTY.with_kind(SubType::Rail(RailShape::CurvedNorthEast));
        assert_eq!(Layout::Rail.encode(&curved), Some(9));
    }

    #[test]
    fn door_halves() {
        let lower = Attributes::EMPTY
            .with_half(BlockHalf::Bottom)
            .with_facing(BlockFace::North)
            .with_flag(Flag::Open, true);
        assert_eq!(Layout::Door.encode(&lower), Some(0x3 | 0x4));

        let upper = Attributes::EMPTY
            .with_half(BlockHalf::Top)
            .with_kind(SubType::Hinge(DoorHinge::Right))
            .with_flag(Flag::Powered, true);
        assert_eq!(Layout::Door.encode(&upper), Some(0x8 | 0x1 | 0x2));
        assert_eq!(Layout::Door.states().len(), 12);
    }

    #[test]
    fn log_axis_and_wood() {
        let log = Attributes::EMPTY
            .with_wood(WoodType::Birch)
            .with_axis(Axis::Z);
        assert_eq!(Layout::Log(WoodSet::Primary).encode(&log), Some(0x2 | 0x8));
        assert_eq!(Layout::Log(WoodSet::Secondary).encode(&log), None);

        let dark_oak = log.with_wood(WoodType::DarkOak).with_axis(Axis::Bark);
        let secondary = Layout::Log(WoodSet::Secondary);
        assert_eq!(secondary.encode(&dark_oak), Some(0x1 | 0xC));
    }

    #[test]
    fn leaves_store_inverted_decay_flag() {
        let leaves = Attributes::EMPTY
            .with_wood(WoodType::Oak)
            .with_flag(Flag::Decayable, true)
            .with_flag(Flag::CheckDecay, false);
        let layout = Layout::Leaves(WoodSet::Primary);
        assert_eq!(layout.encode(&leaves), Some(0));
        let persistent = leaves.with_flag(Flag::Decayable, false);
        assert_eq!(layout.encode(&persistent), Some(0x4));
    }

    #[test]
    fn vine_bitmask() {
        let vine = Attributes::EMPTY.with_faces(FaceSet::of(&[BlockFace::South, BlockFace::East]));
        assert_eq!(Layout::Vine.encode(&vine), Some(0x1 | 0x8));
        let bad = Attributes::EMPTY.with_faces(FaceSet::of(&[BlockFace::Up]));
        assert_eq!(Layout::Vine.encode(&bad), None);
    }

    #[test]
    fn tripwire_flags() {
        let wire = Attributes::EMPTY
            .with_flag(Flag::Powered, true)
            .with_flag(Flag::Suspended, false)
            .with_flag(Flag::Attached, true)
            .with_flag(Flag::Disarmed, false);
        assert_eq!(Layout::Tripwire.encode(&wire), Some(0x1 | 0x4));
        assert_eq!(Layout::Tripwire.states().len(), 16);
    }

    #[test]
    fn anvil_and_cocoa_shift_their_counters() {
        let anvil = Attributes::EMPTY
            .with_facing(BlockFace::East)
            .with_counter(Counter::Damage, 2);
        assert_eq!(Layout::Anvil.encode(&anvil), Some(0x3 | (2 << 2)));
        let cracked = anvil.with_counter(Counter::Damage, 3);
        assert_eq!(Layout::Anvil.encode(&cracked), None);

        let cocoa = Attributes::EMPTY
            .with_facing(BlockFace::West)
            .with_counter(Counter::Age, 1);
        assert_eq!(Layout::Cocoa.encode(&cocoa), Some(0x1 | 0x4));
    }

    #[test]
    fn hopper_stores_disabled_bit() {
        let hopper = Attributes::EMPTY
            .with_facing(BlockFace::Down)
            .with_flag(Flag::Enabled, true);
        assert_eq!(Layout::Hopper.encode(&hopper), Some(0));
        assert_eq!(
            Layout::Hopper.encode(&hopper.with_flag(Flag::Enabled, false)),
            Some(0x8)
        );
        let upward = hopper.with_facing(BlockFace::Up);
        assert_eq!(Layout::Hopper.encode(&upward), None);
    }

    #[test]
    fn quartz_pillars() {
        let pillar = Attributes::EMPTY
            .with_kind(SubType::Quartz(QuartzType::Pillar))
            .with_axis(Axis::X);
        assert_eq!(Layout::Quartz.encode(&pillar), Some(3));
        let chiseled = Attributes::EMPTY.with_kind(SubType::Quartz(QuartzType::Chiseled));
        assert_eq!(Layout::Quartz.encode(&chiseled), Some(1));
        assert_eq!(Layout::Quartz.encode(&chiseled.with_axis(Axis::Y)), None);
    }

    #[test]
    fn counter_offsets_by_minimum() {
        let snow = Layout::counter(Counter::Layers, 1, 8);
        let layers = |n| Attributes::EMPTY.with_counter(Counter::Layers, n);
        assert_eq!(snow.encode(&layers(1)), Some(0));
        assert_eq!(snow.encode(&layers(8)), Some(7));
        assert_eq!(snow.encode(&layers(0)), None);
        let aged = Attributes::EMPTY.with_counter(Counter::Age, 1);
        assert_eq!(snow.encode(&aged), None);
    }

    #[test]
    fn torch_and_button_codes() {
        let up = Attributes::EMPTY.with_facing(BlockFace::Up);
        assert_eq!(Layout::Torch.encode(&up), Some(5));
        assert_eq!(
            Layout::Button.encode(&up.with_flag(Flag::Powered, true)),
            Some(5 | 0x8)
        );
        assert_eq!(Layout::Torch.encode(&up.with_facing(BlockFace::Down)), None);
    }
}
