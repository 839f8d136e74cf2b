//! Attribute value types shared by block layouts.
//!
//! Every enum carries an upper-case token (`as_str`) used to build variant
//! names, and a case-insensitive `from_name` for the reverse direction.

use std::fmt;

/// Defines a fieldless enum with its token table.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(name))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

named_enum! {
    /// One of the six directions a block can face.
    BlockFace {
        Down => "DOWN",
        Up => "UP",
        North => "NORTH",
        South => "SOUTH",
        West => "WEST",
        East => "EAST",
    }
}

impl BlockFace {
    /// The four horizontal faces, in 1.8 horizontal-index order (S, W, N, E).
    pub const HORIZONTAL: [BlockFace; 4] = [
        BlockFace::South,
        BlockFace::West,
        BlockFace::North,
        BlockFace::East,
    ];

    /// Standard face index: 0=down, 1=up, 2=north, 3=south, 4=west, 5=east.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_horizontal(self) -> bool {
        !matches!(self, BlockFace::Down | BlockFace::Up)
    }

}

named_enum! {
    /// Dye colors in wool data order (white = 0 .. black = 15).
    DyeColor {
        White => "WHITE",
        Orange => "ORANGE",
        Magenta => "MAGENTA",
        LightBlue => "LIGHT_BLUE",
        Yellow => "YELLOW",
        Lime => "LIME",
        Pink => "PINK",
        Gray => "GRAY",
        LightGray => "LIGHT_GRAY",
        Cyan => "CYAN",
        Purple => "PURPLE",
        Blue => "BLUE",
        Brown => "BROWN",
        Green => "GREEN",
        Red => "RED",
        Black => "BLACK",
    }
}

impl DyeColor {
    /// Wool/clay/glass data value of this color.
    pub const fn data(self) -> u8 {
        self as u8
    }
}

named_enum! {
    WoodType {
        Oak => "OAK",
        Spruce => "SPRUCE",
        Birch => "BIRCH",
        Jungle => "JUNGLE",
        Acacia => "ACACIA",
        DarkOak => "DARK_OAK",
    }
}

impl WoodType {
    /// Planks/sapling/slab data value.
    pub const fn data(self) -> u8 {
        self as u8
    }

    /// Whether logs and leaves of this wood live in the second block id
    /// (`log2`, `leaves2`).
    pub const fn is_secondary(self) -> bool {
        matches!(self, WoodType::Acacia | WoodType::DarkOak)
    }
}

named_enum! {
    /// Orientation of logs, hay, portals and quartz pillars.
    /// `Bark` is the log variant with bark on all six sides.
    Axis {
        X => "X",
        Y => "Y",
        Z => "Z",
        Bark => "BARK",
    }
}

named_enum! {
    /// Upper or lower half of a slab, stair, trapdoor, door or double plant.
    BlockHalf {
        Bottom => "BOTTOM",
        Top => "TOP",
    }
}

named_enum! {
    DoorHinge {
        Left => "LEFT",
        Right => "RIGHT",
    }
}

named_enum! {
    BedPart {
        Foot => "FOOT",
        Head => "HEAD",
    }
}

named_enum! {
    StoneType {
        Stone => "STONE",
        Granite => "GRANITE",
        PolishedGranite => "POLISHED_GRANITE",
        Diorite => "DIORITE",
        PolishedDiorite => "POLISHED_DIORITE",
        Andesite => "ANDESITE",
        PolishedAndesite => "POLISHED_ANDESITE",
    }
}

named_enum! {
    DirtType {
        Dirt => "DIRT",
        CoarseDirt => "COARSE_DIRT",
        Podzol => "PODZOL",
    }
}

named_enum! {
    SandType {
        Sand => "SAND",
        RedSand => "RED_SAND",
    }
}

named_enum! {
    /// Shared by sandstone and red sandstone.
    SandstoneType {
        Normal => "NORMAL",
        Chiseled => "CHISELED",
        Smooth => "SMOOTH",
    }
}

named_enum! {
    TallGrassType {
        DeadShrub => "DEAD_SHRUB",
        TallGrass => "TALL_GRASS",
        Fern => "FERN",
    }
}

named_enum! {
    FlowerType {
        Poppy => "POPPY",
        BlueOrchid => "BLUE_ORCHID",
        Allium => "ALLIUM",
        AzureBluet => "AZURE_BLUET",
        RedTulip => "RED_TULIP",
        OrangeTulip => "ORANGE_TULIP",
        WhiteTulip => "WHITE_TULIP",
        PinkTulip => "PINK_TULIP",
        OxeyeDaisy => "OXEYE_DAISY",
    }
}

named_enum! {
    /// Stone slab materials (`stone_slab`, `double_stone_slab`).
    SlabType {
        Stone => "STONE",
        Sandstone => "SANDSTONE",
        Wood => "WOOD",
        Cobblestone => "COBBLESTONE",
        Brick => "BRICK",
        StoneBrick => "STONE_BRICK",
        NetherBrick => "NETHER_BRICK",
        Quartz => "QUARTZ",
    }
}

named_enum! {
    MonsterEggType {
        Stone => "STONE",
        Cobblestone => "COBBLESTONE",
        StoneBrick => "STONE_BRICK",
        MossyStoneBrick => "MOSSY_STONE_BRICK",
        CrackedStoneBrick => "CRACKED_STONE_BRICK",
        ChiseledStoneBrick => "CHISELED_STONE_BRICK",
    }
}

named_enum! {
    StoneBrickType {
        Normal => "NORMAL",
        Mossy => "MOSSY",
        Cracked => "CRACKED",
        Chiseled => "CHISELED",
    }
}

named_enum! {
    /// Which faces of a huge mushroom block show the cap texture.
    MushroomTexture {
        AllInside => "ALL_INSIDE",
        NorthWest => "NORTH_WEST",
        North => "NORTH",
        NorthEast => "NORTH_EAST",
        West => "WEST",
        Center => "CENTER",
        East => "EAST",
        SouthWest => "SOUTH_WEST",
        South => "SOUTH",
        SouthEast => "SOUTH_EAST",
        Stem => "STEM",
        AllOutside => "ALL_OUTSIDE",
        AllStem => "ALL_STEM",
    }
}

impl MushroomTexture {
    /// Data values skip 11..=13.
    pub const fn data(self) -> u8 {
        match self {
            MushroomTexture::AllOutside => 14,
            MushroomTexture::AllStem => 15,
            other => other as u8,
        }
    }
}

named_enum! {
    WallType {
        Cobblestone => "COBBLESTONE",
        MossyCobblestone => "MOSSY_COBBLESTONE",
    }
}

named_enum! {
    QuartzType {
        Normal => "NORMAL",
        Chiseled => "CHISELED",
        Pillar => "PILLAR",
    }
}

named_enum! {
    PrismarineType {
        Rough => "ROUGH",
        Bricks => "BRICKS",
        Dark => "DARK",
    }
}

named_enum! {
    DoublePlantType {
        Sunflower => "SUNFLOWER",
        Lilac => "LILAC",
        DoubleTallgrass => "DOUBLE_TALLGRASS",
        LargeFern => "LARGE_FERN",
        RoseBush => "ROSE_BUSH",
        Peony => "PEONY",
    }
}

named_enum! {
    /// Rail shapes in data order; only the first six are valid for powered,
    /// detector and activator rails.
    RailShape {
        FlatNorthSouth => "FLAT_NORTH_SOUTH",
        FlatEastWest => "FLAT_EAST_WEST",
        AscendingEast => "ASCENDING_EAST",
        AscendingWest => "ASCENDING_WEST",
        AscendingNorth => "ASCENDING_NORTH",
        AscendingSouth => "ASCENDING_SOUTH",
        CurvedSouthEast => "CURVED_SOUTH_EAST",
        CurvedSouthWest => "CURVED_SOUTH_WEST",
        CurvedNorthWest => "CURVED_NORTH_WEST",
        CurvedNorthEast => "CURVED_NORTH_EAST",
    }
}

impl RailShape {
    pub const fn data(self) -> u8 {
        self as u8
    }

    pub const fn is_curved(self) -> bool {
        (self as u8) >= 6
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self as u8, 2..=5)
    }
}

named_enum! {
    /// Where a lever is mounted and which way its handle points.
    LeverOrientation {
        DownX => "DOWN_X",
        East => "EAST",
        West => "WEST",
        South => "SOUTH",
        North => "NORTH",
        UpZ => "UP_Z",
        UpX => "UP_X",
        DownZ => "DOWN_Z",
    }
}

/// A block-specific sub-kind carried in [`crate::Attributes::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubType {
    Stone(StoneType),
    Dirt(DirtType),
    Sand(SandType),
    Sandstone(SandstoneType),
    TallGrass(TallGrassType),
    Flower(FlowerType),
    Slab(SlabType),
    MonsterEgg(MonsterEggType),
    StoneBrick(StoneBrickType),
    Mushroom(MushroomTexture),
    Wall(WallType),
    Quartz(QuartzType),
    Prismarine(PrismarineType),
    DoublePlant(DoublePlantType),
    Rail(RailShape),
    Lever(LeverOrientation),
    Hinge(DoorHinge),
    BedPart(BedPart),
}

impl SubType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SubType::Stone(v) => v.as_str(),
            SubType::Dirt(v) => v.as_str(),
            SubType::Sand(v) => v.as_str(),
            SubType::Sandstone(v) => v.as_str(),
            SubType::TallGrass(v) => v.as_str(),
            SubType::Flower(v) => v.as_str(),
            SubType::Slab(v) => v.as_str(),
            SubType::MonsterEgg(v) => v.as_str(),
            SubType::StoneBrick(v) => v.as_str(),
            SubType::Mushroom(v) => v.as_str(),
            SubType::Wall(v) => v.as_str(),
            SubType::Quartz(v) => v.as_str(),
            SubType::Prismarine(v) => v.as_str(),
            SubType::DoublePlant(v) => v.as_str(),
            SubType::Rail(v) => v.as_str(),
            SubType::Lever(v) => v.as_str(),
            SubType::Hinge(v) => v.as_str(),
            SubType::BedPart(v) => v.as_str(),
        }
    }
}

impl fmt::Display for SubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

named_enum! {
    /// Boolean attributes. A layout declares the flags its variants carry.
    Flag {
        Powered => "POWERED",
        Open => "OPEN",
        Extended => "EXTENDED",
        Triggered => "TRIGGERED",
        Occupied => "OCCUPIED",
        Attached => "ATTACHED",
        Suspended => "SUSPENDED",
        Disarmed => "DISARMED",
        Seamless => "SEAMLESS",
        NoDrop => "NO_DROP",
        Enabled => "ENABLED",
        Subtract => "SUBTRACT",
        Eye => "EYE",
        HasRecord => "HAS_RECORD",
        Wet => "WET",
        Decayable => "DECAYABLE",
        CheckDecay => "CHECK_DECAY",
        Explode => "EXPLODE",
        Sticky => "STICKY",
        HasBottle0 => "HAS_BOTTLE_0",
        HasBottle1 => "HAS_BOTTLE_1",
        HasBottle2 => "HAS_BOTTLE_2",
    }
}

impl Flag {
    /// Brewing stand bottle slots, in slot order.
    pub const BOTTLES: [Flag; 3] = [Flag::HasBottle0, Flag::HasBottle1, Flag::HasBottle2];

    pub(crate) const fn mask(self) -> u32 {
        1 << (self as u32)
    }
}

named_enum! {
    /// Integer attributes. A variant carries at most one.
    Counter {
        Age => "AGE",
        Level => "LEVEL",
        Power => "POWER",
        Rotation => "ROTATION",
        Delay => "DELAY",
        Layers => "LAYERS",
        Bites => "BITES",
        Moisture => "MOISTURE",
        Damage => "DAMAGE",
        Stage => "STAGE",
    }
}

/// A set of horizontal faces, used by vines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const EMPTY: FaceSet = FaceSet(0);

    pub fn of(faces: &[BlockFace]) -> Self {
        faces.iter().fold(Self::EMPTY, |set, &f| set.with(f, true))
    }

    pub const fn contains(self, face: BlockFace) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    #[must_use]
    pub const fn with(self, face: BlockFace, present: bool) -> Self {
        if present {
            FaceSet(self.0 | (1 << face.index()))
        } else {
            FaceSet(self.0 & !(1 << face.index()))
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Faces in the set, in [`BlockFace::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = BlockFace> {
        BlockFace::ALL
            .iter()
            .copied()
            .filter(move |&f| self.contains(f))
    }
}

impl fmt::Display for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        for (i, face) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }
            f.write_str(face.as_str())?;
        }
        Ok(())
    }
}
