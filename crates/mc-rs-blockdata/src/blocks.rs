//! The legacy block table: ids 0..=197 with their shared properties.
//!
//! Hardness and blast resistance follow the Java Edition 1.8 values.

use crate::attribute::{Counter as C, Flag};
use crate::block_type::BlockType;
use crate::layout::Layout::{self, *};
use crate::layout::{Family, WoodSet};

/// Defines one `pub const NAME: u8` per block and the static table.
macro_rules! blocks {
    (
        $(
            $name:ident / $id:literal : $ns:literal,
            $display:literal, $hardness:expr, $resistance:expr, $layout:expr;
        )*
    ) => {
        $(pub const $name: u8 = $id;)*

        /// Every built-in block type, ascending by id.
        pub static BLOCK_TYPES: &[BlockType] = &[
            $(BlockType::new(
                $id,
                stringify!($name),
                concat!("minecraft:", $ns),
                $display,
                $hardness,
                $resistance,
                $layout,
            ),)*
        ];
    };
}

const LIQUID: Layout = Layout::counter(C::Level, 0, 15);
const AGE_15: Layout = Layout::counter(C::Age, 0, 15);
const AGE_7: Layout = Layout::counter(C::Age, 0, 7);
const AGE_3: Layout = Layout::counter(C::Age, 0, 3);
const POWER_15: Layout = Layout::counter(C::Power, 0, 15);
const ROTATION: Layout = Layout::counter(C::Rotation, 0, 15);
const MOISTURE: Layout = Layout::counter(C::Moisture, 0, 7);
const SNOW_LAYERS: Layout = Layout::counter(C::Layers, 1, 8);
const CAKE_BITES: Layout = Layout::counter(C::Bites, 0, 6);
const CAULDRON_LEVEL: Layout = Layout::counter(C::Level, 0, 3);

blocks! {
    AIR/0: "air", "Air", 0.0, 0.0, Simple;
    STONE/1: "stone", "Stone", 1.5, 30.0, SubTypes(Family::Stone);
    GRASS/2: "grass", "Grass Block", 0.6, 3.0, Simple;
    DIRT/3: "dirt", "Dirt", 0.5, 2.5, SubTypes(Family::Dirt);
    COBBLESTONE/4: "cobblestone", "Cobblestone", 2.0, 30.0, Simple;
    PLANKS/5: "planks", "Wood Planks", 2.0, 15.0, Planks;
    SAPLING/6: "sapling", "Sapling", 0.0, 0.0, Sapling;
    BEDROCK/7: "bedrock", "Bedrock", -1.0, 18_000_000.0, Simple;
    FLOWING_WATER/8: "flowing_water", "Water", 100.0, 500.0, LIQUID;
    WATER/9: "water", "Stationary Water", 100.0, 500.0, LIQUID;
    FLOWING_LAVA/10: "flowing_lava", "Lava", 100.0, 500.0, LIQUID;
    LAVA/11: "lava", "Stationary Lava", 100.0, 500.0, LIQUID;
    SAND/12: "sand", "Sand", 0.5, 2.5, SubTypes(Family::Sand);
    GRAVEL/13: "gravel", "Gravel", 0.6, 3.0, Simple;
    GOLD_ORE/14: "gold_ore", "Gold Ore", 3.0, 15.0, Simple;
    IRON_ORE/15: "iron_ore", "Iron Ore", 3.0, 15.0, Simple;
    COAL_ORE/16: "coal_ore", "Coal Ore", 3.0, 15.0, Simple;
    LOG/17: "log", "Wood", 2.0, 10.0, Log(WoodSet::Primary);
    LEAVES/18: "leaves", "Leaves", 0.2, 1.0, Leaves(WoodSet::Primary);
    SPONGE/19: "sponge", "Sponge", 0.6, 3.0, Toggle(Flag::Wet);
    GLASS/20: "glass", "Glass", 0.3, 1.5, Simple;
    LAPIS_ORE/21: "lapis_ore", "Lapis Lazuli Ore", 3.0, 15.0, Simple;
    LAPIS_BLOCK/22: "lapis_block", "Lapis Lazuli Block", 3.0, 15.0, Simple;
    DISPENSER/23: "dispenser", "Dispenser", 3.5, 17.5, Directional;
    SANDSTONE/24: "sandstone", "Sandstone", 0.8, 4.0, SubTypes(Family::Sandstone);
    NOTEBLOCK/25: "noteblock", "Note Block", 0.8, 4.0, Simple;
    BED/26: "bed", "Bed", 0.2, 1.0, Bed;
    GOLDEN_RAIL/27: "golden_rail", "Powered Rail", 0.7, 3.5, PoweredRail;
    DETECTOR_RAIL/28: "detector_rail", "Detector Rail", 0.7, 3.5, PoweredRail;
    STICKY_PISTON/29: "sticky_piston", "Sticky Piston", 0.5, 2.5, Piston;
    WEB/30: "web", "Cobweb", 4.0, 20.0, Simple;
    TALLGRASS/31: "tallgrass", "Tall Grass", 0.0, 0.0, SubTypes(Family::TallGrass);
    DEADBUSH/32: "deadbush", "Dead Bush", 0.0, 0.0, Simple;
    PISTON/33: "piston", "Piston", 0.5, 2.5, Piston;
    PISTON_HEAD/34: "piston_head", "Piston Head", 0.5, 2.5, PistonHead;
    WOOL/35: "wool", "Wool", 0.8, 4.0, Colored;
    PISTON_EXTENSION/36: "piston_extension", "Moving Piston", -1.0, 0.0, PistonHead;
    YELLOW_FLOWER/37: "yellow_flower", "Dandelion", 0.0, 0.0, Simple;
    RED_FLOWER/38: "red_flower", "Flower", 0.0, 0.0, SubTypes(Family::Flower);
    BROWN_MUSHROOM/39: "brown_mushroom", "Brown Mushroom", 0.0, 0.0, Simple;
    RED_MUSHROOM/40: "red_mushroom", "Red Mushroom", 0.0, 0.0, Simple;
    GOLD_BLOCK/41: "gold_block", "Block of Gold", 3.0, 30.0, Simple;
    IRON_BLOCK/42: "iron_block", "Block of Iron", 5.0, 30.0, Simple;
    DOUBLE_STONE_SLAB/43: "double_stone_slab", "Double Stone Slab", 2.0, 30.0, DoubleSlab;
    STONE_SLAB/44: "stone_slab", "Stone Slab", 2.0, 30.0, Slab;
    BRICK_BLOCK/45: "brick_block", "Bricks", 2.0, 30.0, Simple;
    TNT/46: "tnt", "TNT", 0.0, 0.0, Toggle(Flag::Explode);
    BOOKSHELF/47: "bookshelf", "Bookshelf", 1.5, 7.5, Simple;
    MOSSY_COBBLESTONE/48: "mossy_cobblestone", "Moss Stone", 2.0, 30.0, Simple;
    OBSIDIAN/49: "obsidian", "Obsidian", 50.0, 6000.0, Simple;
    TORCH/50: "torch", "Torch", 0.0, 0.0, Torch;
    FIRE/51: "fire", "Fire", 0.0, 0.0, AGE_15;
    MOB_SPAWNER/52: "mob_spawner", "Monster Spawner", 5.0, 25.0, Simple;
    OAK_STAIRS/53: "oak_stairs", "Oak Wood Stairs", 2.0, 15.0, Stairs;
    CHEST/54: "chest", "Chest", 2.5, 12.5, Wall;
    REDSTONE_WIRE/55: "redstone_wire", "Redstone Wire", 0.0, 0.0, POWER_15;
    DIAMOND_ORE/56: "diamond_ore", "Diamond Ore", 3.0, 15.0, Simple;
    DIAMOND_BLOCK/57: "diamond_block", "Block of Diamond", 5.0, 30.0, Simple;
    CRAFTING_TABLE/58: "crafting_table", "Crafting Table", 2.5, 12.5, Simple;
    WHEAT/59: "wheat", "Crops", 0.0, 0.0, AGE_7;
    FARMLAND/60: "farmland", "Farmland", 0.6, 3.0, MOISTURE;
    FURNACE/61: "furnace", "Furnace", 3.5, 17.5, Wall;
    LIT_FURNACE/62: "lit_furnace", "Burning Furnace", 3.5, 17.5, Wall;
    STANDING_SIGN/63: "standing_sign", "Sign", 1.0, 5.0, ROTATION;
    WOODEN_DOOR/64: "wooden_door", "Oak Door", 3.0, 15.0, Door;
    LADDER/65: "ladder", "Ladder", 0.4, 2.0, Wall;
    RAIL/66: "rail", "Rail", 0.7, 3.5, Rail;
    STONE_STAIRS/67: "stone_stairs", "Cobblestone Stairs", 2.0, 30.0, Stairs;
    WALL_SIGN/68: "wall_sign", "Wall Sign", 1.0, 5.0, Wall;
    LEVER/69: "lever", "Lever", 0.5, 2.5, Lever;
    STONE_PRESSURE_PLATE/70: "stone_pressure_plate",
        "Stone Pressure Plate", 0.5, 2.5, Toggle(Flag::Powered);
    IRON_DOOR/71: "iron_door", "Iron Door", 5.0, 25.0, Door;
    WOODEN_PRESSURE_PLATE/72: "wooden_pressure_plate",
        "Wooden Pressure Plate", 0.5, 2.5, Toggle(Flag::Powered);
    REDSTONE_ORE/73: "redstone_ore", "Redstone Ore", 3.0, 15.0, Simple;
    LIT_REDSTONE_ORE/74: "lit_redstone_ore", "Glowing Redstone Ore", 3.0, 15.0, Simple;
    UNLIT_REDSTONE_TORCH/75: "unlit_redstone_torch", "Redstone Torch (inactive)", 0.0, 0.0, Torch;
    REDSTONE_TORCH/76: "redstone_torch", "Redstone Torch", 0.0, 0.0, Torch;
    STONE_BUTTON/77: "stone_button", "Stone Button", 0.5, 2.5, Button;
    SNOW_LAYER/78: "snow_layer", "Snow", 0.1, 0.5, SNOW_LAYERS;
    ICE/79: "ice", "Ice", 0.5, 2.5, Simple;
    SNOW/80: "snow", "Snow Block", 0.2, 1.0, Simple;
    CACTUS/81: "cactus", "Cactus", 0.4, 2.0, AGE_15;
    CLAY/82: "clay", "Clay", 0.6, 3.0, Simple;
    REEDS/83: "reeds", "Sugar Cane", 0.0, 0.0, AGE_15;
    JUKEBOX/84: "jukebox", "Jukebox", 2.0, 30.0, Toggle(Flag::HasRecord);
    FENCE/85: "fence", "Oak Fence", 2.0, 15.0, Simple;
    PUMPKIN/86: "pumpkin", "Pumpkin", 1.0, 5.0, Horizontal;
    NETHERRACK/87: "netherrack", "Netherrack", 0.4, 2.0, Simple;
    SOUL_SAND/88: "soul_sand", "Soul Sand", 0.5, 2.5, Simple;
    GLOWSTONE/89: "glowstone", "Glowstone", 0.3, 1.5, Simple;
    PORTAL/90: "portal", "Nether Portal", -1.0, 0.0, Portal;
    LIT_PUMPKIN/91: "lit_pumpkin", "Jack o'Lantern", 1.0, 5.0, Horizontal;
    CAKE/92: "cake", "Cake", 0.5, 2.5, CAKE_BITES;
    UNPOWERED_REPEATER/93: "unpowered_repeater", "Redstone Repeater (inactive)", 0.0, 0.0, Repeater;
    POWERED_REPEATER/94: "powered_repeater", "Redstone Repeater (active)", 0.0, 0.0, Repeater;
    STAINED_GLASS/95: "stained_glass", "Stained Glass", 0.3, 1.5, Colored;
    TRAPDOOR/96: "trapdoor", "Wooden Trapdoor", 3.0, 15.0, Trapdoor;
    MONSTER_EGG/97: "monster_egg", "Monster Egg", 0.75, 3.75, SubTypes(Family::MonsterEgg);
    STONEBRICK/98: "stonebrick", "Stone Bricks", 1.5, 30.0, SubTypes(Family::StoneBrick);
    BROWN_MUSHROOM_BLOCK/99: "brown_mushroom_block",
        "Brown Mushroom Block", 0.2, 1.0, SubTypes(Family::Mushroom);
    RED_MUSHROOM_BLOCK/100: "red_mushroom_block",
        "Red Mushroom Block", 0.2, 1.0, SubTypes(Family::Mushroom);
    IRON_BARS/101: "iron_bars", "Iron Bars", 5.0, 30.0, Simple;
    GLASS_PANE/102: "glass_pane", "Glass Pane", 0.3, 1.5, Simple;
    MELON_BLOCK/103: "melon_block", "Melon", 1.0, 5.0, Simple;
    PUMPKIN_STEM/104: "pumpkin_stem", "Pumpkin Stem", 0.0, 0.0, AGE_7;
    MELON_STEM/105: "melon_stem", "Melon Stem", 0.0, 0.0, AGE_7;
    VINE/106: "vine", "Vines", 0.2, 1.0, Vine;
    FENCE_GATE/107: "fence_gate", "Oak Fence Gate", 2.0, 15.0, FenceGate;
    BRICK_STAIRS/108: "brick_stairs", "Brick Stairs", 2.0, 30.0, Stairs;
    STONE_BRICK_STAIRS/109: "stone_brick_stairs", "Stone Brick Stairs", 1.5, 30.0, Stairs;
    MYCELIUM/110: "mycelium", "Mycelium", 0.6, 3.0, Simple;
    WATERLILY/111: "waterlily", "Lily Pad", 0.0, 0.0, Simple;
    NETHER_BRICK/112: "nether_brick", "Nether Brick", 2.0, 30.0, Simple;
    NETHER_BRICK_FENCE/113: "nether_brick_fence", "Nether Brick Fence", 2.0, 30.0, Simple;
    NETHER_BRICK_STAIRS/114: "nether_brick_stairs", "Nether Brick Stairs", 2.0, 30.0, Stairs;
    NETHER_WART/115: "nether_wart", "Nether Wart", 0.0, 0.0, AGE_3;
    ENCHANTING_TABLE/116: "enchanting_table", "Enchantment Table", 5.0, 6000.0, Simple;
    BREWING_STAND/117: "brewing_stand", "Brewing Stand", 0.5, 2.5, BrewingStand;
    CAULDRON/118: "cauldron", "Cauldron", 2.0, 10.0, CAULDRON_LEVEL;
    END_PORTAL/119: "end_portal", "End Portal", -1.0, 18_000_000.0, Simple;
    END_PORTAL_FRAME/120: "end_portal_frame",
        "End Portal Frame", -1.0, 18_000_000.0, EndPortalFrame;
    END_STONE/121: "end_stone", "End Stone", 3.0, 45.0, Simple;
    DRAGON_EGG/122: "dragon_egg", "Dragon Egg", 3.0, 45.0, Simple;
    REDSTONE_LAMP/123: "redstone_lamp", "Redstone Lamp (inactive)", 0.3, 1.5, Simple;
    LIT_REDSTONE_LAMP/124: "lit_redstone_lamp", "Redstone Lamp (active)", 0.3, 1.5, Simple;
    DOUBLE_WOODEN_SLAB/125: "double_wooden_slab", "Double Wood Slab", 2.0, 15.0, DoubleWoodSlab;
    WOODEN_SLAB/126: "wooden_slab", "Wood Slab", 2.0, 15.0, WoodSlab;
    COCOA/127: "cocoa", "Cocoa", 0.2, 15.0, Cocoa;
    SANDSTONE_STAIRS/128: "sandstone_stairs", "Sandstone Stairs", 0.8, 4.0, Stairs;
    EMERALD_ORE/129: "emerald_ore", "Emerald Ore", 3.0, 15.0, Simple;
    ENDER_CHEST/130: "ender_chest", "Ender Chest", 22.5, 3000.0, Wall;
    TRIPWIRE_HOOK/131: "tripwire_hook", "Tripwire Hook", 0.0, 0.0, TripwireHook;
    TRIPWIRE/132: "tripwire", "Tripwire", 0.0, 0.0, Tripwire;
    EMERALD_BLOCK/133: "emerald_block", "Block of Emerald", 5.0, 30.0, Simple;
    SPRUCE_STAIRS/134: "spruce_stairs", "Spruce Wood Stairs", 2.0, 15.0, Stairs;
    BIRCH_STAIRS/135: "birch_stairs", "Birch Wood Stairs", 2.0, 15.0, Stairs;
    JUNGLE_STAIRS/136: "jungle_stairs", "Jungle Wood Stairs", 2.0, 15.0, Stairs;
    COMMAND_BLOCK/137: "command_block",
        "Command Block", -1.0, 18_000_000.0, Toggle(Flag::Triggered);
    BEACON/138: "beacon", "Beacon", 3.0, 15.0, Simple;
    COBBLESTONE_WALL/139: "cobblestone_wall", "Cobblestone Wall", 2.0, 30.0, SubTypes(Family::Wall);
    FLOWER_POT/140: "flower_pot", "Flower Pot", 0.0, 0.0, Simple;
    CARROTS/141: "carrots", "Carrots", 0.0, 0.0, AGE_7;
    POTATOES/142: "potatoes", "Potatoes", 0.0, 0.0, AGE_7;
    WOODEN_BUTTON/143: "wooden_button", "Wooden Button", 0.5, 2.5, Button;
    SKULL/144: "skull", "Mob Head", 1.0, 5.0, Skull;
    ANVIL/145: "anvil", "Anvil", 5.0, 6000.0, Anvil;
    TRAPPED_CHEST/146: "trapped_chest", "Trapped Chest", 2.5, 12.5, Wall;
    LIGHT_WEIGHTED_PRESSURE_PLATE/147: "light_weighted_pressure_plate",
        "Weighted Pressure Plate (Light)", 0.5, 2.5, POWER_15;
    HEAVY_WEIGHTED_PRESSURE_PLATE/148: "heavy_weighted_pressure_plate",
        "Weighted Pressure Plate (Heavy)", 0.5, 2.5, POWER_15;
    UNPOWERED_COMPARATOR/149: "unpowered_comparator",
        "Redstone Comparator (inactive)", 0.0, 0.0, Comparator;
    POWERED_COMPARATOR/150: "powered_comparator",
        "Redstone Comparator (active)", 0.0, 0.0, Comparator;
    DAYLIGHT_DETECTOR/151: "daylight_detector", "Daylight Sensor", 0.2, 1.0, POWER_15;
    REDSTONE_BLOCK/152: "redstone_block", "Block of Redstone", 5.0, 30.0, Simple;
    QUARTZ_ORE/153: "quartz_ore", "Nether Quartz Ore", 3.0, 15.0, Simple;
    HOPPER/154: "hopper", "Hopper", 3.0, 24.0, Hopper;
    QUARTZ_BLOCK/155: "quartz_block", "Block of Quartz", 0.8, 4.0, Quartz;
    QUARTZ_STAIRS/156: "quartz_stairs", "Quartz Stairs", 0.8, 4.0, Stairs;
    ACTIVATOR_RAIL/157: "activator_rail", "Activator Rail", 0.7, 3.5, PoweredRail;
    DROPPER/158: "dropper", "Dropper", 3.5, 17.5, Directional;
    STAINED_HARDENED_CLAY/159: "stained_hardened_clay", "Stained Clay", 1.25, 21.0, Colored;
    STAINED_GLASS_PANE/160: "stained_glass_pane", "Stained Glass Pane", 0.3, 1.5, Colored;
    LEAVES2/161: "leaves2", "Leaves (Acacia/Dark Oak)", 0.2, 1.0, Leaves(WoodSet::Secondary);
    LOG2/162: "log2", "Wood (Acacia/Dark Oak)", 2.0, 10.0, Log(WoodSet::Secondary);
    ACACIA_STAIRS/163: "acacia_stairs", "Acacia Wood Stairs", 2.0, 15.0, Stairs;
    DARK_OAK_STAIRS/164: "dark_oak_stairs", "Dark Oak Wood Stairs", 2.0, 15.0, Stairs;
    SLIME/165: "slime", "Slime Block", 0.0, 0.0, Simple;
    BARRIER/166: "barrier", "Barrier", -1.0, 18_000_003.0, Simple;
    IRON_TRAPDOOR/167: "iron_trapdoor", "Iron Trapdoor", 5.0, 25.0, Trapdoor;
    PRISMARINE/168: "prismarine", "Prismarine", 1.5, 30.0, SubTypes(Family::Prismarine);
    SEA_LANTERN/169: "sea_lantern", "Sea Lantern", 0.3, 1.5, Simple;
    HAY_BLOCK/170: "hay_block", "Hay Bale", 0.5, 2.5, Hay;
    CARPET/171: "carpet", "Carpet", 0.1, 0.5, Colored;
    HARDENED_CLAY/172: "hardened_clay", "Hardened Clay", 1.25, 21.0, Simple;
    COAL_BLOCK/173: "coal_block", "Block of Coal", 5.0, 30.0, Simple;
    PACKED_ICE/174: "packed_ice", "Packed Ice", 0.5, 2.5, Simple;
    DOUBLE_PLANT/175: "double_plant", "Large Flowers", 0.0, 0.0, DoublePlant;
    STANDING_BANNER/176: "standing_banner", "Banner", 1.0, 5.0, ROTATION;
    WALL_BANNER/177: "wall_banner", "Wall Banner", 1.0, 5.0, Wall;
    DAYLIGHT_DETECTOR_INVERTED/178: "daylight_detector_inverted",
        "Inverted Daylight Sensor", 0.2, 1.0, POWER_15;
    RED_SANDSTONE/179: "red_sandstone", "Red Sandstone", 0.8, 4.0, SubTypes(Family::Sandstone);
    RED_SANDSTONE_STAIRS/180: "red_sandstone_stairs", "Red Sandstone Stairs", 0.8, 4.0, Stairs;
    DOUBLE_STONE_SLAB2/181: "double_stone_slab2",
        "Double Red Sandstone Slab", 2.0, 30.0, DoubleRedSandstoneSlab;
    STONE_SLAB2/182: "stone_slab2", "Red Sandstone Slab", 2.0, 30.0, RedSandstoneSlab;
    SPRUCE_FENCE_GATE/183: "spruce_fence_gate", "Spruce Fence Gate", 2.0, 15.0, FenceGate;
    BIRCH_FENCE_GATE/184: "birch_fence_gate", "Birch Fence Gate", 2.0, 15.0, FenceGate;
    JUNGLE_FENCE_GATE/185: "jungle_fence_gate", "Jungle Fence Gate", 2.0, 15.0, FenceGate;
    DARK_OAK_FENCE_GATE/186: "dark_oak_fence_gate", "Dark Oak Fence Gate", 2.0, 15.0, FenceGate;
    ACACIA_FENCE_GATE/187: "acacia_fence_gate", "Acacia Fence Gate", 2.0, 15.0, FenceGate;
    SPRUCE_FENCE/188: "spruce_fence", "Spruce Fence", 2.0, 15.0, Simple;
    BIRCH_FENCE/189: "birch_fence", "Birch Fence", 2.0, 15.0, Simple;
    JUNGLE_FENCE/190: "jungle_fence", "Jungle Fence", 2.0, 15.0, Simple;
    DARK_OAK_FENCE/191: "dark_oak_fence", "Dark Oak Fence", 2.0, 15.0, Simple;
    ACACIA_FENCE/192: "acacia_fence", "Acacia Fence", 2.0, 15.0, Simple;
    SPRUCE_DOOR/193: "spruce_door", "Spruce Door", 3.0, 15.0, Door;
    BIRCH_DOOR/194: "birch_door", "Birch Door", 3.0, 15.0, Door;
    JUNGLE_DOOR/195: "jungle_door", "Jungle Door", 3.0, 15.0, Door;
    ACACIA_DOOR/196: "acacia_door", "Acacia Door", 3.0, 15.0, Door;
    DARK_OAK_DOOR/197: "dark_oak_door", "Dark Oak Door", 3.0, 15.0, Door;
}

/// Fence gate block per wood type.
pub const fn fence_gate_for(wood: crate::attribute::WoodType) -> u8 {
    use crate::attribute::WoodType::*;
    match wood {
        Oak => FENCE_GATE,
        Spruce => SPRUCE_FENCE_GATE,
        Birch => BIRCH_FENCE_GATE,
        Jungle => JUNGLE_FENCE_GATE,
        Acacia => ACACIA_FENCE_GATE,
        DarkOak => DARK_OAK_FENCE_GATE,
    }
}

/// Door block per wood type.
pub const fn door_for(wood: crate::attribute::WoodType) -> u8 {
    use crate::attribute::WoodType::*;
    match wood {
        Oak => WOODEN_DOOR,
        Spruce => SPRUCE_DOOR,
        Birch => BIRCH_DOOR,
        Jungle => JUNGLE_DOOR,
        Acacia => ACACIA_DOOR,
        DarkOak => DARK_OAK_DOOR,
    }
}

/// Wooden stairs block per wood type.
pub const fn stairs_for(wood: crate::attribute::WoodType) -> u8 {
    use crate::attribute::WoodType::*;
    match wood {
        Oak => OAK_STAIRS,
        Spruce => SPRUCE_STAIRS,
        Birch => BIRCH_STAIRS,
        Jungle => JUNGLE_STAIRS,
        Acacia => ACACIA_STAIRS,
        DarkOak => DARK_OAK_STAIRS,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_dense_and_ascending() {
        for (i, block) in BLOCK_TYPES.iter().enumerate() {
            assert_eq!(block.id as usize, i, "{} out of order", block.name);
        }
        assert_eq!(BLOCK_TYPES.len(), 198);
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = BLOCK_TYPES.iter().map(|b| b.name).collect();
        let ids: HashSet<_> = BLOCK_TYPES.iter().map(|b| b.namespaced_id).collect();
        assert_eq!(names.len(), BLOCK_TYPES.len());
        assert_eq!(ids.len(), BLOCK_TYPES.len());
    }

    #[test]
    fn namespaced_ids_match_names() {
        for block in BLOCK_TYPES {
            let expected = format!("minecraft:{}", block.name.to_ascii_lowercase());
            assert_eq!(block.namespaced_id, expected);
        }
    }

    #[test]
    fn known_constants() {
        assert_eq!(STONE, 1);
        assert_eq!(GOLDEN_RAIL, 27);
        assert_eq!(CACTUS, 81);
        assert_eq!(DARK_OAK_DOOR, 197);
        let rail = &BLOCK_TYPES[GOLDEN_RAIL as usize];
        assert_eq!(rail.display_name, "Powered Rail");
        assert_eq!(BLOCK_TYPES[OBSIDIAN as usize].blast_resistance, 6000.0);
    }

    #[test]
    fn wood_lookups_point_at_matching_layouts() {
        use crate::attribute::WoodType;
        for &wood in WoodType::ALL {
            assert_eq!(BLOCK_TYPES[fence_gate_for(wood) as usize].layout, FenceGate);
            assert_eq!(BLOCK_TYPES[door_for(wood) as usize].layout, Door);
            assert_eq!(BLOCK_TYPES[stairs_for(wood) as usize].layout, Stairs);
        }
    }
}
