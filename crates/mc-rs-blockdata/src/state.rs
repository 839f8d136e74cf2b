//! The attribute tuple of a single variant.

use crate::attribute::{
    Axis, BlockFace, BlockHalf, Counter, DyeColor, FaceSet, Flag, SubType, WoodType,
};

/// Declared flags plus their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlagSet {
    declared: u32,
    set: u32,
}

impl FlagSet {
    pub const fn get(self, flag: Flag) -> Option<bool> {
        if self.declared & flag.mask() == 0 {
            None
        } else {
            Some(self.set & flag.mask() != 0)
        }
    }

    #[must_use]
    pub const fn with(self, flag: Flag, value: bool) -> Self {
        let set = if value {
            self.set | flag.mask()
        } else {
            self.set & !flag.mask()
        };
        Self {
            declared: self.declared | flag.mask(),
            set,
        }
    }

    /// Declared flags, in [`Flag::ALL`] order.
    pub fn declared(self) -> impl Iterator<Item = Flag> {
        Flag::ALL
            .iter()
            .copied()
            .filter(move |f| self.declared & f.mask() != 0)
    }
}

/// Attribute values of one variant.
///
/// A field is `None` when the block type does not have that attribute, so
/// `facing: None` on an upper door half means "upper halves carry no facing",
/// not "facing unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    pub kind: Option<SubType>,
    pub wood: Option<WoodType>,
    pub color: Option<DyeColor>,
    pub half: Option<BlockHalf>,
    pub facing: Option<BlockFace>,
    pub axis: Option<Axis>,
    pub faces: Option<FaceSet>,
    pub counter: Option<(Counter, u8)>,
    pub flags: FlagSet,
}

impl Attributes {
    pub const EMPTY: Attributes = Attributes {
        kind: None,
        wood: None,
        color: None,
        half: None,
        facing: None,
        axis: None,
        faces: None,
        counter: None,
        flags: FlagSet {
            declared: 0,
            set: 0,
        },
    };

    #[must_use]
    pub const fn with_kind(mut self, kind: SubType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub const fn with_wood(mut self, wood: WoodType) -> Self {
        self.wood = Some(wood);
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: DyeColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_half(mut self, half: BlockHalf) -> Self {
        self.half = Some(half);
        self
    }

    #[must_use]
    pub const fn with_facing(mut self, facing: BlockFace) -> Self {
        self.facing = Some(facing);
        self
    }

    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    #[must_use]
    pub const fn with_faces(mut self, faces: FaceSet) -> Self {
        self.faces = Some(faces);
        self
    }

    #[must_use]
    pub const fn with_counter(mut self, counter: Counter, value: u8) -> Self {
        self.counter = Some((counter, value));
        self
    }

    #[must_use]
    pub const fn with_flag(mut self, flag: Flag, value: bool) -> Self {
        self.flags = self.flags.with(flag, value);
        self
    }

    pub const fn flag(&self, flag: Flag) -> Option<bool> {
        self.flags.get(flag)
    }

    /// Value of `counter` if this tuple carries that counter.
    pub fn counter_value(&self, counter: Counter) -> Option<u8> {
        match self.counter {
            Some((c, v)) if c == counter => Some(v),
            _ => None,
        }
    }

    /// Name tokens in canonical order. Empty for attribute-less variants.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if let Some(kind) = self.kind {
            tokens.push(kind.as_str().to_owned());
        }
        if let Some(wood) = self.wood {
            tokens.push(wood.as_str().to_owned());
        }
        if let Some(color) = self.color {
            tokens.push(color.as_str().to_owned());
        }
        if self.half == Some(BlockHalf::Top) {
            tokens.push(BlockHalf::Top.as_str().to_owned());
        }
        if let Some(facing) = self.facing {
            tokens.push(facing.as_str().to_owned());
        }
        if let Some(axis) = self.axis {
            tokens.push(axis.as_str().to_owned());
        }
        if let Some(faces) = self.faces {
            tokens.push(faces.to_string());
        }
        if let Some((counter, value)) = self.counter {
            tokens.push(format!("{}_{}", counter.as_str(), value));
        }
        for flag in self.flags.declared() {
            if self.flags.get(flag) == Some(true) {
                tokens.push(flag.as_str().to_owned());
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::RailShape;

    #[test]
    fn undeclared_flag_is_none() {
        let attrs = Attributes::EMPTY.with_flag(Flag::Powered, false);
        assert_eq!(attrs.flag(Flag::Powered), Some(false));
        assert_eq!(attrs.flag(Flag::Open), None);
    }

    #[test]
    fn flag_overwrite_keeps_declaration() {
        let attrs = Attributes::EMPTY
            .with_flag(Flag::Open, true)
            .with_flag(Flag::Open, false);
        assert_eq!(attrs.flag(Flag::Open), Some(false));
        assert_eq!(attrs.flags.declared().count(), 1);
    }

    #[test]
    fn tokens_follow_canonical_order() {
        let attrs = Attributes::EMPTY
            .with_flag(Flag::Powered, true)
            .with_kind(SubType::Rail(RailShape::AscendingEast));
        assert_eq!(attrs.tokens(), vec!["ASCENDING_EAST", "POWERED"]);
    }

    #[test]
    fn false_flags_and_bottom_half_emit_nothing() {
        let attrs = Attributes::EMPTY
            .with_half(BlockHalf::Bottom)
            .with_facing(BlockFace::North)
            .with_flag(Flag::Open, false);
        assert_eq!(attrs.tokens(), vec!["NORTH"]);
    }

    #[test]
    fn counter_value_requires_matching_counter() {
        let attrs = Attributes::EMPTY.with_counter(Counter::Age, 3);
        assert_eq!(attrs.counter_value(Counter::Age), Some(3));
        assert_eq!(attrs.counter_value(Counter::Power), None);
        assert_eq!(attrs.tokens(), vec!["AGE_3"]);
    }
}
