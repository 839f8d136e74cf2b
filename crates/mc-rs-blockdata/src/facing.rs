//! Per-layout facing bit codes.
//!
//! Legacy data values never agreed on one facing numbering; each family of
//! blocks picked its own. A [`FaceCode`] is one such numbering.

use crate::attribute::BlockFace;

use BlockFace::{Down, East, North, South, Up, West};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceCode {
    /// D0 U1 N2 S3 W4 E5 (dispensers, pistons).
    Index,
    /// N2 S3 W4 E5 (chests, furnaces, ladders, wall signs).
    Wall,
    /// S0 W1 N2 E3 (beds, pumpkins, fence gates, diodes).
    Horizontal,
    /// E1 W2 S3 N4 U5.
    Torch,
    /// D0 E1 W2 S3 N4 U5.
    Button,
    /// E0 W1 S2 N3.
    Stairs,
    /// E0 S1 W2 N3.
    Door,
    /// N0 S1 W2 E3.
    Trapdoor,
    /// D0 N2 S3 W4 E5.
    Hopper,
    /// U1 N2 S3 W4 E5.
    Skull,
}

impl FaceCode {
    const fn table(self) -> &'static [(BlockFace, u8)] {
        match self {
            FaceCode::Index => &[
                (Down, 0),
                (Up, 1),
                (North, 2),
                (South, 3),
                (West, 4),
                (East, 5),
            ],
            FaceCode::Wall => &[(North, 2), (South, 3), (West, 4), (East, 5)],
            FaceCode::Horizontal => &[(South, 0), (West, 1), (North, 2), (East, 3)],
            FaceCode::Torch => &[(East, 1), (West, 2), (South, 3), (North, 4), (Up, 5)],
            FaceCode::Button => &[
                (Down, 0),
                (East, 1),
                (West, 2),
                (South, 3),
                (North, 4),
                (Up, 5),
            ],
            FaceCode::Stairs => &[(East, 0), (West, 1), (South, 2), (North, 3)],
            FaceCode::Door => &[(East, 0), (South, 1), (West, 2), (North, 3)],
            FaceCode::Trapdoor => &[(North, 0), (South, 1), (West, 2), (East, 3)],
            FaceCode::Hopper => &[(Down, 0), (North, 2), (South, 3), (West, 4), (East, 5)],
            FaceCode::Skull => &[(Up, 1), (North, 2), (South, 3), (West, 4), (East, 5)],
        }
    }

    /// Bits for `face`, or `None` if this code cannot express it.
    pub fn encode(self, face: BlockFace) -> Option<u8> {
        self.table()
            .iter()
            .find(|(f, _)| *f == face)
            .map(|&(_, bits)| bits)
    }

    pub fn decode(self, bits: u8) -> Option<BlockFace> {
        self.table()
            .iter()
            .find(|(_, b)| *b == bits)
            .map(|&(face, _)| face)
    }

    /// Faces this code can express, in code order.
    pub fn faces(self) -> impl Iterator<Item = BlockFace> {
        self.table().iter().map(|&(face, _)| face)
    }

    pub fn supports(self, face: BlockFace) -> bool {
        self.encode(face).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [FaceCode; 10] = [
        FaceCode::Index,
        FaceCode::Wall,
        FaceCode::Horizontal,
        FaceCode::Torch,
        FaceCode::Button,
        FaceCode::Stairs,
        FaceCode::Door,
        FaceCode::Trapdoor,
        FaceCode::Hopper,
        FaceCode::Skull,
    ];

    #[test]
    fn every_code_roundtrips() {
        for code in ALL_CODES {
            for face in code.faces() {
                let bits = code.encode(face).unwrap();
                assert_eq!(code.decode(bits), Some(face), "{code:?} {face}");
            }
        }
    }

    #[test]
    fn index_matches_face_index() {
        for &face in BlockFace::ALL {
            assert_eq!(FaceCode::Index.encode(face), Some(face.index()));
        }
    }

    #[test]
    fn horizontal_order_matches_block_face_constant() {
        let faces: Vec<_> = FaceCode::Horizontal.faces().collect();
        assert_eq!(faces, BlockFace::HORIZONTAL.to_vec());
    }

    #[test]
    fn unsupported_faces() {
        assert_eq!(FaceCode::Torch.encode(BlockFace::Down), None);
        assert_eq!(FaceCode::Hopper.encode(BlockFace::Up), None);
        assert_eq!(FaceCode::Wall.encode(BlockFace::Up), None);
        assert!(!FaceCode::Skull.supports(BlockFace::Down));
    }

    #[test]
    fn stairs_and_doors_differ() {
        assert_eq!(FaceCode::Stairs.encode(BlockFace::South), Some(2));
        assert_eq!(FaceCode::Door.encode(BlockFace::South), Some(1));
        assert_eq!(FaceCode::Trapdoor.encode(BlockFace::South), Some(1));
        assert_eq!(FaceCode::Horizontal.encode(BlockFace::South), Some(0));
    }
}
