use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Four-connectivity compass direction between adjacent chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkDirection {
    North,
    East,
    South,
    West,
}

impl ChunkDirection {
    /// All directions in clockwise order.
    pub const ALL: &'static [ChunkDirection] = &[
        ChunkDirection::North,
        ChunkDirection::East,
        ChunkDirection::South,
        ChunkDirection::West,
    ];

    /// The (x, y) delta to the adjacent chunk in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            ChunkDirection::North => (0, 1),
            ChunkDirection::East => (1, 0),
            ChunkDirection::South => (0, -1),
            ChunkDirection::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> ChunkDirection {
        match self {
            ChunkDirection::North => ChunkDirection::South,
            ChunkDirection::East => ChunkDirection::West,
            ChunkDirection::South => ChunkDirection::North,
            ChunkDirection::West => ChunkDirection::East,
        }
    }
}

/// Position of a chunk relative to its island's origin.
///
/// `layer` separates stacked platform levels; ground-level islands use
/// layer 0 throughout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChunkVector {
    pub x: i32,
    pub y: i32,
    pub layer: i32,
}

impl ChunkVector {
    pub const ZERO: ChunkVector = ChunkVector {
        x: 0,
        y: 0,
        layer: 0,
    };

    pub fn new(x: i32, y: i32, layer: i32) -> Self {
        Self { x, y, layer }
    }
}

impl Add<ChunkDirection> for ChunkVector {
    type Output = ChunkVector;

    /// The adjacent chunk in the given direction, on the same layer.
    fn add(self, dir: ChunkDirection) -> ChunkVector {
        let (dx, dy) = dir.offset();
        ChunkVector::new(self.x + dx, self.y + dy, self.layer)
    }
}
