use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Compass direction on the level grid. North is -X, east is -Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CardinalDirection {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// All four directions, in adjacency-tuple order.
pub const ALL_CARDINALS: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

impl CardinalDirection {
    /// Unit step on the XZ plane (x, z).
    pub fn offset(self) -> IVec2 {
        match self {
            CardinalDirection::North => IVec2::new(-1, 0),
            CardinalDirection::East => IVec2::new(0, -1),
            CardinalDirection::South => IVec2::new(1, 0),
            CardinalDirection::West => IVec2::new(0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::West => CardinalDirection::East,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardinalDirection::North => "North",
            CardinalDirection::East => "East",
            CardinalDirection::South => "South",
            CardinalDirection::West => "West",
        }
    }
}

/// Side of a voxel an edge wall is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    PositiveX,
    NegativeX,
    PositiveZ,
    NegativeZ,
}

impl Facing {
    /// Decode the two-bit orientation field of a MAP1 edge code.
    /// 0 is north-facing, 3 is east-facing.
    pub fn from_orientation(bits: u16) -> Self {
        match bits & 0x3 {
            0 => Facing::PositiveX,
            1 => Facing::NegativeZ,
            2 => Facing::NegativeX,
            _ => Facing::PositiveZ,
        }
    }
}
