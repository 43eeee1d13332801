//! Compass classification of a yaw angle
//!
//! Yaw is bucketed after shifting by half a bucket, so each compass point
//! owns the sector centred on it. Yaw 0 faces south.

use crate::orientation::wrap_degrees;
use crate::FacingSource;

/// Compass direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// 4-way lookup table, indexed by 90 degree bucket
const CARDINAL: [Direction; 4] = [
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
];

/// 8-way lookup table, indexed by 45 degree bucket
const ORDINAL: [Direction; 8] = [
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
];

impl Direction {
    /// Classify yaw (degrees, any range) into one of 4 directions
    pub fn cardinal(yaw: f32) -> Self {
        bucket(&CARDINAL, yaw)
    }

    /// Classify yaw (degrees, any range) into one of 8 directions
    pub fn ordinal(yaw: f32) -> Self {
        bucket(&ORDINAL, yaw)
    }

    /// 4-way direction of anything with a facing
    pub fn cardinal_of(facing: &impl FacingSource) -> Self {
        Self::cardinal(facing.yaw())
    }

    /// 8-way direction of anything with a facing
    pub fn ordinal_of(facing: &impl FacingSource) -> Self {
        Self::ordinal(facing.yaw())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "NORTH",
            Direction::NorthEast => "NORTHEAST",
            Direction::East => "EAST",
            Direction::SouthEast => "SOUTHEAST",
            Direction::South => "SOUTH",
            Direction::SouthWest => "SOUTHWEST",
            Direction::West => "WEST",
            Direction::NorthWest => "NORTHWEST",
        };
        f.write_str(name)
    }
}

fn bucket(table: &[Direction], yaw: f32) -> Direction {
    let width = 360.0 / table.len() as f64;
    let shifted = wrap_degrees(f64::from(yaw) + width / 2.0);
    let index = (shifted / width) as usize % table.len();
    table[index]
}
