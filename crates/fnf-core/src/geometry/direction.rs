//! Compass headings and passage orientation

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the four cardinal headings, stored as compass degrees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Compass bearing: north 0, east 90, south 180, west 270
    pub const fn degrees(self) -> i32 {
        match self {
            Direction::North => 0,
            Direction::East => 90,
            Direction::South => 180,
            Direction::West => 270,
        }
    }

    /// Map a bearing back to a heading; any multiple of 360 is accepted.
    pub const fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Direction::North),
            90 => Some(Direction::East),
            180 => Some(Direction::South),
            270 => Some(Direction::West),
            _ => None,
        }
    }

    pub const fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub const fn orientation(self) -> Orientation {
        match self {
            Direction::North | Direction::South => Orientation::NorthSouth,
            Direction::East | Direction::West => Orientation::EastWest,
        }
    }
}

/// Axis a passage runs along. Reporting only; excavation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Orientation {
    #[strum(to_string = "North to South")]
    NorthSouth,
    #[strum(to_string = "East to West")]
    EastWest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_degrees_round_trip() {
        for direction in Direction::iter() {
            assert_eq!(Direction::from_degrees(direction.degrees()), Some(direction));
        }
        assert_eq!(Direction::from_degrees(-90), Some(Direction::West));
        assert_eq!(Direction::from_degrees(450), Some(Direction::East));
        assert_eq!(Direction::from_degrees(45), None);
    }

    #[test]
    fn test_turns_are_quarter_rotations() {
        for direction in Direction::iter() {
            assert_eq!((direction.right().degrees() - direction.degrees()).rem_euclid(360), 90);
            assert_eq!((direction.left().degrees() - direction.degrees()).rem_euclid(360), 270);
            assert_eq!(direction.left().right(), direction);
            assert_eq!(direction.opposite(), direction.right().right());
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Direction::North.orientation(), Orientation::NorthSouth);
        assert_eq!(Direction::South.orientation(), Orientation::NorthSouth);
        assert_eq!(Direction::East.orientation(), Orientation::EastWest);
        assert_eq!(Direction::West.orientation(), Orientation::EastWest);
    }

    #[test]
    fn test_names() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Orientation::NorthSouth.to_string(), "North to South");
        assert_eq!(Orientation::EastWest.to_string(), "East to West");
    }
}
