//! Integer grid coordinates

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Direction;

/// A grid cell. `z` is the dungeon level; the entry level is 1 and
/// higher values are further up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Step `distance` cells along `direction`. North is +y, east is +x.
    pub const fn moved(self, distance: i32, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y + distance, self.z),
            Direction::South => Self::new(self.x, self.y - distance, self.z),
            Direction::East => Self::new(self.x + distance, self.y, self.z),
            Direction::West => Self::new(self.x - distance, self.y, self.z),
        }
    }

    /// Pivot used when a digger facing `heading` turns left.
    ///
    /// A digger stands one cell past the last cell it dug. Turning moves it
    /// diagonally back so it lands beside that last cell, on the side it
    /// is turning towards.
    pub const fn rotated_left(self, heading: Direction) -> Self {
        match heading {
            Direction::North => Self::new(self.x - 1, self.y - 1, self.z),
            Direction::South => Self::new(self.x + 1, self.y + 1, self.z),
            Direction::East => Self::new(self.x - 1, self.y + 1, self.z),
            Direction::West => Self::new(self.x + 1, self.y - 1, self.z),
        }
    }

    /// Pivot used when a digger facing `heading` turns right.
    pub const fn rotated_right(self, heading: Direction) -> Self {
        match heading {
            Direction::North => Self::new(self.x + 1, self.y - 1, self.z),
            Direction::South => Self::new(self.x - 1, self.y + 1, self.z),
            Direction::East => Self::new(self.x - 1, self.y - 1, self.z),
            Direction::West => Self::new(self.x + 1, self.y + 1, self.z),
        }
    }

    /// Smallest coordinate on each axis
    pub fn componentwise_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    pub fn componentwise_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

/// Level-major order: by `z`, then `y`, then `x`.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.z
            .cmp(&other.z)
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_moved() {
        let origin = Point::new(0, 0, 1);
        assert_eq!(origin.moved(3, Direction::North), Point::new(0, 3, 1));
        assert_eq!(origin.moved(3, Direction::South), Point::new(0, -3, 1));
        assert_eq!(origin.moved(3, Direction::East), Point::new(3, 0, 1));
        assert_eq!(origin.moved(3, Direction::West), Point::new(-3, 0, 1));
    }

    #[test]
    fn test_rotation_lands_beside_last_dug_cell() {
        for heading in Direction::iter() {
            let last_dug = Point::new(4, -2, 1);
            let digger = last_dug.moved(1, heading);

            let left = digger.rotated_left(heading);
            assert_eq!(left, last_dug.moved(1, heading.left()));

            let right = digger.rotated_right(heading);
            assert_eq!(right, last_dug.moved(1, heading.right()));
        }
    }

    #[test]
    fn test_level_major_ordering() {
        let mut points = vec![
            Point::new(5, 0, 2),
            Point::new(-1, 3, 1),
            Point::new(2, 3, 1),
            Point::new(9, -4, 1),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Point::new(9, -4, 1),
                Point::new(-1, 3, 1),
                Point::new(2, 3, 1),
                Point::new(5, 0, 2),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-7, 0, 1).to_string(), "(-7, 0, 1)");
    }
}
