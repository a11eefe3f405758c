//! Tiles and their walls

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::geometry::{Direction, Point};

/// Open floor or filled rock
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    #[default]
    Empty,
    Solid,
}

/// What stands on one edge of a tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    #[default]
    None,
    Wall,
    Door,
    SecretDoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Walls {
    pub north: WallType,
    pub east: WallType,
    pub south: WallType,
    pub west: WallType,
}

impl Walls {
    pub fn set(&mut self, direction: Direction, wall: WallType) {
        match direction {
            Direction::North => self.north = wall,
            Direction::East => self.east = wall,
            Direction::South => self.south = wall,
            Direction::West => self.west = wall,
        }
    }
}

/// One cell of the dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub point: Point,
    pub tile_type: TileType,
    pub walls: Walls,
}

impl Tile {
    pub const fn new(point: Point, tile_type: TileType) -> Self {
        Self {
            point,
            tile_type,
            walls: Walls {
                north: WallType::None,
                east: WallType::None,
                south: WallType::None,
                west: WallType::None,
            },
        }
    }

    pub const fn empty(point: Point) -> Self {
        Self::new(point, TileType::Empty)
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.tile_type, TileType::Empty)
    }
}
