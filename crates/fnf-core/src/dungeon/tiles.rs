//! Sparse tile grid
//!
//! Tiles live in a vector sorted by level-major point order, so a lookup
//! is a binary search and every level is one contiguous slice.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, WallType};
use crate::geometry::{Bounds, Direction, Point};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiles {
    tiles: Vec<Tile>,
}

impl Tiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Tiles that are open floor
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_open()).count()
    }

    fn search(&self, point: Point) -> Result<usize, usize> {
        self.tiles.binary_search_by(|tile| tile.point.cmp(&point))
    }

    pub fn find_tile_at(&self, point: Point) -> Option<&Tile> {
        self.search(point).ok().map(|index| &self.tiles[index])
    }

    pub fn find_tile_at_mut(&mut self, point: Point) -> Option<&mut Tile> {
        match self.search(point) {
            Ok(index) => Some(&mut self.tiles[index]),
            Err(_) => None,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.search(point).is_ok()
    }

    /// Insert a tile, replacing any tile already at its point.
    pub fn add_tile(&mut self, tile: Tile) {
        match self.search(tile.point) {
            Ok(index) => self.tiles[index] = tile,
            Err(index) => self.tiles.insert(index, tile),
        }
    }

    pub fn remove_tile(&mut self, point: Point) -> Option<Tile> {
        self.search(point).ok().map(|index| self.tiles.remove(index))
    }

    /// All tiles on level `z`, ordered by `y` then `x`.
    pub fn tiles_on_level(&self, z: i32) -> &[Tile] {
        let start = self.tiles.partition_point(|tile| tile.point.z < z);
        let end = self.tiles.partition_point(|tile| tile.point.z <= z);
        &self.tiles[start..end]
    }

    /// Bounding box of level `z`, or `None` when nothing is dug there.
    pub fn bounds_on_level(&self, z: i32) -> Option<Bounds> {
        let level = self.tiles_on_level(z);
        let first = level.first()?;
        let bounds = level
            .iter()
            .fold(Bounds::unit(first.point), |bounds, tile| {
                bounds.extend_to_include_point(tile.point)
            });
        Some(bounds)
    }

    /// True when any tile lies inside `bounds`.
    pub fn is_excavated(&self, bounds: &Bounds) -> bool {
        let bounds = bounds.normalize();
        let end = bounds.end_point();
        (bounds.origin.z..end.z).any(|z| {
            self.tiles_on_level(z)
                .iter()
                .any(|tile| bounds.contains_point(tile.point))
        })
    }

    /// Lowest and highest levels holding tiles.
    pub fn level_range(&self) -> Option<(i32, i32)> {
        let first = self.tiles.first()?;
        let last = self.tiles.last()?;
        Some((first.point.z, last.point.z))
    }

    /// Set the wall on one side of `point`, mirroring it onto the tile across
    /// that edge when one exists. Returns false when `point` has no tile.
    pub fn set_wall(&mut self, point: Point, direction: Direction, wall: WallType) -> bool {
        let Some(tile) = self.find_tile_at_mut(point) else {
            return false;
        };
        tile.walls.set(direction, wall);
        if let Some(neighbour) = self.find_tile_at_mut(point.moved(1, direction)) {
            neighbour.walls.set(direction.opposite(), wall);
        }
        true
    }

    pub fn statistics(&self) -> TileStatistics {
        TileStatistics::gather(&self.tiles)
    }

    pub fn statistics_on_level(&self, z: i32) -> TileStatistics {
        TileStatistics::gather(self.tiles_on_level(z))
    }
}

impl<'a> IntoIterator for &'a Tiles {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Count and extent of a run of tiles. The ranges are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileStatistics {
    pub count: usize,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl TileStatistics {
    pub fn gather(tiles: &[Tile]) -> Self {
        let Some(first) = tiles.first() else {
            return Self::default();
        };
        let start = Self {
            count: 0,
            min_x: first.point.x,
            max_x: first.point.x + 1,
            min_y: first.point.y,
            max_y: first.point.y + 1,
        };
        tiles.iter().fold(start, |stats, tile| Self {
            count: stats.count + 1,
            min_x: stats.min_x.min(tile.point.x),
            max_x: stats.max_x.max(tile.point.x + 1),
            min_y: stats.min_y.min(tile.point.y),
            max_y: stats.max_y.max(tile.point.y + 1),
        })
    }

    pub const fn x_range(&self) -> std::ops::Range<i32> {
        self.min_x..self.max_x
    }

    pub const fn y_range(&self) -> std::ops::Range<i32> {
        self.min_y..self.max_y
    }
}
