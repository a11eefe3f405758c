//! Diggers and the primitive dig operations
//!
//! A digger stands on the next cell it will dig, facing the way it digs.
//! Every dig either succeeds completely or leaves the dungeon untouched.

use fnf_rng::Rnd;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::area::{Area, AreaId, AreaType};
use super::errors::DigError;
use super::generator::{DiggerId, Generator};
use super::tile::{Tile, WallType};
use crate::geometry::{Bounds, Direction, Point, Size};

/// Position and heading of one excavation agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digger {
    pub point: Point,
    pub direction: Direction,
}

impl Digger {
    pub const fn new(point: Point, direction: Direction) -> Self {
        Self { point, direction }
    }

    /// Turn 90 degrees left, pivoting beside the last cell dug.
    pub const fn turned_left(self) -> Self {
        Self::new(self.point.rotated_left(self.direction), self.direction.left())
    }

    pub const fn turned_right(self) -> Self {
        Self::new(self.point.rotated_right(self.direction), self.direction.right())
    }

    /// Box covered by an area `length` cells deep and `width` cells wide
    /// starting at this digger, with `left_offset` of the width to the
    /// digger's left, grown by `padding` on the far end and both sides.
    pub fn box_for_area(&self, length: i32, width: i32, left_offset: i32, padding: i32) -> Bounds {
        debug_assert!(left_offset < width);
        let Point { x, y, z } = self.point;
        let (origin, size) = match self.direction {
            Direction::North => (
                Point::new(x - left_offset - padding, y, z),
                Size::new(width + 2 * padding, length + padding, 1),
            ),
            Direction::South => (
                Point::new(x + left_offset + padding, y, z),
                Size::new(-width - 2 * padding, -length - padding, 1),
            ),
            Direction::East => (
                Point::new(x, y + left_offset + padding, z),
                Size::new(length + padding, -width - 2 * padding, 1),
            ),
            Direction::West => (
                Point::new(x, y - left_offset - padding, z),
                Size::new(-length - padding, width + 2 * padding, 1),
            ),
        };
        Bounds::new(origin, size).normalize()
    }
}

impl<R: Rnd + ?Sized> Generator<'_, R> {
    /// Turn a digger 90 degrees left.
    pub fn turn_left(&mut self, id: &DiggerId) -> Result<(), DigError> {
        let digger = self.digger_mut(id)?;
        *digger = digger.turned_left();
        Ok(())
    }

    /// Turn a digger 90 degrees right.
    pub fn turn_right(&mut self, id: &DiggerId) -> Result<(), DigError> {
        let digger = self.digger_mut(id)?;
        *digger = digger.turned_right();
        Ok(())
    }

    /// Step without digging.
    pub fn move_digger(
        &mut self,
        id: &DiggerId,
        distance: i32,
        direction: Direction,
    ) -> Result<(), DigError> {
        let digger = self.digger_mut(id)?;
        digger.point = digger.point.moved(distance, direction);
        Ok(())
    }

    /// Step `distance` cells along the digger's heading without digging.
    pub fn move_forward(&mut self, id: &DiggerId, distance: i32) -> Result<(), DigError> {
        let direction = self.digger(id)?.direction;
        self.move_digger(id, distance, direction)
    }

    /// Dig an area without any clearance around it.
    ///
    /// Fails when any cell of the area is already dug, or when the level
    /// would outgrow the configured maximum footprint. On success the
    /// area is registered, its cells are opened and walled, the entrance
    /// edge gets `entrance`, and the digger advances `length` cells.
    pub fn dig_area(
        &mut self,
        id: &DiggerId,
        length: i32,
        width: i32,
        left_offset: i32,
        entrance: WallType,
        area_type: AreaType,
    ) -> Result<AreaId, DigError> {
        let digger = self.digger(id)?;
        let bounds = digger.box_for_area(length, width, left_offset, 0);
        if self.dungeon.tiles.is_excavated(&bounds) {
            return Err(DigError::AlreadyExcavated { bounds });
        }

        let level = match self.dungeon.tiles.bounds_on_level(digger.point.z) {
            Some(level) => Bounds::from_bounds(level, bounds),
            None => bounds,
        };
        if level.size.width > self.max_size.width || level.size.length > self.max_size.length {
            return Err(DigError::LevelTooLarge {
                width: level.size.width,
                length: level.size.length,
            });
        }

        let area = Area::new(area_type, digger.direction.orientation(), bounds);
        let area_id = self.add_area(area);
        self.dungeon
            .tiles
            .set_wall(digger.point, digger.direction.opposite(), entrance);
        self.move_forward(id, length)?;

        trace!(area = %area.description(), at = %bounds.origin, "dug");
        Ok(area_id)
    }

    fn add_area(&mut self, area: Area) -> AreaId {
        let tiles = &mut self.dungeon.tiles;
        for point in area.bounds.points() {
            tiles.add_tile(Tile::empty(point));
        }
        for point in area.bounds.points() {
            for direction in [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ] {
                if !area.bounds.contains_point(point.moved(1, direction)) {
                    tiles.set_wall(point, direction, WallType::Wall);
                }
            }
        }
        self.dungeon.areas.add(area)
    }

    /// Reject when the padded box touches dug space, then dig unpadded.
    fn dig_padded(
        &mut self,
        id: &DiggerId,
        length: i32,
        width: i32,
        left_offset: i32,
        entrance: WallType,
        area_type: AreaType,
    ) -> Result<AreaId, DigError> {
        let padded = self
            .digger(id)?
            .box_for_area(length, width, left_offset, self.padding);
        if self.dungeon.tiles.is_excavated(&padded) {
            return Err(DigError::AlreadyExcavated { bounds: padded });
        }
        self.dig_area(id, length, width, left_offset, entrance, area_type)
    }

    /// Dig a chamber `length` deep and `width` wide, keeping the padding clear.
    pub fn dig_chamber(
        &mut self,
        id: &DiggerId,
        length: i32,
        width: i32,
        left_offset: i32,
        entrance: WallType,
    ) -> Result<AreaId, DigError> {
        self.dig_padded(id, length, width, left_offset, entrance, AreaType::Chamber)
    }

    /// Dig a room `length` deep and `width` wide, keeping the padding clear.
    pub fn dig_room(
        &mut self,
        id: &DiggerId,
        length: i32,
        width: i32,
        left_offset: i32,
        entrance: WallType,
    ) -> Result<AreaId, DigError> {
        self.dig_padded(id, length, width, left_offset, entrance, AreaType::Room)
    }

    /// Dig a single intersection cell.
    pub fn dig_intersection(&mut self, id: &DiggerId) -> Result<AreaId, DigError> {
        self.dig_padded(id, 1, 1, 0, WallType::None, AreaType::Intersection)
    }

    /// Dig a passage one cell wide and `distance` cells long.
    pub fn dig_passage(
        &mut self,
        id: &DiggerId,
        distance: i32,
        entrance: WallType,
    ) -> Result<AreaId, DigError> {
        self.dig_padded(id, distance, 1, 0, entrance, AreaType::Passage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::dungeon::Dungeon;
    use fnf_rng::FixedRnd;

    const ENTRY: Point = Point::new(0, 0, 1);

    #[test]
    fn test_box_for_area_each_heading() {
        let at = |direction| Digger::new(ENTRY, direction);
        assert_eq!(
            at(Direction::North).box_for_area(3, 2, 1, 0),
            Bounds::new(Point::new(-1, 0, 1), Size::new(2, 3, 1))
        );
        assert_eq!(
            at(Direction::South).box_for_area(3, 2, 1, 0),
            Bounds::new(Point::new(0, -2, 1), Size::new(2, 3, 1))
        );
        assert_eq!(
            at(Direction::East).box_for_area(3, 2, 1, 0),
            Bounds::new(Point::new(0, 0, 1), Size::new(3, 2, 1))
        );
        assert_eq!(
            at(Direction::West).box_for_area(3, 2, 1, 0),
            Bounds::new(Point::new(-2, -1, 1), Size::new(3, 2, 1))
        );
    }

    #[test]
    fn test_box_for_area_padding() {
        let digger = Digger::new(ENTRY, Direction::North);
        assert_eq!(
            digger.box_for_area(2, 1, 0, 1),
            Bounds::new(Point::new(-1, 0, 1), Size::new(3, 3, 1))
        );
    }

    #[test]
    fn test_turns_pivot_beside_last_cell() {
        let digger = Digger::new(Point::new(0, 2, 1), Direction::North);
        assert_eq!(
            digger.turned_left(),
            Digger::new(Point::new(-1, 1, 1), Direction::West)
        );
        assert_eq!(
            digger.turned_right(),
            Digger::new(Point::new(1, 1, 1), Direction::East)
        );
    }

    #[test]
    fn test_dig_passage_advances_digger() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());
        let id = generator.add_digger(ENTRY, Direction::North);

        let area = generator.dig_passage(&id, 2, WallType::None).unwrap();
        assert_eq!(area, AreaId(0));
        assert_eq!(generator.digger(&id).unwrap().point, Point::new(0, 2, 1));
        drop(generator);

        let area = dungeon.areas.get(AreaId(0)).unwrap();
        assert_eq!(area.area_type, AreaType::Passage);
        assert_eq!(area.bounds, Bounds::new(ENTRY, Size::new(1, 2, 1)));
        assert_eq!(dungeon.tiles.len(), 2);

        let first = dungeon.tiles.find_tile_at(ENTRY).unwrap();
        assert_eq!(first.walls.south, WallType::None);
        assert_eq!(first.walls.east, WallType::Wall);
        assert_eq!(first.walls.west, WallType::Wall);
        assert_eq!(first.walls.north, WallType::None);
        let last = dungeon.tiles.find_tile_at(Point::new(0, 1, 1)).unwrap();
        assert_eq!(last.walls.north, WallType::Wall);
    }

    #[test]
    fn test_failed_dig_changes_nothing() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());
        let id = generator.add_digger(ENTRY, Direction::North);
        generator.dig_passage(&id, 3, WallType::None).unwrap();

        let back = generator.add_digger(Point::new(0, 2, 1), Direction::South);
        let err = generator.dig_passage(&back, 2, WallType::None).unwrap_err();
        assert!(matches!(err, DigError::AlreadyExcavated { .. }));
        assert_eq!(generator.digger(&back).unwrap().point, Point::new(0, 2, 1));
        assert_eq!(generator.progress().areas, 1);
        assert_eq!(generator.progress().tiles, 3);
    }

    #[test]
    fn test_padding_rejects_neighbouring_dig() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());
        let id = generator.add_digger(ENTRY, Direction::North);
        generator.dig_passage(&id, 3, WallType::None).unwrap();

        let beside = generator.add_digger(Point::new(1, 0, 1), Direction::North);
        assert!(generator.dig_passage(&beside, 3, WallType::None).is_err());
        let area = generator
            .dig_area(&beside, 3, 1, 0, WallType::None, AreaType::Passage)
            .unwrap();
        assert_eq!(area, AreaId(1));
    }

    #[test]
    fn test_level_size_cap() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let config = GeneratorConfig {
            max_size: Size::new(20, 5, 5),
            ..GeneratorConfig::default()
        };
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &config);
        let id = generator.add_digger(ENTRY, Direction::North);
        generator.dig_passage(&id, 4, WallType::None).unwrap();
        let err = generator.dig_passage(&id, 2, WallType::None).unwrap_err();
        assert_eq!(err, DigError::LevelTooLarge { width: 1, length: 6 });
        assert!(generator.dig_passage(&id, 1, WallType::None).is_ok());
    }

    #[test]
    fn test_entrance_type_on_both_sides_of_edge() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());
        let id = generator.add_digger(ENTRY, Direction::North);
        generator.dig_passage(&id, 1, WallType::None).unwrap();
        generator.dig_area(&id, 2, 1, 0, WallType::Door, AreaType::Room).unwrap();
        drop(generator);

        let below = dungeon.tiles.find_tile_at(ENTRY).unwrap();
        let above = dungeon.tiles.find_tile_at(Point::new(0, 1, 1)).unwrap();
        assert_eq!(below.walls.north, WallType::Door);
        assert_eq!(above.walls.south, WallType::Door);
    }
}
