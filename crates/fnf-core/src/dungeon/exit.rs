//! Exit candidates along the walls of a room or chamber

use super::tiles::Tiles;
use crate::geometry::{Bounds, Direction, Point};

/// A wall cell an exit could be cut through, and the way out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub point: Point,
    pub direction: Direction,
}

/// Cells on the wall of `bounds` facing `direction` whose outside
/// neighbour has not been dug, ordered along the wall.
pub fn possible_exits(tiles: &Tiles, bounds: &Bounds, direction: Direction) -> Vec<Exit> {
    let bounds = bounds.normalize();
    let end = bounds.end_point();
    let z = bounds.origin.z;
    let wall: Vec<Point> = match direction {
        Direction::North => (bounds.origin.x..end.x)
            .map(|x| Point::new(x, end.y - 1, z))
            .collect(),
        Direction::South => (bounds.origin.x..end.x)
            .map(|x| Point::new(x, bounds.origin.y, z))
            .collect(),
        Direction::East => (bounds.origin.y..end.y)
            .map(|y| Point::new(end.x - 1, y, z))
            .collect(),
        Direction::West => (bounds.origin.y..end.y)
            .map(|y| Point::new(bounds.origin.x, y, z))
            .collect(),
    };
    wall.into_iter()
        .filter(|point| !tiles.contains(point.moved(1, direction)))
        .map(|point| Exit { point, direction })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::tile::Tile;
    use crate::geometry::Size;

    fn room() -> (Tiles, Bounds) {
        let bounds = Bounds::new(Point::new(0, 0, 1), Size::new(3, 2, 1));
        let mut tiles = Tiles::new();
        for point in bounds.points() {
            tiles.add_tile(Tile::empty(point));
        }
        (tiles, bounds)
    }

    #[test]
    fn test_exits_on_each_wall() {
        let (tiles, bounds) = room();
        let north = possible_exits(&tiles, &bounds, Direction::North);
        assert_eq!(north.len(), 3);
        assert!(north.iter().all(|exit| exit.point.y == 1));
        assert_eq!(north[0].point, Point::new(0, 1, 1));

        let west = possible_exits(&tiles, &bounds, Direction::West);
        assert_eq!(
            west.iter().map(|exit| exit.point).collect::<Vec<_>>(),
            vec![Point::new(0, 0, 1), Point::new(0, 1, 1)]
        );
        assert!(west.iter().all(|exit| exit.direction == Direction::West));
    }

    #[test]
    fn test_dug_neighbours_are_excluded() {
        let (mut tiles, bounds) = room();
        tiles.add_tile(Tile::empty(Point::new(1, -1, 1)));
        let south = possible_exits(&tiles, &bounds, Direction::South);
        assert_eq!(
            south.iter().map(|exit| exit.point.x).collect::<Vec<_>>(),
            vec![0, 2]
        );

        tiles.add_tile(Tile::empty(Point::new(3, 0, 1)));
        tiles.add_tile(Tile::empty(Point::new(3, 1, 1)));
        assert!(possible_exits(&tiles, &bounds, Direction::East).is_empty());
    }
}
