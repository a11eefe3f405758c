//! Hand-placed sample layout
//!
//! A fixed dungeon with no randomness: an entry chamber with three exits
//! leading to smaller chambers, and a long northern passage that loops
//! round to a final chamber. Used as a known layout for rendering and
//! regression checks.

use fnf_rng::Rnd;

use super::area::AreaType;
use super::errors::DigError;
use super::generator::Generator;
use super::tile::{TileType, WallType};
use crate::geometry::{Direction, Point};

const NONE: WallType = WallType::None;

impl<R: Rnd + ?Sized> Generator<'_, R> {
    pub fn generate_small(&mut self) -> Result<(), DigError> {
        let entry = self.add_digger(Point::new(0, 0, 1), Direction::North);
        self.dig_passage(&entry, 2, NONE)?;
        self.dig_chamber(&entry, 5, 3, 1, NONE)?;

        // north west exit of the entry chamber
        let nw = self.copy_digger(&entry)?;
        self.turn_left(&nw)?;
        self.move_digger(&nw, 1, Direction::South)?;
        self.move_digger(&nw, 1, Direction::West)?;
        self.dig_passage(&nw, 2, NONE)?;
        self.turn_right(&nw)?;
        self.dig_passage(&nw, 6, NONE)?;
        self.dig_chamber(&nw, 3, 2, 1, NONE)?;
        self.delete_digger(nw);

        // south west exit
        let sw = self.copy_digger(&entry)?;
        self.turn_left(&sw)?;
        self.move_digger(&sw, 3, Direction::South)?;
        self.move_digger(&sw, 1, Direction::West)?;
        self.dig_passage(&sw, 2, NONE)?;
        self.turn_left(&sw)?;
        self.dig_passage(&sw, 2, NONE)?;
        self.turn_right(&sw)?;
        self.dig_passage(&sw, 2, NONE)?;
        self.turn_right(&sw)?;
        self.dig_passage(&sw, 2, NONE)?;
        self.dig_chamber(&sw, 2, 2, 1, NONE)?;
        self.move_digger(&sw, 1, Direction::West)?;
        self.dig_passage(&sw, 3, NONE)?;
        self.dig_chamber(&sw, 2, 3, 1, NONE)?;
        self.delete_digger(sw);

        // south east exit, into a chamber with one filled cell
        let se = self.copy_digger(&entry)?;
        self.turn_right(&se)?;
        self.move_digger(&se, 3, Direction::South)?;
        self.move_digger(&se, 1, Direction::East)?;
        self.dig_passage(&se, 1, NONE)?;
        self.dig_chamber(&se, 6, 4, 0, NONE)?;
        self.delete_digger(se);
        if let Some(tile) = self.dungeon.tiles.find_tile_at_mut(Point::new(5, 2, 1)) {
            tile.tile_type = TileType::Solid;
        }

        // north exit, looping back on itself
        self.dig_passage(&entry, 8, NONE)?;
        self.turn_right(&entry)?;
        self.dig_passage(&entry, 8, NONE)?;
        self.turn_right(&entry)?;
        self.dig_passage(&entry, 3, NONE)?;
        self.dig_chamber(&entry, 3, 4, 0, NONE)?;
        self.move_digger(&entry, 3, Direction::West)?;
        self.dig_passage(&entry, 3, NONE)?;
        self.turn_right(&entry)?;
        self.dig_area(&entry, 3, 1, 0, NONE, AreaType::Passage)?;
        self.delete_digger(entry);
        Ok(())
    }
}
