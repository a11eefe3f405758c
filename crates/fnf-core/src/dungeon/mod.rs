//! Dungeon generation
//!
//! Diggers carve passages, rooms and chambers into an initially solid
//! grid. Each round every digger rolls on the periodic check table and
//! digs, branches, turns or retires accordingly.

mod area;
mod digger;
mod errors;
mod exit;
mod generator;
mod periodic_check;
mod sample;
mod table;
mod tile;
mod tiles;
mod topology;

pub use area::{Area, AreaId, AreaType, Areas};
pub use digger::Digger;
pub use errors::DigError;
pub use exit::{Exit, possible_exits};
pub use generator::{DiggerId, GenerationProgress, Generator};
pub use table::{
    BeyondDoor, CHAMBER_SHAPE, DOOR_LOCATION, DoorLocation, EXIT_WALL, ExitCount, ExitPlan,
    ExitWall, NUMBER_OF_EXITS, PERIODIC_CHECK, PeriodicAction, ROOM_SHAPE, RollRange, RollTable,
    SIDE_PASSAGE, SPACE_BEYOND_DOOR, Shape, SidePassage, TURN, Turn,
};
pub use tile::{Tile, TileType, WallType, Walls};
pub use tiles::{TileStatistics, Tiles};
pub use topology::Dungeon;
