//! Decision routines run for each digger every round
//!
//! Every routine returns `Err` as soon as one of its digs fails. Work done
//! before the failure stays, including any diggers already spawned; they
//! carry on from the next round. A digger whose routine failed keeps its
//! pose and tries again next round.

use fnf_rng::Rnd;
use tracing::trace;

use super::area::{AreaId, AreaType};
use super::errors::DigError;
use super::exit::possible_exits;
use super::generator::{D20, DiggerId, Generator};
use super::table::{
    BeyondDoor, CHAMBER_SHAPE, DOOR_LOCATION, DoorLocation, EXIT_WALL, NUMBER_OF_EXITS,
    PERIODIC_CHECK, PeriodicAction, ROOM_SHAPE, RollTable, SIDE_PASSAGE, SPACE_BEYOND_DOOR, Shape,
    SidePassage, TURN, Turn,
};
use super::tile::WallType;
use crate::geometry::{Bounds, Direction};

#[derive(Debug, Default)]
struct DoorSides {
    left: bool,
    right: bool,
    ahead: bool,
}

impl DoorSides {
    fn mark(&mut self, location: DoorLocation) {
        match location {
            DoorLocation::Left => self.left = true,
            DoorLocation::Right => self.right = true,
            DoorLocation::Ahead => self.ahead = true,
        }
    }
}

impl<R: Rnd + ?Sized> Generator<'_, R> {
    pub(crate) fn periodic_check(&mut self, id: DiggerId) -> Result<(), DigError> {
        let action = PERIODIC_CHECK.roll(&mut *self.rnd);
        trace!(digger = id.index(), ?action, "periodic check");
        match action {
            PeriodicAction::Passage => self.dig_passage(&id, 6, WallType::None).map(drop),
            PeriodicAction::Doors => self.doors(id),
            PeriodicAction::SidePassages => self.side_passages(id),
            PeriodicAction::Turns => self.turns(&id),
            PeriodicAction::Chambers => self.chambers(id, WallType::None),
            PeriodicAction::DeadEnd => {
                self.delete_digger(id);
                Ok(())
            }
            PeriodicAction::Stairs
            | PeriodicAction::TrickOrTrap
            | PeriodicAction::WanderingMonster => Ok(()),
        }
    }

    fn doors(&mut self, id: DiggerId) -> Result<(), DigError> {
        let mut sides = DoorSides::default();
        sides.mark(DOOR_LOCATION.roll(&mut *self.rnd));
        if !sides.ahead && (3..=5).contains(&self.roll(D20)) {
            sides.mark(DOOR_LOCATION.roll(&mut *self.rnd));
        }
        trace!(digger = id.index(), ?sides, "doors");

        if sides.left {
            let left = self.copy_digger(&id)?;
            self.turn_left(&left)?;
            self.space_beyond_door(left, false)?;
        }
        if sides.right {
            let right = self.copy_digger(&id)?;
            self.turn_right(&right)?;
            self.space_beyond_door(right, false)?;
        }
        if sides.ahead {
            self.space_beyond_door(id, true)
        } else {
            self.dig_passage(&id, 3, WallType::None).map(drop)
        }
    }

    fn side_passages(&mut self, id: DiggerId) -> Result<(), DigError> {
        let branch = SIDE_PASSAGE.roll(&mut *self.rnd);
        trace!(digger = id.index(), ?branch, "side passage");
        match branch {
            SidePassage::Left | SidePassage::Right => {
                self.dig_intersection(&id)?;
                let side = self.copy_digger(&id)?;
                if branch == SidePassage::Left {
                    self.turn_left(&side)?;
                } else {
                    self.turn_right(&side)?;
                }
                self.dig_passage(&side, 3, WallType::None)?;
                self.dig_passage(&id, 3, WallType::None)?;
                Ok(())
            }
            SidePassage::Tee => {
                self.dig_intersection(&id)?;
                self.branch_both_ways(&id)?;
                self.delete_digger(id);
                Ok(())
            }
            SidePassage::FourWay => {
                self.dig_intersection(&id)?;
                self.branch_both_ways(&id)?;
                self.dig_passage(&id, 3, WallType::None)?;
                Ok(())
            }
            SidePassage::Angled | SidePassage::Wye | SidePassage::Cross => Ok(()),
        }
    }

    /// Spawn a digger to each side of `id` and dig a short passage with each.
    fn branch_both_ways(&mut self, id: &DiggerId) -> Result<(), DigError> {
        let left = self.copy_digger(id)?;
        self.turn_left(&left)?;
        self.dig_passage(&left, 3, WallType::None)?;

        let right = self.copy_digger(id)?;
        self.turn_right(&right)?;
        self.dig_passage(&right, 3, WallType::None)?;
        Ok(())
    }

    fn turns(&mut self, id: &DiggerId) -> Result<(), DigError> {
        match TURN.roll(&mut *self.rnd) {
            Turn::Left => {
                self.turn_left(id)?;
                self.dig_passage(id, 3, WallType::None).map(drop)
            }
            Turn::Right => {
                self.turn_right(id)?;
                self.dig_passage(id, 3, WallType::None).map(drop)
            }
            Turn::Angled => Ok(()),
        }
    }

    fn space_beyond_door(&mut self, id: DiggerId, straight_ahead: bool) -> Result<(), DigError> {
        let beyond = SPACE_BEYOND_DOOR.roll(&mut *self.rnd);
        trace!(digger = id.index(), ?beyond, straight_ahead, "beyond door");
        let padding = self.padding;
        match beyond {
            BeyondDoor::ParallelPassageOrSmallRoom if straight_ahead => {
                if let Err(err) = self.dig_room(&id, 1, 1, 0, WallType::Door) {
                    trace!(%err, "small room skipped");
                }
                Ok(())
            }
            BeyondDoor::ParallelPassageOrSmallRoom => {
                if padding > 0 {
                    self.dig_passage(&id, padding, WallType::Door)?;
                    self.dig_intersection(&id)?;
                } else {
                    self.dig_passage(&id, 1, WallType::Door)?;
                }
                let left = self.copy_digger(&id)?;
                self.turn_left(&left)?;
                self.dig_passage(&left, 3, WallType::None)?;

                self.turn_right(&id)?;
                self.dig_passage(&id, 3, WallType::None)?;
                Ok(())
            }
            BeyondDoor::PassageAhead => self.dig_passage(&id, 3, WallType::Door).map(drop),
            BeyondDoor::Angled => Ok(()),
            BeyondDoor::Room if straight_ahead || padding == 0 => self.rooms(id, WallType::Door),
            BeyondDoor::Room => {
                if let Err(err) = self.dig_passage(&id, padding, WallType::Door) {
                    trace!(%err, "room beyond door skipped");
                    return Ok(());
                }
                self.rooms(id, WallType::None)
            }
            BeyondDoor::Chamber if straight_ahead || padding == 0 => {
                self.chambers(id, WallType::Door)
            }
            BeyondDoor::Chamber => {
                self.dig_passage(&id, padding, WallType::Door)?;
                self.chambers(id, WallType::None)
            }
        }
    }

    fn chambers(&mut self, id: DiggerId, entrance: WallType) -> Result<(), DigError> {
        self.enclosed_space(id, &CHAMBER_SHAPE, AreaType::Chamber, entrance)
    }

    fn rooms(&mut self, id: DiggerId, entrance: WallType) -> Result<(), DigError> {
        self.enclosed_space(id, &ROOM_SHAPE, AreaType::Room, entrance)
    }

    /// Dig a room or chamber ahead of `id`, cut its exits, and retire `id`.
    ///
    /// Every left offset is tried in shuffled order, first in the rolled
    /// orientation and then turned a quarter for oblong shapes.
    fn enclosed_space(
        &mut self,
        id: DiggerId,
        shapes: &RollTable<Shape>,
        area_type: AreaType,
        entrance: WallType,
    ) -> Result<(), DigError> {
        let Shape::Rectangle {
            mut length,
            mut width,
        } = shapes.roll(&mut *self.rnd)
        else {
            return Err(DigError::UnusualShape);
        };
        if length != width && self.rnd.next_index(2) == 1 {
            std::mem::swap(&mut length, &mut width);
        }

        let mut placed = self.dig_at_any_offset(&id, length, width, area_type, entrance);
        if placed.is_err() && length != width {
            std::mem::swap(&mut length, &mut width);
            placed = self.dig_at_any_offset(&id, length, width, area_type, entrance);
        }
        let bounds = self.dungeon.areas[placed?].bounds;

        let exit_count = NUMBER_OF_EXITS.roll(&mut *self.rnd);
        let plan = exit_count.resolve(bounds.area(), &mut *self.rnd);
        trace!(
            digger = id.index(),
            exits = plan.count,
            secret_doors = plan.check_for_secret_doors,
            "exits"
        );
        for _ in 0..plan.count {
            let exit = self.exit_location(&id, &bounds)?;
            self.space_beyond_door(exit, false)?;
        }

        self.delete_digger(id);
        Ok(())
    }

    fn dig_at_any_offset(
        &mut self,
        id: &DiggerId,
        length: i32,
        width: i32,
        area_type: AreaType,
        entrance: WallType,
    ) -> Result<AreaId, DigError> {
        let offsets = self.rnd.shuffled_indices(width.max(0) as usize);
        let mut failure = DigError::UnusualShape;
        for offset in offsets {
            let dug = match area_type {
                AreaType::Room => self.dig_room(id, length, width, offset as i32, entrance),
                _ => self.dig_chamber(id, length, width, offset as i32, entrance),
            };
            match dug {
                Ok(area_id) => return Ok(area_id),
                Err(err) => failure = err,
            }
        }
        Err(failure)
    }

    /// Spawn a digger just outside a wall of `bounds`, heading away from it.
    fn exit_location(&mut self, id: &DiggerId, bounds: &Bounds) -> Result<DiggerId, DigError> {
        let heading = self.digger(id)?.direction;
        let walls = EXIT_WALL.roll(&mut *self.rnd);
        for direction in walls.preferences(heading) {
            if let Some(exit) = self.exit_in_direction(bounds, direction) {
                return Ok(exit);
            }
        }
        Err(DigError::NoExit)
    }

    fn exit_in_direction(&mut self, bounds: &Bounds, direction: Direction) -> Option<DiggerId> {
        let exits = possible_exits(&self.dungeon.tiles, bounds, direction);
        if exits.is_empty() {
            return None;
        }
        let exit = exits[self.rnd.next_index(exits.len())];
        let digger = self.add_digger(exit.point, exit.direction);
        self.move_digger(&digger, 1, exit.direction).ok()?;
        Some(digger)
    }
}
