//! Roll tables driving the dig decisions
//!
//! Each table maps the score of a dice roll to an outcome. Ranges are
//! inclusive, listed in ascending order and together cover every score
//! the table's dice can produce.

use fnf_rng::Rnd;

use super::generator::{D4, D20};
use crate::dice::Dice;
use crate::geometry::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRange<T> {
    pub min: i32,
    pub max: i32,
    pub value: T,
}

impl<T> RollRange<T> {
    pub const fn new(min: i32, max: i32, value: T) -> Self {
        Self { min, max, value }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RollTable<T: 'static> {
    dice: Dice,
    ranges: &'static [RollRange<T>],
}

impl<T: Copy + 'static> RollTable<T> {
    pub const fn new(dice: Dice, ranges: &'static [RollRange<T>]) -> Self {
        assert!(!ranges.is_empty(), "roll table without ranges");
        Self { dice, ranges }
    }

    pub const fn dice(&self) -> Dice {
        self.dice
    }

    pub fn ranges(&self) -> &'static [RollRange<T>] {
        self.ranges
    }

    /// Outcome for `score`. Scores past either end take the nearest range.
    pub fn lookup(&self, score: i32) -> T {
        let index = self.ranges.partition_point(|range| range.max < score);
        self.ranges[index.min(self.ranges.len() - 1)].value
    }

    pub fn roll<R: Rnd + ?Sized>(&self, rnd: &mut R) -> T {
        self.lookup(self.dice.roll(rnd))
    }

    /// True when the ranges tile the dice's score range without gaps.
    pub fn is_complete(&self) -> bool {
        let contiguous = self
            .ranges
            .windows(2)
            .all(|pair| pair[0].max + 1 == pair[1].min);
        let ordered = self.ranges.iter().all(|range| range.min <= range.max);
        let first = self.ranges[0].min;
        let last = self.ranges[self.ranges.len() - 1].max;
        contiguous && ordered && first == self.dice.min_score() && last == self.dice.max_score()
    }
}

/// What a digger does on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodicAction {
    Passage,
    Doors,
    SidePassages,
    Turns,
    Chambers,
    Stairs,
    DeadEnd,
    TrickOrTrap,
    WanderingMonster,
}

static PERIODIC_CHECK_RANGES: [RollRange<PeriodicAction>; 9] = [
    RollRange::new(1, 2, PeriodicAction::Passage),
    RollRange::new(3, 5, PeriodicAction::Doors),
    RollRange::new(6, 10, PeriodicAction::SidePassages),
    RollRange::new(11, 13, PeriodicAction::Turns),
    RollRange::new(14, 16, PeriodicAction::Chambers),
    RollRange::new(17, 17, PeriodicAction::Stairs),
    RollRange::new(18, 18, PeriodicAction::DeadEnd),
    RollRange::new(19, 19, PeriodicAction::TrickOrTrap),
    RollRange::new(20, 20, PeriodicAction::WanderingMonster),
];

pub static PERIODIC_CHECK: RollTable<PeriodicAction> = RollTable::new(D20, &PERIODIC_CHECK_RANGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorLocation {
    Left,
    Right,
    Ahead,
}

static DOOR_LOCATION_RANGES: [RollRange<DoorLocation>; 3] = [
    RollRange::new(1, 6, DoorLocation::Left),
    RollRange::new(7, 12, DoorLocation::Right),
    RollRange::new(13, 20, DoorLocation::Ahead),
];

pub static DOOR_LOCATION: RollTable<DoorLocation> = RollTable::new(D20, &DOOR_LOCATION_RANGES);

/// Branches off a passage. 45 degree branches and the Y and X forms are
/// not dug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePassage {
    Left,
    Right,
    Angled,
    Tee,
    Wye,
    FourWay,
    Cross,
}

static SIDE_PASSAGE_RANGES: [RollRange<SidePassage>; 7] = [
    RollRange::new(1, 2, SidePassage::Left),
    RollRange::new(3, 4, SidePassage::Right),
    RollRange::new(5, 10, SidePassage::Angled),
    RollRange::new(11, 13, SidePassage::Tee),
    RollRange::new(14, 15, SidePassage::Wye),
    RollRange::new(16, 18, SidePassage::FourWay),
    RollRange::new(19, 20, SidePassage::Cross),
];

pub static SIDE_PASSAGE: RollTable<SidePassage> = RollTable::new(D20, &SIDE_PASSAGE_RANGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Angled,
}

static TURN_RANGES: [RollRange<Turn>; 4] = [
    RollRange::new(1, 8, Turn::Left),
    RollRange::new(9, 10, Turn::Angled),
    RollRange::new(11, 18, Turn::Right),
    RollRange::new(19, 20, Turn::Angled),
];

pub static TURN: RollTable<Turn> = RollTable::new(D20, &TURN_RANGES);

/// What lies on the far side of a door
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeyondDoor {
    ParallelPassageOrSmallRoom,
    PassageAhead,
    Angled,
    Room,
    Chamber,
}

static SPACE_BEYOND_DOOR_RANGES: [RollRange<BeyondDoor>; 5] = [
    RollRange::new(1, 4, BeyondDoor::ParallelPassageOrSmallRoom),
    RollRange::new(5, 8, BeyondDoor::PassageAhead),
    RollRange::new(9, 10, BeyondDoor::Angled),
    RollRange::new(11, 18, BeyondDoor::Room),
    RollRange::new(19, 20, BeyondDoor::Chamber),
];

pub static SPACE_BEYOND_DOOR: RollTable<BeyondDoor> = RollTable::new(D20, &SPACE_BEYOND_DOOR_RANGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle { length: i32, width: i32 },
    Unusual,
}

const fn rectangle(length: i32, width: i32) -> Shape {
    Shape::Rectangle { length, width }
}

static CHAMBER_SHAPE_RANGES: [RollRange<Shape>; 7] = [
    RollRange::new(1, 4, rectangle(2, 2)),
    RollRange::new(5, 6, rectangle(3, 3)),
    RollRange::new(7, 8, rectangle(4, 4)),
    RollRange::new(9, 13, rectangle(2, 3)),
    RollRange::new(14, 15, rectangle(3, 5)),
    RollRange::new(16, 17, rectangle(4, 6)),
    RollRange::new(18, 20, Shape::Unusual),
];

pub static CHAMBER_SHAPE: RollTable<Shape> = RollTable::new(D20, &CHAMBER_SHAPE_RANGES);

static ROOM_SHAPE_RANGES: [RollRange<Shape>; 9] = [
    RollRange::new(1, 2, rectangle(1, 1)),
    RollRange::new(3, 4, rectangle(2, 2)),
    RollRange::new(5, 6, rectangle(3, 3)),
    RollRange::new(7, 8, rectangle(4, 4)),
    RollRange::new(9, 10, rectangle(1, 2)),
    RollRange::new(11, 13, rectangle(2, 3)),
    RollRange::new(14, 15, rectangle(2, 4)),
    RollRange::new(16, 17, rectangle(3, 4)),
    RollRange::new(18, 20, Shape::Unusual),
];

pub static ROOM_SHAPE: RollTable<Shape> = RollTable::new(D20, &ROOM_SHAPE_RANGES);

/// Which wall of a room or chamber to try first for an exit, relative to
/// the heading of the digger that entered it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitWall {
    Opposite,
    Left,
    Right,
    Same,
}

impl ExitWall {
    /// Walls to try, in order, as the directions they face.
    pub const fn preferences(self, heading: Direction) -> [Direction; 4] {
        let ahead = heading;
        let behind = heading.opposite();
        let left = heading.left();
        let right = heading.right();
        match self {
            ExitWall::Opposite => [ahead, behind, right, left],
            ExitWall::Left => [left, right, ahead, behind],
            ExitWall::Right => [right, left, ahead, behind],
            ExitWall::Same => [behind, ahead, left, right],
        }
    }
}

static EXIT_WALL_RANGES: [RollRange<ExitWall>; 4] = [
    RollRange::new(1, 7, ExitWall::Opposite),
    RollRange::new(8, 12, ExitWall::Left),
    RollRange::new(13, 17, ExitWall::Right),
    RollRange::new(18, 20, ExitWall::Same),
];

pub static EXIT_WALL: RollTable<ExitWall> = RollTable::new(D20, &EXIT_WALL_RANGES);

/// How many exits a room or chamber gets, depending on its floor area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCount {
    /// `small` exits up to an area of 6, else `large`
    BySize { small: i32, large: i32 },
    /// No exits, but worth a search for secret doors, up to `max_area`;
    /// one exit above it
    SecretUpTo { max_area: i32 },
    Roll(Dice),
    Fixed(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitPlan {
    pub count: i32,
    pub check_for_secret_doors: bool,
}

impl ExitCount {
    pub fn resolve<R: Rnd + ?Sized>(self, area: i32, rnd: &mut R) -> ExitPlan {
        match self {
            ExitCount::BySize { small, large } => ExitPlan {
                count: if area <= 6 { small } else { large },
                check_for_secret_doors: false,
            },
            ExitCount::SecretUpTo { max_area } if area <= max_area => ExitPlan {
                count: 0,
                check_for_secret_doors: true,
            },
            ExitCount::SecretUpTo { .. } => ExitPlan {
                count: 1,
                check_for_secret_doors: false,
            },
            ExitCount::Roll(dice) => ExitPlan {
                count: dice.roll(rnd),
                check_for_secret_doors: false,
            },
            ExitCount::Fixed(count) => ExitPlan {
                count,
                check_for_secret_doors: false,
            },
        }
    }
}

static NUMBER_OF_EXITS_RANGES: [RollRange<ExitCount>; 7] = [
    RollRange::new(1, 3, ExitCount::BySize { small: 1, large: 2 }),
    RollRange::new(4, 6, ExitCount::BySize { small: 2, large: 3 }),
    RollRange::new(7, 9, ExitCount::BySize { small: 3, large: 4 }),
    RollRange::new(10, 12, ExitCount::SecretUpTo { max_area: 12 }),
    RollRange::new(13, 15, ExitCount::SecretUpTo { max_area: 16 }),
    RollRange::new(16, 18, ExitCount::Roll(D4)),
    RollRange::new(19, 20, ExitCount::Fixed(1)),
];

pub static NUMBER_OF_EXITS: RollTable<ExitCount> = RollTable::new(D20, &NUMBER_OF_EXITS_RANGES);
