//! fnf-core: procedural content generation for a tabletop RPG toolkit
//!
//! The centrepiece is the dungeon generator: a population of diggers carves
//! passages, rooms and chambers out of solid rock, one table roll at a time.
//! Everything here is pure computation driven by an explicitly passed
//! [`Rnd`]; reading a configuration file is the only I/O.

pub mod dice;
pub mod dungeon;
pub mod geometry;

mod config;

pub use config::{ConfigError, GeneratorConfig};
pub use dice::{Dice, DiceError, roll};
pub use fnf_rng::{AscendingRnd, FixedRnd, GameRng, Rnd, SequenceRnd};
