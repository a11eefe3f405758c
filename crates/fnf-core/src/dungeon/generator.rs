//! Generation driver
//!
//! The generator owns the live diggers and runs rounds until every digger
//! has retired or the iteration cap is reached. Each round visits the
//! diggers alive when the round began, in creation order; diggers spawned
//! during a round first run in the next one.

use std::collections::BTreeMap;

use fnf_rng::Rnd;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::digger::Digger;
use super::errors::DigError;
use super::tile::WallType;
use super::topology::Dungeon;
use crate::config::GeneratorConfig;
use crate::dice::Dice;
use crate::geometry::{Direction, Point, Size};

pub(crate) const D20: Dice = Dice::new(1, 20);
pub(crate) const D4: Dice = Dice::new(1, 4);

/// Handle to a live digger.
///
/// Not `Clone`: retiring a digger consumes its handle, so a retired digger
/// cannot be named again.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DiggerId(u64);

impl DiggerId {
    pub const fn index(&self) -> u64 {
        self.0
    }
}

/// Snapshot of a generation run, reported after each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationProgress {
    pub iteration: u32,
    pub diggers: usize,
    pub areas: usize,
    pub tiles: usize,
}

type ProgressCallback<'a> = Box<dyn FnMut(&GenerationProgress) + 'a>;

pub struct Generator<'a, R: Rnd + ?Sized> {
    pub(crate) dungeon: &'a mut Dungeon,
    pub(crate) rnd: &'a mut R,
    diggers: BTreeMap<u64, Digger>,
    next_digger: u64,
    iteration_count: u32,
    max_iterations: u32,
    pub(crate) max_size: Size,
    pub(crate) padding: i32,
    entry_point: Point,
    entry_direction: Direction,
    on_progress: Option<ProgressCallback<'a>>,
}

impl<'a, R: Rnd + ?Sized> Generator<'a, R> {
    pub fn new(dungeon: &'a mut Dungeon, rnd: &'a mut R, config: &GeneratorConfig) -> Self {
        Self {
            dungeon,
            rnd,
            diggers: BTreeMap::new(),
            next_digger: 0,
            iteration_count: 0,
            max_iterations: config.max_iterations,
            max_size: config.max_size,
            padding: config.padding,
            entry_point: config.entry_point,
            entry_direction: config.entry_direction,
            on_progress: None,
        }
    }

    /// Call `callback` after every round.
    pub fn with_progress(mut self, callback: impl FnMut(&GenerationProgress) + 'a) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Number of live diggers
    pub fn digger_count(&self) -> usize {
        self.diggers.len()
    }

    /// Spawn a digger at `point` facing `direction`.
    pub fn add_digger(&mut self, point: Point, direction: Direction) -> DiggerId {
        let key = self.next_digger;
        self.next_digger += 1;
        self.diggers.insert(key, Digger::new(point, direction));
        DiggerId(key)
    }

    /// Spawn a new digger at the same pose as `id`.
    pub fn copy_digger(&mut self, id: &DiggerId) -> Result<DiggerId, DigError> {
        let digger = self.digger(id)?;
        Ok(self.add_digger(digger.point, digger.direction))
    }

    /// Retire a digger. Returns its final pose.
    pub fn delete_digger(&mut self, id: DiggerId) -> Option<Digger> {
        self.diggers.remove(&id.0)
    }

    /// Current pose of a live digger.
    pub fn digger(&self, id: &DiggerId) -> Result<Digger, DigError> {
        self.diggers.get(&id.0).copied().ok_or(DigError::UnknownDigger)
    }

    pub(crate) fn digger_mut(&mut self, id: &DiggerId) -> Result<&mut Digger, DigError> {
        self.diggers.get_mut(&id.0).ok_or(DigError::UnknownDigger)
    }

    /// Live diggers in creation order.
    pub fn diggers(&self) -> impl Iterator<Item = &Digger> {
        self.diggers.values()
    }

    pub(crate) fn roll(&mut self, dice: Dice) -> i32 {
        dice.roll(&mut *self.rnd)
    }

    pub fn progress(&self) -> GenerationProgress {
        GenerationProgress {
            iteration: self.iteration_count,
            diggers: self.diggers.len(),
            areas: self.dungeon.areas.len(),
            tiles: self.dungeon.tiles.len(),
        }
    }

    /// Dig from the entry point until no digger is left or the iteration
    /// cap is hit. Hitting the cap is a normal way to finish.
    ///
    /// Consumes the generator, so a run cannot be resumed or restarted.
    pub fn generate(mut self) -> GenerationProgress {
        self.dig_entry();
        while !self.diggers.is_empty() && self.iteration_count < self.max_iterations {
            let progress = self.run_round();
            if let Some(callback) = self.on_progress.as_mut() {
                callback(&progress);
            }
        }

        let progress = self.progress();
        info!(
            iterations = progress.iteration,
            diggers = progress.diggers,
            areas = progress.areas,
            tiles = progress.tiles,
            "dungeon generated"
        );
        progress
    }

    fn dig_entry(&mut self) -> DiggerId {
        let entry = self.add_digger(self.entry_point, self.entry_direction);
        if let Err(err) = self.dig_passage(&entry, 2, WallType::None) {
            debug!(%err, "entry passage not dug");
        }
        entry
    }

    /// One periodic check for every digger alive when the round starts.
    fn run_round(&mut self) -> GenerationProgress {
        let round: Vec<u64> = self.diggers.keys().copied().collect();
        for key in round {
            self.check_digger(key);
        }
        self.iteration_count += 1;

        let progress = self.progress();
        debug!(
            iteration = progress.iteration,
            diggers = progress.diggers,
            areas = progress.areas,
            tiles = progress.tiles,
            "round complete"
        );
        progress
    }

    /// Run the periodic check of digger `key`. Returns false, drawing
    /// nothing, when that digger has retired since the round started.
    fn check_digger(&mut self, key: u64) -> bool {
        if !self.diggers.contains_key(&key) {
            return false;
        }
        if let Err(err) = self.periodic_check(DiggerId(key)) {
            debug!(digger = key, %err, "periodic check abandoned");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnf_rng::{FixedRnd, GameRng, SequenceRnd};

    #[test]
    fn test_copy_and_delete_digger() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());

        let first = generator.add_digger(Point::new(0, 0, 1), Direction::East);
        let second = generator.copy_digger(&first).unwrap();
        assert_ne!(first, second);
        assert_eq!(generator.digger_count(), 2);
        assert_eq!(generator.digger(&second).unwrap(), generator.digger(&first).unwrap());

        let retired = generator.delete_digger(first);
        assert_eq!(retired.map(|d| d.direction), Some(Direction::East));
        assert_eq!(generator.digger_count(), 1);
        assert!(generator.digger(&second).is_ok());
    }

    #[test]
    fn test_stale_handle_is_unknown() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::min();
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());

        let id = generator.add_digger(Point::new(0, 0, 1), Direction::North);
        let stale = DiggerId(id.index());
        generator.delete_digger(id);
        assert_eq!(generator.digger(&stale), Err(DigError::UnknownDigger));
        assert_eq!(generator.copy_digger(&stale), Err(DigError::UnknownDigger));
        assert_eq!(generator.delete_digger(stale), None);
    }

    #[test]
    fn test_generate_stops_at_iteration_cap() {
        let mut dungeon = Dungeon::new();
        let mut rnd = FixedRnd::max();
        let config = GeneratorConfig {
            max_iterations: 7,
            ..GeneratorConfig::default()
        };
        let summary = Generator::new(&mut dungeon, &mut rnd, &config).generate();
        assert_eq!(summary.iteration, 7);
        assert_eq!(summary.diggers, 1);
        assert_eq!(summary.tiles, 2);
        assert_eq!(summary.areas, 1);
    }

    #[test]
    fn test_progress_reported_every_round() {
        let mut dungeon = Dungeon::new();
        let mut rnd = GameRng::new(11);
        let mut reports = Vec::new();
        let summary = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default())
            .with_progress(|progress| reports.push(*progress))
            .generate();

        assert_eq!(reports.len() as u32, summary.iteration);
        for (round, report) in reports.iter().enumerate() {
            assert_eq!(report.iteration, round as u32 + 1);
        }
        assert_eq!(reports.last().copied().unwrap_or_default(), summary);
    }

    #[test]
    fn test_spawned_diggers_wait_for_next_round() {
        let mut dungeon = Dungeon::new();
        // 6 picks a side passage and 11 a tee. Any later draw repeats 11,
        // which would turn and move a digger that ran too early.
        let mut rnd = SequenceRnd::new([6, 11]);
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());

        let entry = generator.dig_entry();
        assert_eq!(
            generator.digger(&entry).unwrap(),
            Digger::new(Point::new(0, 2, 1), Direction::North)
        );

        let progress = generator.run_round();
        assert_eq!(progress.iteration, 1);
        assert_eq!(progress.diggers, 2);
        assert_eq!(progress.areas, 4);
        assert_eq!(progress.tiles, 9);
        assert_eq!(generator.digger(&entry), Err(DigError::UnknownDigger));

        let poses: Vec<Digger> = generator.diggers().copied().collect();
        assert_eq!(
            poses,
            vec![
                Digger::new(Point::new(-4, 2, 1), Direction::West),
                Digger::new(Point::new(4, 2, 1), Direction::East),
            ]
        );
        drop(generator);
        assert_eq!(rnd.calls(), 2);
    }

    #[test]
    fn test_retired_digger_skipped_within_round() {
        let mut dungeon = Dungeon::new();
        let mut rnd = SequenceRnd::new([1]);
        let mut generator = Generator::new(&mut dungeon, &mut rnd, &GeneratorConfig::default());

        let retired = generator.add_digger(Point::new(0, 0, 1), Direction::North);
        let live = generator.add_digger(Point::new(10, 0, 1), Direction::North);
        let key = retired.index();
        generator.delete_digger(retired);

        assert!(!generator.check_digger(key));
        assert_eq!(generator.progress().tiles, 0);
        assert!(generator.check_digger(live.index()));
        assert_eq!(
            generator.digger(&live).unwrap().point,
            Point::new(10, 6, 1)
        );
        drop(generator);
        assert_eq!(rnd.calls(), 1);
    }
}
