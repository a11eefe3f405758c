//! The finished dungeon

use fnf_rng::{FixedRnd, Rnd};
use serde::{Deserialize, Serialize};

use super::area::Areas;
use super::errors::DigError;
use super::generator::{GenerationProgress, Generator};
use super::tiles::Tiles;
use crate::config::GeneratorConfig;

/// Tiles and areas of a generated dungeon, spread over one or more levels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub tiles: Tiles,
    pub areas: Areas,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate<R: Rnd + ?Sized>(rnd: &mut R, config: &GeneratorConfig) -> Self {
        Self::generate_with_progress(rnd, config, |_| {})
    }

    /// Like [`Dungeon::generate`], reporting after every round.
    pub fn generate_with_progress<R: Rnd + ?Sized>(
        rnd: &mut R,
        config: &GeneratorConfig,
        on_progress: impl FnMut(&GenerationProgress),
    ) -> Self {
        let mut dungeon = Self::new();
        Generator::new(&mut dungeon, rnd, config)
            .with_progress(on_progress)
            .generate();
        dungeon
    }

    /// The fixed sample layout, dug with no clearance around areas.
    pub fn generate_small() -> Result<Self, DigError> {
        let config = GeneratorConfig {
            padding: 0,
            ..GeneratorConfig::default()
        };
        let mut dungeon = Self::new();
        let mut rnd = FixedRnd::min();
        Generator::new(&mut dungeon, &mut rnd, &config).generate_small()?;
        Ok(dungeon)
    }

    /// Lowest level with any tiles
    pub fn starting_level(&self) -> Option<i32> {
        self.tiles.level_range().map(|(first, _)| first)
    }

    pub fn ending_level(&self) -> Option<i32> {
        self.tiles.level_range().map(|(_, last)| last)
    }

    pub fn level_count(&self) -> usize {
        match self.tiles.level_range() {
            Some((first, last)) => (first..=last)
                .filter(|&z| !self.tiles.tiles_on_level(z).is_empty())
                .count(),
            None => 0,
        }
    }

    /// Levels holding tiles, lowest first.
    pub fn levels(&self) -> impl Iterator<Item = i32> + '_ {
        let (first, last) = self.tiles.level_range().unwrap_or((1, 0));
        (first..=last).filter(|&z| !self.tiles.tiles_on_level(z).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use fnf_rng::GameRng;

    #[test]
    fn test_empty_dungeon_levels() {
        let dungeon = Dungeon::new();
        assert_eq!(dungeon.starting_level(), None);
        assert_eq!(dungeon.ending_level(), None);
        assert_eq!(dungeon.level_count(), 0);
        assert_eq!(dungeon.levels().count(), 0);
    }

    #[test]
    fn test_generated_dungeon_starts_at_entry() {
        let dungeon = Dungeon::generate(&mut GameRng::new(5), &GeneratorConfig::default());
        assert!(dungeon.tiles.find_tile_at(Point::new(0, 0, 1)).is_some());
        assert_eq!(dungeon.starting_level(), Some(1));
        assert_eq!(dungeon.ending_level(), Some(1));
        assert_eq!(dungeon.level_count(), 1);
        assert_eq!(dungeon.levels().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_small_dungeon() {
        let dungeon = Dungeon::generate_small().unwrap();
        assert_eq!(dungeon.tiles.len(), 114);
        assert_eq!(dungeon.areas.len(), 20);
        assert_eq!(dungeon.level_count(), 1);
    }
}
