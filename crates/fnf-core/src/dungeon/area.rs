//! Excavated areas

use std::ops::Index;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::geometry::{Bounds, Orientation};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum AreaType {
    Passage,
    Intersection,
    Chamber,
    Room,
    #[strum(to_string = "stairs down")]
    StairsDown,
    #[strum(to_string = "stairs up")]
    StairsUp,
}

/// A rectangular region dug in one go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub area_type: AreaType,
    pub orientation: Orientation,
    pub bounds: Bounds,
}

impl Area {
    pub const fn new(area_type: AreaType, orientation: Orientation, bounds: Bounds) -> Self {
        Self {
            area_type,
            orientation,
            bounds,
        }
    }

    pub const fn level(&self) -> i32 {
        self.bounds.origin.z
    }

    /// Human readable summary, e.g. `3 by 5 chamber (North to South)`
    pub fn description(&self) -> String {
        let bounds = self.bounds.normalize();
        format!(
            "{} by {} {} ({})",
            bounds.size.width, bounds.size.length, self.area_type, self.orientation
        )
    }
}

/// Stable handle to an area; indices never move since areas are only appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AreaId(pub usize);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Areas {
    areas: Vec<Area>,
}

impl Areas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, area: Area) -> AreaId {
        self.areas.push(area);
        AreaId(self.areas.len() - 1)
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Area> {
        self.areas.iter()
    }

    pub fn on_level(&self, z: i32) -> impl Iterator<Item = &Area> {
        self.areas.iter().filter(move |area| area.level() == z)
    }
}

impl Index<AreaId> for Areas {
    type Output = Area;

    fn index(&self, id: AreaId) -> &Area {
        &self.areas[id.0]
    }
}

impl<'a> IntoIterator for &'a Areas {
    type Item = &'a Area;
    type IntoIter = std::slice::Iter<'a, Area>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}
