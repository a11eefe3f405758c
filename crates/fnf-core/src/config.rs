//! Generator configuration
//!
//! Settings may come from a JSON file; any field left out takes its
//! default value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Direction, Point, Size};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Rounds run before generation stops with whatever has been dug
    pub max_iterations: u32,
    /// Largest footprint one level may grow to; `height` caps the level count
    pub max_size: Size,
    /// Clearance required around new rooms, chambers and passages
    pub padding: i32,
    pub entry_point: Point,
    pub entry_direction: Direction,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_size: Size::new(20, 20, 5),
            padding: 1,
            entry_point: Point::new(0, 0, 1),
            entry_direction: Direction::North,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.padding < 0 {
            return Err(ConfigError::Invalid {
                field: "padding",
                reason: format!("{} is negative", self.padding),
            });
        }
        let size = self.max_size;
        if size.width <= 0 || size.length <= 0 || size.height <= 0 {
            return Err(ConfigError::Invalid {
                field: "max_size",
                reason: format!("{size} must be positive on every axis"),
            });
        }
        Ok(())
    }
}
