//! Excavation failures

use thiserror::Error;

use crate::geometry::Bounds;

/// Why a dig or a decision step did not happen. None of these are fatal;
/// the generator drops the branch and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigError {
    #[error("space at {bounds} is already excavated")]
    AlreadyExcavated { bounds: Bounds },

    #[error("level would grow to {width} by {length}")]
    LevelTooLarge { width: i32, length: i32 },

    #[error("digger is no longer active")]
    UnknownDigger,

    #[error("unusual shapes are not dug yet")]
    UnusualShape,

    #[error("no wall has room for an exit")]
    NoExit,
}
