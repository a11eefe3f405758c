//! Integer 3-D geometry
//!
//! Points, compass directions and axis-aligned boxes. All value types.

mod bounds;
mod direction;
mod point;

pub use bounds::{Bounds, Size};
pub use direction::{Direction, Orientation};
pub use point::Point;
