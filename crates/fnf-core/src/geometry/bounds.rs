//! Axis-aligned boxes over the tile grid
//!
//! A [`Bounds`] is an origin plus a signed [`Size`]. The sign of a size
//! component records the direction the box grows in; [`Bounds::normalize`]
//! moves the origin to the minimum corner and makes every component
//! non-negative. All comparisons normalize their inputs first.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// Extent along x (`width`), y (`length`) and z (`height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub length: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, length: i32, height: i32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    pub const fn empty() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn unit() -> Self {
        Self::new(1, 1, 1)
    }

    /// Size spanning from `origin` up to (excluding) `end`.
    pub const fn between(origin: Point, end: Point) -> Self {
        Self::new(end.x - origin.x, end.y - origin.y, end.z - origin.z)
    }

    /// True only when every component is strictly positive.
    pub const fn has_volume(&self) -> bool {
        self.width > 0 && self.length > 0 && self.height > 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.length, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub const fn empty(origin: Point) -> Self {
        Self::new(origin, Size::empty())
    }

    pub const fn unit(origin: Point) -> Self {
        Self::new(origin, Size::unit())
    }

    /// Box from `origin` up to (excluding) `end`.
    pub const fn from_points(origin: Point, end: Point) -> Self {
        Self::new(origin, Size::between(origin, end))
    }

    /// Smallest box enclosing both inputs.
    pub fn from_bounds(a: Bounds, b: Bounds) -> Self {
        let a = a.normalize();
        let b = b.normalize();
        Self::from_points(
            a.origin.componentwise_min(b.origin),
            a.end_point().componentwise_max(b.end_point()),
        )
    }

    /// One past the far corner on every axis.
    pub const fn end_point(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width,
            self.origin.y + self.size.length,
            self.origin.z + self.size.height,
        )
    }

    pub fn normalize(self) -> Self {
        let (x, width) = normalize_axis(self.origin.x, self.size.width);
        let (y, length) = normalize_axis(self.origin.y, self.size.length);
        let (z, height) = normalize_axis(self.origin.z, self.size.height);
        Self::new(Point::new(x, y, z), Size::new(width, length, height))
    }

    /// Overlap of two boxes, or an empty box at the would-be overlap origin
    /// when they do not meet.
    pub fn intersection(&self, other: &Bounds) -> Bounds {
        let a = self.normalize();
        let b = other.normalize();
        let origin = a.origin.componentwise_max(b.origin);
        let end = a.end_point().componentwise_min(b.end_point());
        let overlap = Bounds::from_points(origin, end);
        if overlap.size.has_volume() {
            overlap
        } else {
            Bounds::empty(origin)
        }
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.intersection(other).has_volume()
    }

    /// Half-open containment: `origin <= point < end` on every axis.
    pub fn contains_point(&self, point: Point) -> bool {
        let b = self.normalize();
        let end = b.end_point();
        (b.origin.x..end.x).contains(&point.x)
            && (b.origin.y..end.y).contains(&point.y)
            && (b.origin.z..end.z).contains(&point.z)
    }

    /// Grow minimally so that `point` lies inside. Expects a normalized box.
    pub fn extend_to_include_point(self, point: Point) -> Self {
        let (x, width) = extend_axis(self.origin.x, self.size.width, point.x);
        let (y, length) = extend_axis(self.origin.y, self.size.length, point.y);
        let (z, height) = extend_axis(self.origin.z, self.size.height, point.z);
        Self::new(Point::new(x, y, z), Size::new(width, length, height))
    }

    /// Grow by `margin` on both sides of every axis.
    pub const fn expand(self, margin: Size) -> Self {
        Self::new(
            Point::new(
                self.origin.x - margin.width,
                self.origin.y - margin.length,
                self.origin.z - margin.height,
            ),
            Size::new(
                self.size.width + 2 * margin.width,
                self.size.length + 2 * margin.length,
                self.size.height + 2 * margin.height,
            ),
        )
    }

    /// Floor area of one level.
    pub const fn area(&self) -> i32 {
        self.size.width.abs() * self.size.length.abs()
    }

    pub const fn volume(&self) -> i32 {
        self.size.width.abs() * self.size.length.abs() * self.size.height.abs()
    }

    pub fn has_volume(&self) -> bool {
        self.normalize().size.has_volume()
    }

    /// Every cell of the box in level-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let b = self.normalize();
        let end = b.end_point();
        let (x0, y0, z0) = (b.origin.x, b.origin.y, b.origin.z);
        (z0..end.z).flat_map(move |z| {
            (y0..end.y).flat_map(move |y| (x0..end.x).map(move |x| Point::new(x, y, z)))
        })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}

fn normalize_axis(origin: i32, size: i32) -> (i32, i32) {
    if size < 0 {
        (origin + size + 1, -size)
    } else {
        (origin, size)
    }
}

fn extend_axis(origin: i32, size: i32, point: i32) -> (i32, i32) {
    if point < origin {
        (point, size + (origin - point))
    } else {
        (origin, size.max(point - origin + 1))
    }
}
