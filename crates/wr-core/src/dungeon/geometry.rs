//! Grid geometry: positions, cardinal steps, and iterable rectangles.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A grid position. Signed so neighborhood scans may step outside the grid
/// before a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

/// The four cardinal steps in scan order: north, east, south, west.
pub const CARDINAL: [Pos; 4] = [
    Pos::new(0, -1),
    Pos::new(1, 0),
    Pos::new(0, 1),
    Pos::new(-1, 0),
];

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale this step by an integer factor.
    pub const fn times(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// The step perpendicular to a cardinal step (always positive-signed).
    pub const fn perpendicular(self) -> Self {
        Self::new(self.y.abs(), self.x.abs())
    }

    /// Euclidean distance to another position.
    pub fn distance(self, other: Pos) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle, half-open on the right and bottom:
/// `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn contains(&self, p: Pos) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink the rectangle by `margin` cells on every side.
    pub const fn inset(&self, margin: i32) -> Rect {
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.width - margin * 2,
            self.height - margin * 2,
        )
    }

    /// Iterate every position inside the rectangle, row by row.
    pub fn points(&self) -> impl Iterator<Item = Pos> + use<> {
        let (x, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x..right).map(move |x| Pos::new(x, y)))
    }
}
