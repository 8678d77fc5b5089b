//! The dungeon grid: cell states plus a parallel region table.

use serde::Serialize;

use super::cell::CellState;
use super::error::LayoutError;
use super::geometry::{Pos, Rect};

/// A carve region id, assigned monotonically per room or maze run.
pub type RegionId = usize;

/// Owns a width x height array of cell states and a same-shaped table of
/// optional region ids, both stored as flat buffers addressed by
/// `y * width + x`. No other component touches cell memory directly.
///
/// Width and height are odd: the maze relies on odd-coordinate passage
/// centers with even-coordinate wall mid-points between them, and that
/// spacing only tiles cleanly on an odd-sized grid. `GeneratorConfig`
/// enforces the rounding before a grid is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    #[serde(skip)]
    regions: Vec<Option<RegionId>>,
}

impl Grid {
    /// Create an all-wall grid with an empty region table.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Wall; width * height],
            regions: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The full grid extent as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn in_bounds(&self, p: Pos) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn idx(&self, p: Pos) -> usize {
        // Out-of-bounds access inside the generator means a lookahead check
        // passed incorrectly; fail loudly rather than recover.
        assert!(
            self.in_bounds(p),
            "cell access out of bounds: ({}, {})",
            p.x,
            p.y
        );
        p.y as usize * self.width + p.x as usize
    }

    /// State of the cell at `p`. Panics if `p` is out of bounds; use
    /// [`Grid::get`] for the checked variant.
    pub fn state(&self, p: Pos) -> CellState {
        self.cells[self.idx(p)]
    }

    /// Bounds-checked state lookup for external callers.
    pub fn get(&self, p: Pos) -> Result<CellState, LayoutError> {
        if !self.in_bounds(p) {
            return Err(LayoutError::OutOfBounds { x: p.x, y: p.y });
        }
        Ok(self.cells[p.y as usize * self.width + p.x as usize])
    }

    pub fn set_state(&mut self, p: Pos, state: CellState) {
        let i = self.idx(p);
        self.cells[i] = state;
    }

    /// True if the in-bounds cell at `p` is floor or door.
    pub fn is_open(&self, p: Pos) -> bool {
        self.state(p).is_open()
    }

    /// True if `p` is in bounds and still wall. Lookahead checks use this
    /// so a probe past the edge reads as "not carveable" instead of
    /// panicking.
    pub fn wall_at(&self, p: Pos) -> bool {
        self.in_bounds(p) && self.state(p) == CellState::Wall
    }

    /// Region id of the cell at `p`, `None` until the cell is carved.
    pub fn region_of(&self, p: Pos) -> Option<RegionId> {
        self.regions[self.idx(p)]
    }

    pub fn set_region(&mut self, p: Pos, region: RegionId) {
        let i = self.idx(p);
        self.regions[i] = Some(region);
    }

    /// All cell states in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}
