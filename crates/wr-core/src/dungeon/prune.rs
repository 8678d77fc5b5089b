//! Dead-end removal.

use super::cell::CellState;
use super::geometry::{CARDINAL, Pos};
use super::grid::Grid;

/// Fill in dead-end corridors until none remain.
///
/// An open cell with exactly one open cardinal neighbor is a dead end and
/// reverts to wall. Filling one dead end can expose the next one behind
/// it, so the scan repeats to a fixpoint; a stub of length k needs up to k
/// passes to fully retract. Cells retracted here are also dropped from the
/// wide variant's expandable list.
pub fn remove_dead_ends(grid: &mut Grid, expandable: &mut Vec<Pos>) {
    log::debug!("removing dead ends");

    loop {
        let mut changed = false;
        // Open cells never reach the border, so the interior scan is
        // exhaustive.
        for pos in grid.bounds().inset(1).points() {
            if grid.state(pos) == CellState::Wall {
                continue;
            }
            let exits = CARDINAL
                .iter()
                .filter(|&&dir| grid.state(pos + dir) != CellState::Wall)
                .count();
            if exits != 1 {
                continue;
            }

            grid.set_state(pos, CellState::Wall);
            if !expandable.is_empty() {
                expandable.retain(|&p| p != pos);
            }
            changed = true;
        }
        if !changed {
            break;
        }
    }
}
