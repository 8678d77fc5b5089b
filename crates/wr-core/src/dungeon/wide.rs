//! Corridor widening for the wide-path variant.

use super::cell::CellState;
use super::geometry::Pos;
use super::grid::Grid;

/// Widen the surviving maze corridors by one cell.
///
/// Runs once, after dead-end pruning. For every expandable cell still in
/// floor state, every wall among its 8 surrounding cells becomes floor,
/// unless a door sits anywhere in the cell's surroundings or in the
/// surroundings of those surroundings. Corridors that touch a door stay
/// single-width so doors remain meaningful chokepoints.
pub fn expand_tunnels(grid: &mut Grid, expandable: &[Pos]) {
    log::debug!("widening {} corridor cells", expandable.len());

    for &pos in expandable {
        if grid.state(pos) != CellState::Floor {
            continue;
        }

        let ring = surrounding(grid, pos);
        let near_door = ring.iter().any(|&c| {
            grid.state(c) == CellState::Door
                || surrounding(grid, c)
                    .iter()
                    .any(|&cc| grid.state(cc) == CellState::Door)
        });
        if near_door {
            continue;
        }

        for c in ring {
            if grid.state(c) == CellState::Wall {
                grid.set_state(c, CellState::Floor);
            }
        }
    }
}

/// The in-bounds cells of the 8-neighborhood around `pos`.
fn surrounding(grid: &Grid, pos: Pos) -> Vec<Pos> {
    let mut cells = Vec::with_capacity(8);
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let p = Pos::new(pos.x + dx, pos.y + dy);
            if grid.in_bounds(p) {
                cells.push(p);
            }
        }
    }
    cells
}
