//! Corridor carving: randomized growing-tree backtracking.

use crate::GameRng;

use super::cell::CellState;
use super::config::{CorridorStyle, GeneratorConfig};
use super::generator::GenState;
use super::geometry::{CARDINAL, Pos};
use super::grid::Grid;

/// Flood every wall pocket left between the rooms with winding corridors.
/// Each maze run becomes its own region.
///
/// The narrow style seeds a run at every odd cell still in wall state. The
/// wide style scans a coarser 4-cell lattice and skips points whose
/// neighborhood already reads as open on a full cross-pair; the check is a
/// best-effort gate for 2-wide corridors, not a coverage guarantee.
pub fn fill_tunnels(grid: &mut Grid, cfg: &GeneratorConfig, st: &mut GenState) {
    log::debug!("digging tunnels");

    match cfg.style {
        CorridorStyle::Narrow => {
            let (w, h) = (grid.width() as i32, grid.height() as i32);
            for y in (1..h).step_by(2) {
                for x in (1..w).step_by(2) {
                    let start = Pos::new(x, y);
                    if grid.state(start) != CellState::Wall {
                        continue;
                    }
                    grow_maze(grid, cfg, st, start);
                }
            }
        }
        CorridorStyle::Wide => {
            let (w, h) = (grid.width() as i32, grid.height() as i32);
            let mut y = 3;
            while y < h - 2 {
                let mut x = 3;
                while x < w - 2 {
                    let start = Pos::new(x, y);
                    if !uniformly_open(grid, start) {
                        grow_maze(grid, cfg, st, start);
                    }
                    x += 4;
                }
                y += 4;
            }
        }
    }
}

/// True if the lattice point and its immediate neighbors along at least one
/// axis are already open, meaning a wide corridor (or room) has claimed the
/// spot.
fn uniformly_open(grid: &Grid, p: Pos) -> bool {
    let open = |q: Pos| grid.state(q) != CellState::Wall;
    open(p)
        && ((open(Pos::new(p.x + 1, p.y)) && open(Pos::new(p.x - 1, p.y)))
            || (open(Pos::new(p.x, p.y + 1)) && open(Pos::new(p.x, p.y - 1))))
}

/// Run one growing-tree maze from `start`, carving a new region.
///
/// The frontier is a single stack. While the top cell has a legal carve
/// direction, the previous direction is reused with probability
/// `1 - wind_percent` when still legal, biasing corridors toward straight
/// runs; otherwise a legal direction is picked uniformly. Dead tops are
/// popped and the direction memory cleared.
pub fn grow_maze(grid: &mut Grid, cfg: &GeneratorConfig, st: &mut GenState, start: Pos) {
    let region = st.begin_region();
    let wide = cfg.style == CorridorStyle::Wide;

    grid.set_state(start, CellState::Floor);
    grid.set_region(start, region);

    let mut frontier = vec![start];
    let mut last_dir: Option<Pos> = None;

    while let Some(&cell) = frontier.last() {
        let legal: Vec<Pos> = CARDINAL
            .into_iter()
            .filter(|&dir| can_carve(grid, cell, dir, cfg.style))
            .collect();

        if legal.is_empty() {
            frontier.pop();
            last_dir = None;
            continue;
        }

        let dir = match last_dir {
            Some(d) if legal.contains(&d) && st.rng.next_f64() > cfg.wind_percent => d,
            _ => legal[st.rng.rn2(legal.len() as u32) as usize],
        };

        let mid = cell + dir;
        let far = cell + dir.times(2);
        for p in [mid, far] {
            grid.set_state(p, CellState::Floor);
            grid.set_region(p, region);
            if wide {
                st.expandable.push(p);
            }
        }

        frontier.push(far);
        last_dir = Some(dir);
    }
}

/// Check whether carving two steps from `from` in `dir` is legal.
///
/// Narrow: the cell two steps away must still be wall and the cell three
/// steps away in bounds, preserving the 1-cell wall between parallel
/// corridors. Wide: the lookahead extends to five cells, and the two cell
/// pairs straddling the target perpendicular to the travel direction must
/// also be wall, reserving width for the expansion pass.
pub fn can_carve(grid: &Grid, from: Pos, dir: Pos, style: CorridorStyle) -> bool {
    match style {
        CorridorStyle::Narrow => {
            if !grid.in_bounds(from + dir.times(3)) {
                return false;
            }
            grid.state(from + dir.times(2)) == CellState::Wall
        }
        CorridorStyle::Wide => {
            if !grid.in_bounds(from + dir.times(5)) {
                return false;
            }
            let target = from + dir.times(2);
            let perp = dir.perpendicular();
            [
                target,
                target + perp,
                target - perp,
                target + perp.times(2),
                target - perp.times(2),
            ]
            .into_iter()
            .all(|p| grid.wall_at(p))
        }
    }
}
