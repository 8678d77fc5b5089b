//! Room placement.

use crate::GameRng;

use super::cell::CellState;
use super::config::GeneratorConfig;
use super::generator::GenState;
use super::geometry::Rect;
use super::grid::Grid;

/// Carve non-overlapping rectangular rooms, each starting a new region.
///
/// Repeats up to `room_trials` times: sample a random odd-sized rectangle
/// on the odd-coordinate lattice, reject it if it intersects any accepted
/// room, otherwise carve it. Rejections are skipped silently, so the final
/// room count is probabilistic.
pub fn place_rooms(grid: &mut Grid, cfg: &GeneratorConfig, st: &mut GenState) {
    log::debug!("placing rooms, up to {} trials", cfg.room_trials);

    for _ in 0..cfg.room_trials {
        let Some(room) = random_room(grid, cfg, &mut st.rng) else {
            continue;
        };
        if st.rooms.iter().any(|r| r.intersects(&room)) {
            continue;
        }

        let region = st.begin_region();
        for p in room.points() {
            grid.set_state(p, CellState::Floor);
            grid.set_region(p, region);
        }
        st.rooms.push(room);
    }

    log::debug!("placed {} rooms", st.rooms.len());
}

/// Sample a candidate rectangle: odd sides in the configured range, odd
/// top-left coordinates, fully inside the grid interior. Returns `None` if
/// the sampled size cannot fit.
fn random_room(grid: &Grid, cfg: &GeneratorConfig, rng: &mut GameRng) -> Option<Rect> {
    let span = cfg.room_max_side.saturating_sub(cfg.room_min_side) as u32;
    let mut width = cfg.room_min_side + rng.rn2(span) as usize;
    let mut height = cfg.room_min_side + rng.rn2(span) as usize;
    if width % 2 == 0 {
        width += 1;
    }
    if height % 2 == 0 {
        height += 1;
    }
    if width >= grid.width() || height >= grid.height() {
        return None;
    }

    // Halving then doubling snaps the corner to the odd lattice; the room
    // then ends one cell short of the far border.
    let x = (rng.rn2((grid.width() - width) as u32) / 2) * 2 + 1;
    let y = (rng.rn2((grid.height() - height) as u32) / 2) * 2 + 1;

    Some(Rect::new(x as i32, y as i32, width as i32, height as i32))
}
