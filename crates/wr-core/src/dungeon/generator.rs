//! Generation driver: phase orchestration and the finished dungeon.

use serde::Serialize;

use crate::GameRng;

use super::config::{CorridorStyle, GeneratorConfig};
use super::connect::connect_regions;
use super::error::LayoutError;
use super::geometry::{Pos, Rect};
use super::grid::{Grid, RegionId};
use super::maze::fill_tunnels;
use super::prune::remove_dead_ends;
use super::rooms::place_rooms;
use super::wide::expand_tunnels;

/// Mutable bookkeeping threaded through the phases: the RNG, the
/// monotonically increasing region counter, the accepted room list, and the
/// cells eligible for width expansion. Owned exclusively by one generation
/// run; nothing here is ambient or shared.
#[derive(Debug)]
pub struct GenState {
    pub rng: GameRng,
    pub next_region: RegionId,
    pub rooms: Vec<Rect>,
    pub expandable: Vec<Pos>,
}

impl GenState {
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            next_region: 0,
            rooms: Vec::new(),
            expandable: Vec::new(),
        }
    }

    /// Start a new region and return its id.
    pub fn begin_region(&mut self) -> RegionId {
        let region = self.next_region;
        self.next_region += 1;
        region
    }

    /// Number of regions started so far.
    pub fn region_count(&self) -> usize {
        self.next_region
    }
}

/// A finished dungeon layout: the grid of cell states plus the seed that
/// produced it. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dungeon {
    grid: Grid,
    seed: u64,
}

impl Dungeon {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The seed this layout was generated from, whether it was given
    /// explicitly or drawn from entropy. Regenerating with it reproduces
    /// the layout bit-identically.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Generate a dungeon layout.
///
/// Phases run in order, each fully consuming the grid before the next:
/// place rooms, carve the maze into remaining wall cells, connect regions,
/// remove dead ends, and for [`CorridorStyle::Wide`] expand corridors.
pub fn generate(config: &GeneratorConfig) -> Result<Dungeon, LayoutError> {
    let cfg = config.normalized()?;
    let rng = match cfg.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();
    log::info!(
        "generating {}x{} dungeon, seed {}",
        cfg.width,
        cfg.height,
        seed
    );

    let mut grid = Grid::new(cfg.width, cfg.height);
    let mut st = GenState::new(rng);

    place_rooms(&mut grid, &cfg, &mut st);
    fill_tunnels(&mut grid, &cfg, &mut st);
    connect_regions(&mut grid, &cfg, &mut st);
    remove_dead_ends(&mut grid, &mut st.expandable);
    if cfg.style == CorridorStyle::Wide {
        expand_tunnels(&mut grid, &st.expandable);
    }

    Ok(Dungeon { grid, seed })
}
