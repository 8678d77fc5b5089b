//! Region merging: connector scan, union of regions, junction opening.

use crate::GameRng;

use super::cell::CellState;
use super::config::GeneratorConfig;
use super::generator::GenState;
use super::geometry::{CARDINAL, Pos};
use super::grid::{Grid, RegionId};

/// Junctions become floor at this rate, doors otherwise.
const FLOOR_JUNCTION_RATE: f64 = 0.95;

/// Connectors closer than this to a freshly opened junction are dropped so
/// openings do not cluster.
const MIN_CONNECTOR_SPACING: f64 = 3.0;

/// Region ids with a secondary merge table instead of rewriting per-cell
/// ids: a disjoint-set with path-compressed find.
#[derive(Debug, Clone)]
pub struct RegionMerger {
    parent: Vec<RegionId>,
}

impl RegionMerger {
    /// Each region starts mapped to itself.
    pub fn new(regions: usize) -> Self {
        Self {
            parent: (0..regions).collect(),
        }
    }

    /// Resolve a region to its current representative.
    pub fn find(&mut self, region: RegionId) -> RegionId {
        let mut root = region;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression.
        let mut cur = region;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge `from` into `into`. Returns false if already merged.
    pub fn union(&mut self, into: RegionId, from: RegionId) -> bool {
        let a = self.find(into);
        let b = self.find(from);
        if a == b {
            return false;
        }
        self.parent[b] = a;
        true
    }

    /// Whether two regions currently resolve to the same representative.
    pub fn merged(&mut self, a: RegionId, b: RegionId) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Scan the grid interior for connector candidates: wall cells whose four
/// cardinal neighbors span two or more distinct regions.
pub fn find_connectors(grid: &Grid) -> Vec<(Pos, Vec<RegionId>)> {
    let mut candidates = Vec::new();
    for pos in grid.bounds().inset(1).points() {
        if grid.state(pos) != CellState::Wall {
            continue;
        }
        let mut regions: Vec<RegionId> = Vec::new();
        for dir in CARDINAL {
            if let Some(region) = grid.region_of(pos + dir)
                && !regions.contains(&region)
            {
                regions.push(region);
            }
        }
        if regions.len() >= 2 {
            candidates.push((pos, regions));
        }
    }
    candidates
}

/// Open a connector cell: floor at 95%, door otherwise.
pub fn open_connector(grid: &mut Grid, pos: Pos, rng: &mut GameRng) {
    if rng.next_f64() < FLOOR_JUNCTION_RATE {
        grid.set_state(pos, CellState::Floor);
    } else {
        grid.set_state(pos, CellState::Door);
    }
}

/// Merge all regions into one connected whole.
///
/// Repeatedly opens a uniformly random candidate connector and unions the
/// regions it touches, then sweeps the remaining candidates: any within
/// [`MIN_CONNECTOR_SPACING`] of the new junction is dropped, and any that
/// no longer bridges two distinct merged regions is dropped too, though it
/// is opened first with probability `extra_connector_chance` to leave a
/// redundant loop. Running out of candidates with regions still open is
/// accepted as a disconnected layout, not an error.
pub fn connect_regions(grid: &mut Grid, cfg: &GeneratorConfig, st: &mut GenState) {
    let mut candidates = find_connectors(grid);
    let mut merger = RegionMerger::new(st.region_count());
    let mut open_regions = st.region_count();

    log::debug!(
        "connecting {} regions through {} candidate connectors",
        open_regions,
        candidates.len()
    );

    while open_regions > 1 && !candidates.is_empty() {
        let pick = st.rng.rn2(candidates.len() as u32) as usize;
        let (junction, regions) = candidates[pick].clone();

        open_connector(grid, junction, &mut st.rng);

        // Usually two regions; the first becomes the destination.
        let mut roots: Vec<RegionId> = Vec::new();
        for &region in &regions {
            let root = merger.find(region);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        let dest = roots[0];
        for &root in &roots[1..] {
            if merger.union(dest, root) {
                open_regions -= 1;
            }
        }

        let mut i = 0;
        while i < candidates.len() {
            let pos = candidates[i].0;
            if pos.distance(junction) < MIN_CONNECTOR_SPACING {
                candidates.remove(i);
                continue;
            }

            let mut distinct: Vec<RegionId> = Vec::new();
            for &region in &candidates[i].1 {
                let root = merger.find(region);
                if !distinct.contains(&root) {
                    distinct.push(root);
                }
            }
            if distinct.len() < 2 {
                // No longer structurally needed, but occasionally open it
                // anyway so the dungeon is not singly connected.
                if st.rng.next_f64() < cfg.extra_connector_chance {
                    open_connector(grid, pos, &mut st.rng);
                }
                candidates.remove(i);
                continue;
            }

            i += 1;
        }
    }

    if open_regions > 1 {
        log::debug!("{} regions left unconnected", open_regions);
    }
}
