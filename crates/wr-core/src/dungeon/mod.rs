//! Dungeon layout generation.
//!
//! `generate()` runs the phases in order: place rooms, carve the maze,
//! connect regions, remove dead ends, and (wide variant) expand corridors.
//! Each phase fully consumes the shared grid before the next begins; the
//! phase functions are public so callers and tests can drive them
//! individually.

mod cell;
mod config;
mod connect;
mod error;
mod generator;
mod geometry;
mod grid;
mod maze;
mod prune;
mod rooms;
mod wide;

pub use cell::CellState;
pub use config::{CorridorStyle, GeneratorConfig};
pub use connect::{RegionMerger, connect_regions, find_connectors, open_connector};
pub use error::LayoutError;
pub use generator::{Dungeon, GenState, generate};
pub use geometry::{CARDINAL, Pos, Rect};
pub use grid::{Grid, RegionId};
pub use maze::{can_carve, fill_tunnels, grow_maze};
pub use prune::remove_dead_ends;
pub use rooms::place_rooms;
pub use wide::expand_tunnels;
