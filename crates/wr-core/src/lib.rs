//! wr-core: maze-dungeon layout generation.
//!
//! Produces a finished 2D grid of cell states (wall/floor/door) by placing
//! non-overlapping rooms, flooding the leftover space with winding
//! corridors, merging every carved region into one connected whole, and
//! retracting dead-end corridors. A wide-corridor variant carves 2-cell
//! passages with periodic doors.
//!
//! The crate is pure logic with no I/O; rendering the grid into a tile or
//! voxel world is the caller's job.

pub mod dungeon;

mod rng;

pub use rng::GameRng;
