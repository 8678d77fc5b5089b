//! Cell states.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of one grid cell.
///
/// Every cell starts as `Wall`; generation mutates cells in place and never
/// destroys them. `Door` cells are narrative gates left by the region
/// connector; they impose no extra connectivity rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Wall = 0,
    Floor = 1,
    Door = 2,
}

impl CellState {
    /// Check if this cell can be walked through.
    pub const fn is_open(&self) -> bool {
        !matches!(self, CellState::Wall)
    }
}
