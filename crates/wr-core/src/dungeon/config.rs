//! Generation parameters.

use serde::{Deserialize, Serialize};

use super::error::LayoutError;

/// Corridor carving style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorridorStyle {
    /// 1-cell corridors with occasional redundant loop connectors.
    #[default]
    Narrow,
    /// 2-cell corridors widened in a post-pass, doors kept as single-width
    /// chokepoints. Gets its loops from the width expansion instead of
    /// extra connectors.
    Wide,
}

/// Tunable parameters for one generation run.
///
/// `room_trials` bounds the placement search; it is not a target room
/// count. Width and height are rounded up to the next odd value before the
/// grid is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub room_trials: u32,
    pub room_min_side: usize,
    pub room_max_side: usize,
    /// Probability that a corridor deviates from its previous direction.
    pub wind_percent: f64,
    /// Chance to open a structurally redundant connector as a loop.
    pub extra_connector_chance: f64,
    pub style: CorridorStyle,
    /// Explicit seed for reproducible output; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Narrow-corridor defaults for the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            room_trials: 300,
            room_min_side: 5,
            room_max_side: 13,
            wind_percent: 0.25,
            extra_connector_chance: 0.08,
            style: CorridorStyle::Narrow,
            seed: None,
        }
    }

    /// Wide-corridor defaults: fewer rooms, straighter corridors, no extra
    /// connectors.
    pub fn wide(width: usize, height: usize) -> Self {
        Self {
            room_trials: 10,
            wind_percent: 0.1,
            extra_connector_chance: 0.0,
            style: CorridorStyle::Wide,
            ..Self::new(width, height)
        }
    }

    /// Validate and round dimensions up to odd. Fails only on unusable
    /// dimensions; all other parameters are accepted as given.
    pub fn normalized(&self) -> Result<GeneratorConfig, LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let mut cfg = self.clone();
        cfg.width = round_up_to_odd(self.width);
        cfg.height = round_up_to_odd(self.height);
        Ok(cfg)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(51, 51)
    }
}

fn round_up_to_odd(n: usize) -> usize {
    if n % 2 == 0 { n + 1 } else { n }
}
