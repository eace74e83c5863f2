use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_GRID_SIZE: usize = 25;
pub const DEFAULT_CELL_SIZE: u32 = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Board and clock parameters. Read once at process start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub cell_size: u32,
    pub tick_interval_ms: u64,
}

impl SnakeSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn board_pixels(&self) -> f32 {
        (self.grid_size as u32 * self.cell_size) as f32
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 5 || self.grid_size > 100 {
            return Err("grid_size must be between 5 and 100".to_string());
        }
        if self.cell_size < 4 || self.cell_size > 64 {
            return Err("cell_size must be between 4 and 64".to_string());
        }
        if self.tick_interval_ms < 20 || self.tick_interval_ms > 2000 {
            return Err("tick_interval_ms must be between 20 and 2000".to_string());
        }
        Ok(())
    }
}
