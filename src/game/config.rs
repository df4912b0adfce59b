use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configurations. Construction fails fast, before any game state
/// exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Each axis needs a spare cell for the apple respawn loop to pick.
    #[error("grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: i32, height: i32 },
    #[error("snake must start with at least one segment")]
    EmptySnake,
    #[error("initial snake length {length} does not fit a grid {width} cells wide")]
    SnakeTooLong { length: usize, width: i32 },
    #[error("the apple target must be at least 1")]
    ZeroAppleTarget,
    #[error("the tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: i32,
    /// Height of the game grid in cells
    pub grid_height: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Apples to eat before the game is won
    pub apples_to_win: u32,
    /// Milliseconds between logical steps
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 10,
            initial_snake_length: 3,
            apples_to_win: 5,
            tick_interval_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.initial_snake_length as i32 > self.grid_width {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }
        if self.apples_to_win == 0 {
            return Err(ConfigError::ZeroAppleTarget);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
