//! Engine configuration
//!
//! Everything the engine needs is fixed at construction. `Default` is the
//! classic 20x20 board at 100ms per tick; `from_env` layers the few knobs a
//! player may change on top of it.
//!
//! # Environment Variables
//!
//! - `SNAKE_SEED`: RNG seed (default: derived from the system clock)
//! - `SNAKE_AUTO_RESTART`: `1`/`true` to start a new round right after game over
//! - `SNAKE_MUTE`: `1`/`true` to start with sound disabled
//!
//! Board size and tick rate are deliberately not exposed.

use thiserror::Error;

use crate::types::{
    Cell, Direction, BOARD_HEIGHT, BOARD_WIDTH, SCORE_PER_FOOD, START_CELL, TICK_MS,
};

/// Construction-time settings for [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in cells
    pub width: u16,
    /// Board height in cells
    pub height: u16,
    /// Interval between ticks, consumed by the scheduler
    pub tick_ms: u32,
    /// Where the one-cell snake starts each round
    pub start: Cell,
    /// Heading at the start of each round
    pub initial_direction: Direction,
    /// Points per food eaten
    pub score_per_food: u32,
    /// Start a fresh round immediately after game over
    pub auto_restart: bool,
    /// Initial value of the sound flag
    pub sound_enabled: bool,
    /// RNG seed for food placement
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS,
            start: START_CELL,
            initial_direction: Direction::Right,
            score_per_food: SCORE_PER_FOOD,
            auto_restart: false,
            sound_enabled: true,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Default configuration with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Default configuration with a custom board (tests and benches)
    pub fn with_board(width: u16, height: u16, start: Cell) -> Self {
        Self {
            width,
            height,
            start,
            ..Default::default()
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), clock_seed)
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// `fallback_seed` is only called when `SNAKE_SEED` is missing or unparsable.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        fallback_seed: impl FnOnce() -> u32,
    ) -> Self {
        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or_else(fallback_seed);

        let auto_restart = lookup("SNAKE_AUTO_RESTART")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let muted = lookup("SNAKE_MUTE").map(|v| is_truthy(&v)).unwrap_or(false);

        Self {
            seed,
            auto_restart,
            sound_enabled: !muted,
            ..Default::default()
        }
    }

    /// Check that an engine can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        // Room for the snake plus one food.
        if (self.width as u32) * (self.height as u32) < 2 {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if !self.start.in_bounds(self.width, self.height) {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board has no cells ({width}x{height})")]
    EmptyBoard { width: u16, height: u16 },
    #[error("board {width}x{height} cannot hold a snake and food")]
    BoardTooSmall { width: u16, height: u16 },
    #[error("start cell ({}, {}) is outside the {width}x{height} board", .start.x, .start.y)]
    StartOutOfBounds { start: Cell, width: u16, height: u16 },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
}
