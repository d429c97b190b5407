//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default playfield is 20x20 cells:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Start position**: (10, 10), heading right
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed timestep interval |
//! | `SCORE_PER_FOOD` | 10 | Points awarded per food eaten |
//! | `FOOD_SAMPLE_ATTEMPTS` | 64 | Random draws before falling back to a free-cell scan |
//! | `MAX_CATCH_UP_TICKS` | 3 | Ticks the scheduler may replay after a stall |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Command, Direction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Directions know their opposite
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Cells step by one unit
//! let head = Cell::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Cell::new(11, 10));
//!
//! // Parse a command
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 20);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (20 columns)
pub const BOARD_WIDTH: u16 = 20;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 100;

/// Points added to the score for every food eaten
pub const SCORE_PER_FOOD: u32 = 10;

/// Default start cell for the snake head
pub const START_CELL: Cell = Cell::new(10, 10);

/// Random draws attempted before food placement scans for free cells.
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Upper bound on ticks the scheduler replays after the loop stalls.
pub const MAX_CATCH_UP_TICKS: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_matches_classic_layout() {
        // 400px board with 20px cells.
        assert_eq!(BOARD_WIDTH, 400 / 20);
        assert_eq!(BOARD_HEIGHT, 400 / 20);
        assert_eq!(TICK_MS, 100);
        assert_eq!(SCORE_PER_FOOD, 10);
        assert_eq!(START_CELL, Cell::new(10, 10));
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert!(d.is_opposite(d.opposite()));
        }
    }

    #[test]
    fn step_matches_delta() {
        let c = Cell::new(3, 3);
        assert_eq!(c.step(Direction::Up), Cell::new(3, 2));
        assert_eq!(c.step(Direction::Down), Cell::new(3, 4));
        assert_eq!(c.step(Direction::Left), Cell::new(2, 3));
        assert_eq!(c.step(Direction::Right), Cell::new(4, 3));
    }

    #[test]
    fn command_direction_mapping() {
        assert_eq!(Command::MoveUp.direction(), Some(Direction::Up));
        assert_eq!(Command::from_direction(Direction::Left), Command::MoveLeft);
        assert_eq!(Command::ToggleSound.direction(), None);
    }
}

/// A grid cell at integer coordinates.
///
/// Coordinates are signed so a prospective head one step past the edge
/// (e.g. `x == -1`) is representable and can be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check whether the cell lies inside a `width x height` grid
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width as i32 && self.y < height as i32
    }
}

/// Movement directions on the grid
///
/// Screen coordinates: `Up` decreases `y`, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direct reversal of this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Engine lifecycle phase
///
/// `GameOver` and `Won` are transitional: the engine re-initializes right after
/// entering them and lands in `Idle` (or `Running` when auto-restart is on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    GameOver,
    /// The snake filled every cell of the board.
    Won,
}

/// Commands that can be applied to the engine
///
/// These are produced by the key map and by anything else that wants to drive
/// the game (tests, benches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Start when stopped, pause when running
    TogglePause,
    /// Flip the sound flag
    ToggleSound,
    /// Start (no-op while running)
    Start,
    /// Pause (no-op unless running)
    Pause,
    /// Throw away the current round and start a fresh one
    Restart,
}

impl Command {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Command::MoveUp,
            Direction::Down => Command::MoveDown,
            Direction::Left => Command::MoveLeft,
            Direction::Right => Command::MoveRight,
        }
    }

    /// The direction requested by a move command
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Command;
    ///
    /// assert_eq!(Command::from_str("togglePause"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("MOVEUP"), Some(Command::MoveUp));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(Command::MoveUp),
            "movedown" => Some(Command::MoveDown),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "togglepause" => Some(Command::TogglePause),
            "togglesound" => Some(Command::ToggleSound),
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::TogglePause => "togglePause",
            Command::ToggleSound => "toggleSound",
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Restart => "restart",
        }
    }
}

/// Notifications emitted by the engine for sound/UI collaborators.
///
/// Fire-and-forget: the engine never waits on whoever consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    FoodEaten,
    GameOver { final_score: u32 },
    /// Every cell is covered by the snake; the round ends as a win.
    BoardFull { final_score: u32 },
}

/// Summary of the most recently finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSummary {
    pub score: u32,
    pub length: u32,
    pub won: bool,
}
