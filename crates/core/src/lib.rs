//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, input devices, or clocks, making it:
//!
//! - **Deterministic**: Same seed and same commands produce identical games
//! - **Testable**: Ticks are plain method calls, no real time involved
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid mirroring the snake body for O(1) collision checks
//! - [`config`]: construction-time settings and their validation
//! - [`engine`]: the run state machine, direction buffering and tick rules
//! - [`food`]: bounded random food placement with a free-cell scan fallback
//! - [`rng`]: seedable LCG
//! - [`scheduler`]: fixed-step tick scheduler driven by elapsed wall time
//! - [`snake`]: ordered snake body, head first
//! - [`snapshot`]: read-only render view
//!
//! # Game Rules
//!
//! - The snake starts as one cell at (10, 10) heading right
//! - Each tick the head advances one cell in the committed direction
//! - Leaving the board or running into the body ends the round
//! - Eating food adds 10 points and grows the snake by one cell
//! - Turning straight back is ignored; only the latest valid turn per tick is applied
//! - Covering the whole board ends the round as a win
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameEngine, TickOutcome};
//! use tui_snake_types::{Cell, Direction};
//!
//! let mut game = GameEngine::new(GameConfig::with_seed(12345)).unwrap();
//! game.start();
//! game.set_food(Cell::new(15, 15));
//!
//! for _ in 0..5 {
//!     assert_eq!(game.tick(), TickOutcome::Moved);
//! }
//! assert_eq!(game.head(), Cell::new(15, 10));
//!
//! game.set_direction(Direction::Down);
//! game.tick();
//! assert_eq!(game.head(), Cell::new(15, 11));
//! ```
//!
//! # Timing
//!
//! The engine is stepped at a fixed interval (100ms by default). Feed elapsed
//! time into a [`TickScheduler`] and call [`GameEngine::tick`] once per due tick.

pub mod board;
pub mod config;
pub mod engine;
pub mod food;
pub mod rng;
pub mod scheduler;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickOutcome, EVENT_QUEUE_LEN};
pub use food::place_food;
pub use rng::SimpleRng;
pub use scheduler::TickScheduler;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
