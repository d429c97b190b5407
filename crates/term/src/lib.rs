//! Terminal front end for the snake game.
//!
//! Snapshots are drawn into a plain framebuffer (no widget toolkit) and the
//! framebuffer is diffed onto the terminal. Cells are two characters wide so
//! the board looks square on typical fonts.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod sound;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sound::Beeper;
