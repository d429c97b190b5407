//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, RunState};

const BACKGROUND: Rgb = Rgb::hex(0x0f172a);
const BOARD: Rgb = Rgb::hex(0x1d4ed8);
const BOARD_EDGE: Rgb = Rgb::hex(0x60a5fa);
const SNAKE_HEAD: Rgb = Rgb::hex(0x6ee7b7);
const SNAKE_TAIL: Rgb = Rgb::hex(0x0f766e);
const FOOD: Rgb = Rgb::hex(0xf87171);
const TEXT: Rgb = Rgb::hex(0xf5f5f5);
const ACCENT: Rgb = Rgb::hex(0x6d28d9);

/// Food pulse half-period; the glyph alternates every step.
const FOOD_PULSE_MS: u64 = 150;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Origin of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `pulse_ms` drives the food animation; pass a clock that only advances
    /// while the game is running to keep paused frames identical.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        pulse_ms: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::new(TEXT, BACKGROUND)));

        let board_w = snap.width.saturating_mul(self.cell_w);
        let board_h = snap.height.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let style = Style::new(BOARD_EDGE, BOARD).dim();
                self.fill_cell(fb, frame, Cell::new(x as i32, y as i32), '·', style);
            }
        }

        if let Some(food) = snap.food {
            let (ch, fg) = food_pulse(pulse_ms);
            self.fill_cell(fb, frame, food, ch, Style::new(fg, BOARD).bold());
        }

        // Tail first so the head wins if anything ever overlaps.
        let len = snap.snake.len();
        for (i, &cell) in snap.snake.iter().enumerate().rev() {
            let style = if i == 0 {
                Style::new(SNAKE_HEAD, BOARD).bold()
            } else {
                Style::new(segment_color(i, len), BOARD)
            };
            self.fill_cell(fb, frame, cell, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, frame);
        self.draw_overlay(fb, snap, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, pulse_ms: u64, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, pulse_ms, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left character of a board cell.
    fn cell_origin(&self, frame: Frame, cell: Cell) -> Option<(u16, u16)> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let px = frame.x as u32 + 1 + cell.x as u32 * self.cell_w as u32;
        let py = frame.y as u32 + 1 + cell.y as u32 * self.cell_h as u32;
        Some((u16::try_from(px).ok()?, u16::try_from(py).ok()?))
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, cell: Cell, ch: char, style: Style) {
        if let Some((px, py)) = self.cell_origin(frame, cell) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = Style::new(BOARD_EDGE, BACKGROUND);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::new(TEXT, BACKGROUND).bold();
        let value = Style::new(TEXT, BACKGROUND);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, snap.snake.len() as u32, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LAST", label);
        match snap.last_round {
            Some(round) => {
                let end = fb.put_u32(panel_x, y + 1, round.score, value);
                if round.won {
                    fb.put_str(end + 1, y + 1, "WIN", Style::new(SNAKE_HEAD, BACKGROUND));
                }
            }
            None => {
                fb.put_str(panel_x, y + 1, "-", value);
            }
        }
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "ROUND", label);
        fb.put_u32(panel_x, y + 1, snap.rounds_played.saturating_add(1), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SOUND", label);
        let sound = if snap.sound_enabled { "ON" } else { "OFF" };
        fb.put_str(panel_x, y + 1, sound, value);
        y = y.saturating_add(3);

        for line in ["SPC pause", "M   sound", "R   restart", "Q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let (title, show_score) = match (snap.run_state, snap.last_round) {
            (RunState::Paused, _) => ("PAUSED", false),
            (RunState::Idle, None) => ("PRESS SPACE", false),
            (RunState::Idle, Some(round)) if round.won => ("YOU WIN", true),
            (RunState::Idle, Some(_)) => ("GAME OVER", true),
            (RunState::Won, _) => ("YOU WIN", true),
            (RunState::GameOver, _) => ("GAME OVER", true),
            (RunState::Running, _) => return,
        };

        let style = Style::new(TEXT, ACCENT).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        self.put_centered(fb, frame, mid_y, title, style);

        if show_score {
            if let Some(round) = snap.last_round {
                // "SCORE " + up to 10 digits
                let digits = count_digits(round.score);
                let w = 6 + digits;
                let x = frame.x.saturating_add(frame.w.saturating_sub(w) / 2);
                let y = mid_y.saturating_add(1);
                let end = fb.put_str(x, y, "SCORE ", style);
                fb.put_u32(end, y, round.score, style);
            }
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: Style) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

/// Body color for segment `i` of `len`, shading from head to tail.
fn segment_color(i: usize, len: usize) -> Rgb {
    if len <= 1 {
        return SNAKE_HEAD;
    }
    let t = (i * 1000 / (len - 1)) as u32;
    SNAKE_HEAD.mix(SNAKE_TAIL, t)
}

/// Glyph and color of the food at a point in time.
fn food_pulse(pulse_ms: u64) -> (char, Rgb) {
    match (pulse_ms / FOOD_PULSE_MS) % 4 {
        0 => ('█', FOOD),
        1 => ('▓', FOOD.mix(TEXT, 200)),
        2 => ('█', FOOD.mix(TEXT, 350)),
        _ => ('▓', FOOD.mix(TEXT, 200)),
    }
}

fn count_digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_color_endpoints() {
        assert_eq!(segment_color(0, 1), SNAKE_HEAD);
        assert_eq!(segment_color(0, 5), SNAKE_HEAD);
        assert_eq!(segment_color(4, 5), SNAKE_TAIL);
    }

    #[test]
    fn test_food_pulse_cycles() {
        assert_eq!(food_pulse(0).0, '█');
        assert_eq!(food_pulse(FOOD_PULSE_MS).0, '▓');
        assert_eq!(food_pulse(4 * FOOD_PULSE_MS), food_pulse(0));
    }

    #[test]
    fn test_count_digits() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(u32::MAX), 10);
    }
}
