//! Sound collaborator: turns engine events into terminal bells.

use std::io::Write;

use anyhow::Result;

use crate::types::GameEvent;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell on food, game over and a full board.
pub struct Beeper<W: Write> {
    out: W,
}

impl<W: Write> Beeper<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Play the sounds for `events`. Returns how many bells were rung.
    ///
    /// Nothing is written while muted; the events are still consumed.
    pub fn play<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a GameEvent>,
        enabled: bool,
    ) -> Result<usize> {
        let mut rung = 0;
        for event in events {
            if !enabled {
                continue;
            }
            match event {
                GameEvent::FoodEaten
                | GameEvent::GameOver { .. }
                | GameEvent::BoardFull { .. } => {
                    self.out.write_all(BEL)?;
                    rung += 1;
                }
            }
        }
        if rung > 0 {
            self.out.flush()?;
        }
        Ok(rung)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
