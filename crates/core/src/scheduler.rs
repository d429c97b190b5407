//! Fixed-step tick scheduler
//!
//! The engine never looks at a clock. The game loop feeds elapsed wall time in
//! here and gets back how many ticks are due. Keeping this pure means tests can
//! drive it with synthetic time.

use crate::types::MAX_CATCH_UP_TICKS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    interval_ms: u32,
    accumulator_ms: u32,
    running: bool,
    max_catch_up: u32,
}

impl TickScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
            running: false,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }

    pub fn with_max_catch_up(mut self, ticks: u32) -> Self {
        self.max_catch_up = ticks.max(1);
        self
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin emitting ticks. A full interval passes before the first one.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator_ms = 0;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator_ms = 0;
    }

    /// Restart the current interval without changing the running flag.
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }

    /// Feed elapsed time, returning the number of ticks that are now due.
    ///
    /// After a long stall at most `max_catch_up` ticks are returned and the
    /// remaining backlog is dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.interval_ms;
        self.accumulator_ms %= self.interval_ms;

        if due > self.max_catch_up {
            log::debug!(
                "scheduler dropped {} overdue ticks",
                due - self.max_catch_up
            );
            return self.max_catch_up;
        }
        due
    }

    /// Milliseconds until the next tick is due (the input poll timeout).
    pub fn time_until_next_ms(&self) -> u32 {
        if !self.running {
            return self.interval_ms;
        }
        self.interval_ms - self.accumulator_ms
    }
}
