//! Drop timer - turns elapsed wall-clock time into gravity ticks.
//!
//! The runner feeds it the time since its last call and gets back how many
//! times gravity should fire. Each firing is one render pass followed by one
//! [`GameState::tick`](crate::game_state::GameState::tick). Keeping the
//! schedule out of the engine lets tests drive the engine without a clock.

use crate::types::AUTO_DROP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl DropTimer {
    /// `interval_ms` is clamped to at least 1.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add elapsed time and return the number of firings now due.
    ///
    /// Leftover time carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms as u64 + elapsed_ms as u64;
        let fires = total / self.interval_ms as u64;
        self.accumulated_ms = (total % self.interval_ms as u64) as u32;
        fires.min(u32::MAX as u64) as u32
    }

    /// Time left until the next firing.
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.accumulated_ms
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new(AUTO_DROP_INTERVAL_MS)
    }
}
