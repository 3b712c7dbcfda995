use std::time::Duration;
use web_time::Instant;

const TICK: Duration = Duration::from_secs(1);

/// Turns wall-clock time into whole-second ticks for the session timer.
#[derive(Copy, Clone, Debug)]
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn start(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Ticks owed since the last call. Leftover fractions of a second carry over.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now.saturating_duration_since(self.last_tick) >= TICK {
            self.last_tick += TICK;
            ticks += 1;
        }
        ticks
    }
}
