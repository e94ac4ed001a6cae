use std::time::Instant;

/// Longest step handed to the integrator, in seconds.
pub const MAX_DELTA: f32 = 1.0;

/// Wall-clock time between consecutive ticks.
pub struct Delta {
    last_call: Instant,
}

impl Delta {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last_call: start }
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_call);
        self.last_call = now;
        elapsed.as_secs_f32().clamp(0.0, MAX_DELTA)
    }
}
