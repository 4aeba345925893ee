use std::time::Duration;

/// Fixed-timestep accumulator for the shell's frame loop.
/// The simulation advances in whole ticks at a fixed rate (60 Hz in the
/// reference setup) no matter how unevenly wall-clock frames arrive.
pub struct FrameClock {
    /// Seconds per simulation tick.
    dt: f32,
    /// Unspent wall-clock time.
    accumulator: f32,
}

impl FrameClock {
    /// A clock ticking `hz` times per second.
    pub fn new(hz: f32) -> Self {
        Self {
            dt: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Feed wall-clock frame time; returns how many ticks are due.
    /// The backlog is capped at ten ticks so a long stall cannot trigger a
    /// catch-up spiral.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Tick length as a `Duration`, for the shell's end-of-frame wait.
    pub fn tick(&self) -> Duration {
        Duration::from_secs_f32(self.dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_exact() {
        let mut clock = FrameClock::new(60.0);
        assert_eq!(clock.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = FrameClock::new(60.0);
        assert_eq!(clock.accumulate(0.008), 0, "half a tick is not due yet");
        assert_eq!(clock.accumulate(0.010), 1, "the second half completes it");
    }

    #[test]
    fn caps_backlog_at_ten_ticks() {
        let mut clock = FrameClock::new(60.0);
        assert_eq!(clock.accumulate(1.0), 10, "a full second of stall is capped");
    }

    #[test]
    fn tick_duration_matches_rate() {
        let clock = FrameClock::new(60.0);
        assert_eq!(clock.tick(), Duration::from_secs_f32(1.0 / 60.0));
    }
}
