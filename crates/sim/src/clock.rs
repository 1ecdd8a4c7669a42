use std::time::Instant;

/// Measures per-frame wall-clock deltas, clamped to a maximum step.
///
/// Physics integrates the measured elapsed time, never an assumed constant,
/// so simulation speed is frame-rate independent. The clamp bounds the step
/// after long stalls (background tab, debugger pause).
pub struct FrameClock {
    last: Instant,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: Instant::now(),
            max_delta,
        }
    }

    /// Seconds since the previous tick, clamped to `max_delta`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta.min(self.max_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn delta_is_non_negative_and_clamped() {
        let mut clock = FrameClock::new(0.1);
        for _ in 0..5 {
            let dt = clock.tick();
            assert!(dt >= 0.0);
            assert!(dt <= 0.1);
        }
    }

    #[test]
    fn delta_reflects_elapsed_time() {
        let mut clock = FrameClock::new(1.0);
        sleep(Duration::from_millis(20));
        let dt = clock.tick();
        assert!(dt >= 0.02, "measured only {dt}s");
        assert!(dt < 1.0);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new(0.005);
        sleep(Duration::from_millis(20));
        assert_eq!(clock.tick(), 0.005);
    }
}
