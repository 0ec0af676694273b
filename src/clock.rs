//! Frame clock
//!
//! Measures wall time between frames and sleeps away whatever is left of the
//! frame budget, so the loop runs at (at most) the target rate.

use std::time::{Duration, Instant};

pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        FrameClock {
            frame_budget: frame_budget(target_fps),
            last_tick: Instant::now(),
        }
    }

    /// Waits out the rest of the current frame and returns the seconds
    /// elapsed since the previous call.
    pub fn tick(&mut self) -> f32 {
        let spent = self.last_tick.elapsed();
        if let Some(remaining) = self.frame_budget.checked_sub(spent) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        dt
    }
}

fn frame_budget(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_sixty_fps() {
        let budget = frame_budget(60);
        assert!(budget > Duration::from_millis(16));
        assert!(budget < Duration::from_millis(17));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        assert_eq!(frame_budget(0), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_waits_at_least_one_frame() {
        let mut clock = FrameClock::new(100);
        let dt = clock.tick();
        assert!(dt >= 0.0099);
    }
}
