use std::time::{Duration, Instant};

use crate::consts::REFERENCE_FPS;

// Longest gap we'll integrate over in one go, e.g. after the window was dragged
const MAX_WALL_CLOCK_STEP: Duration = Duration::from_millis(250);

/// How simulated motion relates to rendered frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// Exactly one step per rendered frame, however long the frame took.
    FrameLocked,
    /// Steps scale with elapsed time, so that running at `reference_fps`
    /// gives one step per frame.
    WallClock { reference_fps: f64 },
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::WallClock {
            reference_fps: REFERENCE_FPS,
        }
    }
}

impl Pacing {
    pub fn frames_for(&self, elapsed: Duration) -> f64 {
        match *self {
            Pacing::FrameLocked => 1.0,
            Pacing::WallClock { reference_fps } => {
                let elapsed = elapsed.min(MAX_WALL_CLOCK_STEP);
                elapsed.as_secs_f64() * reference_fps
            }
        }
    }
}

/// Turns render ticks into a number of simulation frames.
pub struct FrameClock {
    pacing: Pacing,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(pacing: Pacing) -> Self {
        FrameClock {
            pacing,
            last_tick: None,
        }
    }

    /// Call once per rendered frame. The first tick counts as a single frame.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let frames = match self.last_tick {
            None => 1.0,
            Some(last) => self.pacing.frames_for(now.saturating_duration_since(last)),
        };
        self.last_tick = Some(now);
        frames
    }

    /// Forgets the last tick, so a pause doesn't turn into one giant step.
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_frame_locked_ignores_time() {
        let pacing = Pacing::FrameLocked;
        assert_eq!(pacing.frames_for(Duration::from_millis(1)), 1.0);
        assert_eq!(pacing.frames_for(Duration::from_secs(3)), 1.0);
    }

    #[test]
    fn test_wall_clock_scales_with_time() {
        let pacing = Pacing::WallClock {
            reference_fps: 60.0,
        };
        // Durations round to whole nanoseconds
        let frames = |secs: f64| pacing.frames_for(Duration::from_secs_f64(secs));
        assert_relative_eq!(frames(1.0 / 60.0), 1.0, max_relative = 1e-6);
        assert_relative_eq!(frames(1.0 / 30.0), 2.0, max_relative = 1e-6);
        assert_relative_eq!(frames(1.0 / 120.0), 0.5, max_relative = 1e-6);
        assert_relative_eq!(pacing.frames_for(Duration::from_millis(50)), 3.0, epsilon = 1e-9);
        // Long stalls are capped
        assert_relative_eq!(pacing.frames_for(Duration::from_secs(10)), 15.0);
    }

    #[test]
    fn test_clock_ticks() {
        let mut clock = FrameClock::new(Pacing::WallClock {
            reference_fps: 60.0,
        });
        let start = Instant::now();
        assert_eq!(clock.tick(start), 1.0);
        assert_relative_eq!(clock.tick(start + Duration::from_millis(50)), 3.0, epsilon = 1e-9);

        clock.reset();
        assert_eq!(clock.tick(start + Duration::from_secs(5)), 1.0);
    }
}
