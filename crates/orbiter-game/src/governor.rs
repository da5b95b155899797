//! Blocking frame-rate governor for the fixed 30 Hz tick loop.
//!
//! One tick per display frame: the loop body runs, then [`FrameGovernor::wait`]
//! sleeps out the remainder of the frame budget. There is no catch-up; a slow
//! frame just lets the simulation run slow, which is the right behavior for
//! an interactive single-screen game.

use std::time::{Duration, Instant};

use tracing::warn;

/// Frame times beyond this multiple of the budget get a warning; something is
/// starving the process.
const RUNAWAY_FACTOR: u32 = 4;

/// Blocking governor capping the loop at a fixed tick rate.
pub struct FrameGovernor {
    target_dt: Duration,
    frame_start: Instant,
}

impl FrameGovernor {
    /// Governor for the given ticks-per-second rate.
    pub fn new(fps: u32) -> Self {
        Self {
            target_dt: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            frame_start: Instant::now(),
        }
    }

    /// Sleep out the rest of the current frame, then start the next one.
    ///
    /// Returns the full duration of the completed frame (work + sleep).
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        if let Some(remaining) = sleep_needed(self.target_dt, elapsed) {
            std::thread::sleep(remaining);
        } else if elapsed > self.target_dt * RUNAWAY_FACTOR {
            warn!(
                "frame took {:.1}ms against a {:.1}ms budget",
                elapsed.as_secs_f64() * 1000.0,
                self.target_dt.as_secs_f64() * 1000.0
            );
        }
        let frame = self.frame_start.elapsed();
        self.frame_start = Instant::now();
        frame
    }
}

/// How much of the frame budget is left to sleep, if any.
fn sleep_needed(target_dt: Duration, elapsed: Duration) -> Option<Duration> {
    if elapsed < target_dt {
        Some(target_dt - elapsed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_frame_sleeps_the_remainder() {
        let target = Duration::from_millis(33);
        let remaining = sleep_needed(target, Duration::from_millis(5)).expect("should sleep");
        assert_eq!(remaining, Duration::from_millis(28));
    }

    #[test]
    fn test_slow_frame_does_not_sleep() {
        let target = Duration::from_millis(33);
        assert_eq!(sleep_needed(target, Duration::from_millis(40)), None);
        assert_eq!(sleep_needed(target, target), None);
    }

    #[test]
    fn test_governor_paces_a_fast_loop() {
        let mut governor = FrameGovernor::new(200); // 5ms frames, fast test
        let start = Instant::now();
        for _ in 0..4 {
            governor.wait();
        }
        // Four frames at 5ms each should take at least ~20ms.
        assert!(start.elapsed() >= Duration::from_millis(18));
    }

    #[test]
    fn test_zero_fps_clamps_to_one() {
        let governor = FrameGovernor::new(0);
        assert_eq!(governor.target_dt, Duration::from_secs(1));
    }
}
