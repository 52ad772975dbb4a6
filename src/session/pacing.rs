//! Fixed delays that pace the game loop
//!
//! The loop never blocks on input; these sleeps are its only suspension
//! points.

use std::time::{Duration, Instant};

/// Normal delay between loop iterations
pub const FRAME_DURATION: Duration = Duration::from_millis(50);
/// Longer pause right after a point so players see the serve
pub const SCORE_PAUSE: Duration = Duration::from_millis(500);
/// How often to re-check an undersized terminal
pub const RESIZE_RETRY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub frame: Duration,
    pub after_score: Duration,
    pub resize_retry: Duration,
}

impl Pacing {
    /// No delays at all, for driving the loop from tests
    pub fn instant() -> Self {
        Self {
            frame: Duration::ZERO,
            after_score: Duration::ZERO,
            resize_retry: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            frame: FRAME_DURATION,
            after_score: SCORE_PAUSE,
            resize_retry: RESIZE_RETRY,
        }
    }
}

/// Sleep for whatever is left of `frame` since `frame_start`.
///
/// Call at the end of each loop iteration so the game runs at the same
/// speed regardless of how long drawing took.
pub fn limit_frame_rate(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        std::thread::sleep(frame - elapsed);
    }
}

pub fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}
