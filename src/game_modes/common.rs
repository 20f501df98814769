//! Common utilities shared by the interactive screens
//!
//! The menu, match and career loops all redraw at a fixed rate.

use std::time::{Duration, Instant};

/// Frame budget for the configured frame rate (clamped to at least 1 FPS)
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis(1000 / target_fps.clamp(1, 1000))
}

/// Apply frame rate limiting to keep redraws steady.
///
/// This function should be called at the end of each loop iteration.
/// It sleeps for the remaining time if the frame finished early.
///
/// # Arguments
/// * `frame_start` - The `Instant` when the frame began (typically from `Instant::now()`)
/// * `frame_duration` - Budget for one frame, see [`frame_duration`]
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(30), Duration::from_millis(33));
        assert_eq!(frame_duration(0), Duration::from_millis(1000));
        assert_eq!(frame_duration(100_000), Duration::from_millis(1));
    }
}
