//! Per-frame timing handed to the app on every redraw.

use std::time::{Duration, Instant};

/// What the clock measured for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt:          f32,
    pub now:         Instant,
    /// 0 on the first frame.
    pub frame_index: u64,
    /// Exponential moving average of `1 / dt`.
    pub fps:         f32,
}

/// Clamped frame timer.
///
/// A long stall (debugger, hidden window) is reported as at most `max_dt`
/// so damped motion never jumps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    prev:   Instant,
    frames: u64,
    min_dt: Duration,
    max_dt: Duration,
    fps:    f32,
}

const FPS_WEIGHT: f32 = 0.1;

impl FrameClock {
    /// Clamps dt to 100µs..250ms.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(min_dt: Duration, max_dt: Duration) -> Self {
        debug_assert!(min_dt <= max_dt);
        Self { prev: Instant::now(), frames: 0, min_dt, max_dt, fps: 0.0 }
    }

    /// Measures the next frame from now instead of from the last tick.
    pub fn reset(&mut self) {
        self.prev = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.saturating_duration_since(self.prev);
        let dt = elapsed.clamp(self.min_dt, self.max_dt).as_secs_f32();
        self.prev = now;

        let rate = dt.recip();
        self.fps = match self.frames {
            0 => rate,
            _ => self.fps + (rate - self.fps) * FPS_WEIGHT,
        };

        let frame_index = self.frames;
        self.frames = self.frames.wrapping_add(1);
        FrameTime { dt, now, frame_index, fps: self.fps }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_ms(min: u64, max: u64) -> FrameClock {
        FrameClock::with_clamps(Duration::from_millis(min), Duration::from_millis(max))
    }

    #[test]
    fn long_stall_reports_max_dt() {
        let mut clock = clock_ms(1, 50);
        let t0 = clock.prev;
        assert!((clock.tick_at(t0 + Duration::from_secs(3)).dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn zero_gap_reports_min_dt() {
        let mut clock = clock_ms(1, 50);
        let t0 = clock.prev;
        assert!((clock.tick_at(t0).dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn frames_are_numbered_from_zero() {
        let mut clock = FrameClock::new();
        let t0 = clock.prev;
        let a = clock.tick_at(t0 + Duration::from_millis(16));
        let b = clock.tick_at(t0 + Duration::from_millis(32));
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
    }

    #[test]
    fn fps_settles_on_steady_rate() {
        let mut clock = FrameClock::new();
        let t0 = clock.prev;
        let fps = (1..=200u32)
            .map(|i| clock.tick_at(t0 + Duration::from_millis(20) * i).fps)
            .last()
            .unwrap();
        assert!((fps - 50.0).abs() < 0.5);
    }
}
