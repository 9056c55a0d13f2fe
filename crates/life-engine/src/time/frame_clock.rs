use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Instantaneous frames per second derived from `dt`.
    #[inline]
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 { 1.0 / self.dt } else { 0.0 }
    }
}

/// Frame clock producing `FrameTime` snapshots and pacing deadlines.
///
/// Delta time is clamped to avoid pathological values when the process is
/// paused by the debugger or stalls.
///
/// With a target rate, [`FrameClock::next_deadline`] returns the instant the
/// next frame is due: one fixed interval after the previous tick. This mirrors
/// a fixed sleep between iterations; frames are not caught up after a stall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    interval: Option<Duration>,
}

impl FrameClock {
    /// Creates an unpaced clock with default clamps.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            interval: None,
        }
    }

    /// Creates a clock paced at `fps` frames per second (`0` means unpaced).
    pub fn with_target_fps(fps: u32) -> Self {
        Self {
            interval: target_interval(fps),
            ..Self::new()
        }
    }

    /// Instant the next frame is due, or `None` when unpaced.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.map(|i| self.last + i)
    }

    /// Whether a frame should be produced at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_deadline().is_none_or(|d| now >= d)
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

fn target_interval(fps: u32) -> Option<Duration> {
    (fps > 0).then(|| Duration::from_secs(1) / fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaced_clock_is_always_due() {
        let c = FrameClock::new();
        assert!(c.next_deadline().is_none());
        assert!(c.is_due(Instant::now()));
    }

    #[test]
    fn target_interval_from_fps() {
        assert_eq!(target_interval(0), None);
        assert_eq!(target_interval(1000), Some(Duration::from_millis(1)));
        assert_eq!(target_interval(50), Some(Duration::from_millis(20)));
    }

    #[test]
    fn deadline_is_one_interval_after_tick() {
        let mut c = FrameClock::with_target_fps(100);
        let t0 = Instant::now();
        c.tick_at(t0);
        assert_eq!(c.next_deadline(), Some(t0 + Duration::from_millis(10)));
        assert!(!c.is_due(t0 + Duration::from_millis(5)));
        assert!(c.is_due(t0 + Duration::from_millis(10)));
    }

    #[test]
    fn frame_index_increments() {
        let mut c = FrameClock::new();
        let t0 = Instant::now();
        assert_eq!(c.tick_at(t0).frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(16)).frame_index, 1);
    }

    #[test]
    fn dt_is_clamped() {
        let mut c = FrameClock::new();
        let t0 = Instant::now();
        c.tick_at(t0);
        let stalled = c.tick_at(t0 + Duration::from_secs(5));
        assert!((stalled.dt - 0.25).abs() < 1e-6);
        let same = c.tick_at(t0 + Duration::from_secs(5));
        assert!((same.dt - 0.0001).abs() < 1e-6);
    }

    #[test]
    fn fps_from_dt() {
        let ft = FrameTime { dt: 0.02, now: Instant::now(), frame_index: 0 };
        assert!((ft.fps() - 50.0).abs() < 1e-3);
    }
}
