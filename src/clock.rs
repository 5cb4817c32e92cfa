//! Frame timing

use std::collections::VecDeque;
use std::time::Instant;

/// Monotonic millisecond clock plus a rolling frame-rate average
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    frame_times: VecDeque<f32>,
    sample_count: usize,
}

impl FrameClock {
    /// Create a clock averaging over the last `sample_count` frames
    pub fn new(sample_count: usize) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            frame_times: VecDeque::with_capacity(sample_count),
            sample_count: sample_count.max(1),
        }
    }

    /// Milliseconds since the clock was created
    pub fn ticks_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Call once per frame. Returns the time since the previous call in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        dt
    }

    fn record(&mut self, dt: f32) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the sample window
    pub fn avg_fps(&self) -> f32 {
        let avg_dt: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32;
        if avg_dt > 0.0 {
            1.0 / avg_dt
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_fps_over_window() {
        let mut clock = FrameClock::new(4);
        for _ in 0..10 {
            clock.record(0.02);
        }
        assert_eq!(clock.frame_times.len(), 4);
        assert!((clock.avg_fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_clock_reports_zero_fps() {
        let clock = FrameClock::new(8);
        assert_eq!(clock.avg_fps(), 0.0);
    }
}
