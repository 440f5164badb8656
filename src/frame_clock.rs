use std::collections::VecDeque;
use std::time::{Duration, Instant};

const HISTORY: usize = 60;

/// Frame pacing and FPS tracking for the driver loop.
pub struct FrameClock {
    last_time: Instant,
    next_frame: Instant,
    /// Real durations of the most recent frames, in seconds
    dt_history: VecDeque<f64>,
    target_fps: f64,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            last_time: now,
            next_frame: now,
            dt_history: VecDeque::with_capacity(HISTORY),
            target_fps: f64::from(target_fps.max(1)),
        }
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps)
    }

    /// Whether the next frame is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// When the driver should wake up for the next frame.
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Records a frame that ran at `now` and schedules the following one.
    pub fn tick(&mut self, now: Instant) {
        let dt = now.duration_since(self.last_time).as_secs_f64();
        self.last_time = now;
        self.next_frame = now + self.frame_period();

        self.dt_history.push_back(dt);
        if self.dt_history.len() > HISTORY {
            self.dt_history.pop_front();
        }
    }

    /// Average frames per second over the recent history.
    pub fn avg_framerate(&self) -> f64 {
        if self.dt_history.is_empty() {
            return self.target_fps;
        }
        let avg_dt = self.dt_history.iter().sum::<f64>() / self.dt_history.len() as f64;
        if avg_dt > 0.0 {
            1.0 / avg_dt
        } else {
            self.target_fps
        }
    }
}
