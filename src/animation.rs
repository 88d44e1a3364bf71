//! Per-frame spin animation for the demo objects.
//!
//! The classic demo advances rotation a fixed increment per rendered frame;
//! here the rotation is integrated over elapsed wall-clock time instead, so
//! the spin rate is frame-rate independent. The consuming renderer calls
//! [`FrameClock::tick`] once per frame and feeds the delta to
//! [`Spinner::advance`].

use glam::{EulerRot, Quat};
use web_time::{Duration, Instant};

use crate::options::AnimationOptions;

/// Integrates constant pitch/yaw angular velocities into an orientation.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Rotation rate about X, rad/s.
    pitch_rate: f32,
    /// Rotation rate about Y, rad/s.
    yaw_rate: f32,
    pitch: f32,
    yaw: f32,
}

impl Spinner {
    /// Create a spinner with the given angular velocities in rad/s.
    #[must_use]
    pub fn new(pitch_rate: f32, yaw_rate: f32) -> Self {
        Self {
            pitch_rate,
            yaw_rate,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// Create a spinner from configured spin rates.
    #[must_use]
    pub fn from_options(options: &AnimationOptions) -> Self {
        Self::new(options.pitch_rate, options.yaw_rate)
    }

    /// Advance the spin by `dt` seconds of elapsed time.
    pub fn advance(&mut self, dt: f32) {
        self.pitch += self.pitch_rate * dt;
        self.yaw += self.yaw_rate * dt;
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

/// Wall-clock frame pacing: delta measurement, an optional FPS cap, and a
/// smoothed FPS estimate.
#[derive(Debug)]
pub struct FrameClock {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    /// Minimum frame duration based on the target FPS.
    min_frame_duration: Duration,
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother).
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock capped at `target_fps` (0 = unlimited); the first
    /// [`Self::tick`] measures from now.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Create a clock from the configured frame-rate cap.
    #[must_use]
    pub fn from_options(options: &AnimationOptions) -> Self {
        Self::new(options.target_fps)
    }

    /// Whether enough time has passed since the last tick to render
    /// another frame. Always true when uncapped.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call once per frame. Returns elapsed seconds since the previous
    /// call.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Current smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0)
    }
}
