use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Spin rates for the demo's per-frame rotation.
///
/// The rates are angular velocities in radians per second; 0.6 rad/s
/// matches the classic 0.01 rad-per-frame demo spin at 60 fps.
pub struct AnimationOptions {
    /// Rotation rate about the X axis, rad/s.
    pub pitch_rate: f32,
    /// Rotation rate about the Y axis, rad/s.
    pub yaw_rate: f32,
    /// Frame-rate cap for the demo loop (0 = unlimited).
    pub target_fps: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            pitch_rate: 0.6,
            yaw_rate: 0.6,
            target_fps: 60,
        }
    }
}
