//! Tracker configuration
//!
//! One explicit struct constructed at startup and passed by reference into
//! the pipeline; there is no ambient global configuration.

use serde::{Deserialize, Serialize};

/// Noise parameters for one smoothed channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalmanParams {
    /// Process noise.
    pub q: f32,
    /// Measurement noise.
    pub r: f32,
}

impl Default for KalmanParams {
    fn default() -> Self {
        Self {
            q: openspatial_filters::DEFAULT_Q,
            r: openspatial_filters::DEFAULT_R,
        }
    }
}

/// Per-handedness palm rotation correction.
///
/// Some SDK versions report palm rotations with inconsistent chirality.
/// The default flips the left palm 180° about its X axis and leaves the
/// right palm alone; the correction is SDK-version dependent, so it is
/// configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalmOrientationFix {
    /// Apply the 180° X flip to the left palm.
    pub flip_left: bool,
    /// Apply the 180° X flip to the right palm.
    pub flip_right: bool,
}

impl Default for PalmOrientationFix {
    fn default() -> Self {
        Self {
            flip_left: true,
            flip_right: false,
        }
    }
}

/// Synthesized hand-ray tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandRayConfig {
    /// Smoothing for the ray origin.
    pub origin_smoothing: KalmanParams,
    /// Smoothing for the ray direction.
    pub direction_smoothing: KalmanParams,
    /// How far below the head the aim shoulder sits, in meters.
    pub shoulder_drop: f32,
    /// Lateral shoulder offset from the head, in meters. Mirrored for the
    /// left hand.
    pub shoulder_lateral: f32,
    /// How far the palm normal may face back toward the viewer before the
    /// ray is considered not pointing.
    pub backward_tolerance: f32,
}

impl Default for HandRayConfig {
    fn default() -> Self {
        Self {
            origin_smoothing: KalmanParams::default(),
            direction_smoothing: KalmanParams::default(),
            shoulder_drop: 0.2,
            shoulder_lateral: 0.15,
            backward_tolerance: 0.6,
        }
    }
}

/// Complete tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Minimum key-pose confidence for a select to fire.
    pub pinch_confidence_threshold: f32,
    /// Trigger travel below this is not a press.
    pub trigger_dead_zone: f32,
    /// Palm rotation correction flags.
    pub palm_fix: PalmOrientationFix,
    /// Synthesized hand-ray tuning.
    pub hand_ray: HandRayConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pinch_confidence_threshold: 0.3,
            trigger_dead_zone: 0.1,
            palm_fix: PalmOrientationFix::default(),
            hand_ray: HandRayConfig::default(),
        }
    }
}
