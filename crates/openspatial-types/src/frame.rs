//! Normalized per-tick vendor samples
//!
//! Adapters translate SDK-shaped data into these frames once per tick.
//! The tracker pipeline consumes frames only; it never sees vendor bone
//! identifiers or SDK handles.

use crate::joint::JointPoseSet;
use crate::pose::Pose;
use crate::{KeyPose, Vec3};
use glam::Quat;

/// The pinch/select signal a vendor exposes.
///
/// Two shapes exist in the wild: a discrete key-pose classification with a
/// confidence scalar, or a direct per-finger "is pinching" boolean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchSignal {
    /// Key-pose classification with confidence in `[0, 1]`.
    Classified {
        /// Recognized hand shape.
        key_pose: KeyPose,
        /// Recognizer confidence.
        confidence: f32,
    },
    /// Direct SDK pinch boolean.
    Direct(bool),
}

/// One tracked hand's data for a single tick, already mapped into the
/// canonical joint taxonomy.
///
/// `joints` holds only the joints the vendor reported valid this tick; the
/// tracker merges it into the persistent store, so momentary dropouts do
/// not erase previously observed joints.
#[derive(Debug, Clone, Copy)]
pub struct HandFrame {
    /// Whether the hand is currently tracked at all.
    pub tracked: bool,
    /// Canonically mapped joints observed this tick.
    pub joints: JointPoseSet,
    /// Pinch/select signal.
    pub pinch: PinchSignal,
    /// Native SDK pointer pose, if the platform supplies one.
    pub pointer_pose: Option<Pose>,
}

impl HandFrame {
    /// An untracked hand.
    #[must_use]
    pub fn untracked() -> Self {
        Self {
            tracked: false,
            joints: JointPoseSet::new(),
            pinch: PinchSignal::Direct(false),
            pointer_pose: None,
        }
    }
}

/// One held controller's data for a single tick, in play-space-local
/// coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ControllerFrame {
    /// Whether the controller is connected and position-tracked.
    pub tracked: bool,
    /// Whether the reported position is valid this tick.
    pub position_valid: bool,
    /// Whether the reported rotation is valid this tick.
    pub rotation_valid: bool,
    /// Controller position, local to the play space.
    pub local_position: Vec3,
    /// Controller rotation, local to the play space.
    pub local_rotation: Quat,
    /// Linear velocity in meters per second, local to the play space.
    pub local_velocity: Vec3,
    /// Angular velocity in radians per second, local to the play space.
    pub local_angular_velocity: Vec3,
    /// Analog trigger axis in `[0, 1]`.
    pub trigger: f32,
}

impl ControllerFrame {
    /// A disconnected controller.
    #[must_use]
    pub fn untracked() -> Self {
        Self {
            tracked: false,
            position_valid: false,
            rotation_valid: false,
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_velocity: Vec3::ZERO,
            local_angular_velocity: Vec3::ZERO,
            trigger: 0.0,
        }
    }
}
