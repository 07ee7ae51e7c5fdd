//! Rigid-transform pose type
//!
//! A pose is a position plus a unit quaternion, with no scale component.
//! Equality is exact bitwise field comparison: the change-dispatch gate
//! treats "any field moved" as a change, so an epsilon comparison would
//! swallow legitimate sub-epsilon updates.

use glam::{Mat3, Quat, Vec3};

/// A rigid transform: position and rotation, no scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in meters.
    pub position: Vec3,
    /// Orientation as a unit quaternion.
    pub rotation: Quat,
}

impl Pose {
    /// The zero-position, identity-rotation pose.
    pub const ZERO_IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a pose from position and rotation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Create a pose at `position` with identity rotation.
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Forward direction of this pose (local +Z in world space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Right direction of this pose (local +X in world space).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Up direction of this pose (local +Y in world space).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Transform a point from this pose's local space into world space.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point
    }

    /// Transform a direction from this pose's local space into world space.
    #[must_use]
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// Compose a local pose into this pose's space (play-space transform).
    #[must_use]
    pub fn transform_pose(&self, local: Pose) -> Pose {
        Pose {
            position: self.transform_point(local.position),
            rotation: self.rotation * local.rotation,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::ZERO_IDENTITY
    }
}

/// Orientation whose +Z axis points along `forward`, with +Y kept as close
/// to world up as possible.
///
/// Returns identity when `forward` is degenerate (zero length or parallel
/// to world up), so callers never receive a NaN rotation.
#[must_use]
pub fn look_rotation(forward: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = Vec3::Y.cross(forward).normalize_or_zero();
    if right == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
