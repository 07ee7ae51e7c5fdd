//! Touch-controller frame construction
//!
//! Controller poses come out of the runtime in play-space-local
//! coordinates; the tracker composes them with the play-space transform.
//! The analog index trigger is passed through as an axis — the tracker
//! applies the select dead zone so the threshold stays configurable in one
//! place.

use openspatial_types::{ControllerFrame, Quat, Vec3};

/// Default trigger travel treated as noise rather than a press.
pub const TRIGGER_DEAD_ZONE: f32 = 0.1;

/// Everything the OVR runtime reports for one touch controller on one
/// tick.
#[derive(Debug, Clone, Copy)]
pub struct QuestControllerSample {
    /// `OVRInput.IsControllerConnected`.
    pub connected: bool,
    /// `OVRInput.GetControllerPositionTracked`.
    pub position_tracked: bool,
    /// `OVRInput.GetControllerPositionValid`.
    pub position_valid: bool,
    /// `OVRInput.GetControllerOrientationValid`.
    pub rotation_valid: bool,
    /// Local controller position within the play space.
    pub local_position: Vec3,
    /// Local controller rotation within the play space.
    pub local_rotation: Quat,
    /// `OVRInput.GetLocalControllerVelocity`.
    pub local_velocity: Vec3,
    /// `OVRInput.GetLocalControllerAngularVelocity`.
    pub local_angular_velocity: Vec3,
    /// Index trigger axis in `[0, 1]`.
    pub trigger: f32,
}

/// Normalize a touch-controller sample into a canonical
/// [`ControllerFrame`].
///
/// A controller counts as tracked only while it is both connected and
/// position-tracked; anything else produces an untracked frame and the
/// lifecycle machine tears the slot down.
#[must_use]
pub fn controller_frame(sample: &QuestControllerSample) -> ControllerFrame {
    if !sample.connected || !sample.position_tracked {
        return ControllerFrame::untracked();
    }

    ControllerFrame {
        tracked: true,
        position_valid: sample.position_valid,
        rotation_valid: sample.rotation_valid,
        local_position: sample.local_position,
        local_rotation: sample.local_rotation,
        local_velocity: sample.local_velocity,
        local_angular_velocity: sample.local_angular_velocity,
        trigger: sample.trigger,
    }
}
