//! Palm synthesis and controller joint approximation
//!
//! Two of the derivation branches from the pose pipeline live here:
//!
//! - Midpoint palm synthesis for vendors that report a wrist and a middle
//!   knuckle but no palm.
//! - Fixed-offset finger-joint approximation for the pure-controller case,
//!   where no skeleton exists at all.

use crate::config::PalmOrientationFix;
use openspatial_types::{HandJoint, Handedness, JointPoseSet, Pose, Quat, Vec3};

/// Synthesize a palm pose from the wrist and middle knuckle.
///
/// Position is the midpoint of the two joint positions; rotation is the
/// wrist rotation, optionally flipped 180° about the local X axis for the
/// configured handedness (inconsistent SDK chirality correction).
///
/// Returns `None` when either source joint is absent — callers treat that
/// as "cannot compute", not as an error.
#[must_use]
pub fn synthesize_palm(
    joints: &JointPoseSet,
    handedness: Handedness,
    fix: &PalmOrientationFix,
) -> Option<Pose> {
    let wrist = joints.get(HandJoint::Wrist)?;
    let knuckle = joints.get(HandJoint::MiddleKnuckle)?;

    let position = wrist.position.lerp(knuckle.position, 0.5);

    let flip = match handedness {
        Handedness::Left => fix.flip_left,
        Handedness::Right => fix.flip_right,
    };
    let rotation = if flip {
        wrist.rotation * Quat::from_rotation_x(std::f32::consts::PI)
    } else {
        wrist.rotation
    };

    Some(Pose::new(position, rotation))
}

/// Approximate hand joints from a controller grip pose.
///
/// Used only for bounds and gesture heuristics when a held controller
/// stands in for a hand — not for visual fidelity. Offsets are along the
/// grip's local forward/right axes, with the thumb-side direction mirrored
/// per handedness.
#[must_use]
pub fn controller_hand_joints(grip: Pose, handedness: Handedness) -> JointPoseSet {
    let forward = grip.forward();
    let inward = match handedness {
        Handedness::Left => grip.right(),
        Handedness::Right => -grip.right(),
    };

    let mut joints = JointPoseSet::new();

    let index_tip = grip.position + forward * 0.1;
    joints.set(HandJoint::IndexTip, Pose::new(index_tip, grip.rotation));

    let thumb = grip.position + inward * 0.04;
    joints.set(HandJoint::ThumbTip, Pose::new(thumb, grip.rotation));
    joints.set(HandJoint::ThumbMetacarpal, Pose::new(thumb, grip.rotation));
    joints.set(HandJoint::ThumbDistal, Pose::new(thumb, grip.rotation));

    let pinky = grip.position - inward * 0.03;
    joints.set(HandJoint::PinkyKnuckle, Pose::new(pinky, grip.rotation));

    joints.set(HandJoint::Palm, grip);

    let wrist = grip.position - forward * 0.05;
    joints.set(HandJoint::Wrist, Pose::new(wrist, grip.rotation));

    joints
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn no_fix() -> PalmOrientationFix {
        PalmOrientationFix {
            flip_left: false,
            flip_right: false,
        }
    }

    #[test]
    fn palm_position_is_the_midpoint() {
        let mut joints = JointPoseSet::new();
        joints.set(HandJoint::Wrist, Pose::from_position(Vec3::ZERO));
        joints.set(HandJoint::MiddleKnuckle, Pose::from_position(Vec3::new(0.0, 0.0, 10.0)));

        let palm = synthesize_palm(&joints, Handedness::Right, &no_fix());
        assert_eq!(
            palm.map(|p| p.position),
            Some(Vec3::new(0.0, 0.0, 5.0))
        );
    }

    #[test]
    fn palm_rotation_follows_the_wrist_without_fix() {
        let rotation = Quat::from_rotation_y(1.0);
        let mut joints = JointPoseSet::new();
        joints.set(HandJoint::Wrist, Pose::new(Vec3::ZERO, rotation));
        joints.set(HandJoint::MiddleKnuckle, Pose::from_position(Vec3::Z));

        let palm = synthesize_palm(&joints, Handedness::Left, &no_fix());
        assert_eq!(palm.map(|p| p.rotation), Some(rotation));
    }

    #[test]
    fn configured_flip_rotates_palm_about_x() {
        let fix = PalmOrientationFix {
            flip_left: true,
            flip_right: false,
        };
        let mut joints = JointPoseSet::new();
        joints.set(HandJoint::Wrist, Pose::ZERO_IDENTITY);
        joints.set(HandJoint::MiddleKnuckle, Pose::from_position(Vec3::Z));

        let left = synthesize_palm(&joints, Handedness::Left, &fix);
        let right = synthesize_palm(&joints, Handedness::Right, &fix);

        // Left palm up flips to down; right is untouched.
        let left_up = left.map(|p| p.up()).unwrap_or(Vec3::ZERO);
        assert_relative_eq!(left_up.y, -1.0, epsilon = 1e-6);
        assert_eq!(right.map(|p| p.rotation), Some(Quat::IDENTITY));
    }

    #[test]
    fn missing_source_joint_means_cannot_compute() {
        let mut joints = JointPoseSet::new();
        joints.set(HandJoint::Wrist, Pose::ZERO_IDENTITY);
        assert_eq!(synthesize_palm(&joints, Handedness::Left, &no_fix()), None);
    }

    #[test]
    fn controller_joints_sit_at_fixed_offsets() {
        let grip = Pose::from_position(Vec3::new(0.0, 1.0, 0.0));
        let joints = controller_hand_joints(grip, Handedness::Right);

        assert_eq!(
            joints.get(HandJoint::IndexTip).map(|p| p.position),
            Some(Vec3::new(0.0, 1.0, 0.1))
        );
        assert_eq!(
            joints.get(HandJoint::ThumbTip).map(|p| p.position),
            Some(Vec3::new(-0.04, 1.0, 0.0))
        );
        assert_eq!(
            joints.get(HandJoint::Wrist).map(|p| p.position),
            Some(Vec3::new(0.0, 1.0, -0.05))
        );
        assert_eq!(joints.get(HandJoint::Palm), Some(grip));
    }

    #[test]
    fn thumb_side_mirrors_with_handedness() {
        let grip = Pose::ZERO_IDENTITY;
        let left = controller_hand_joints(grip, Handedness::Left);
        let right = controller_hand_joints(grip, Handedness::Right);

        let left_thumb = left.get(HandJoint::ThumbTip).map(|p| p.position.x);
        let right_thumb = right.get(HandJoint::ThumbTip).map(|p| p.position.x);
        assert_eq!(left_thumb, Some(0.04));
        assert_eq!(right_thumb, Some(-0.04));
    }
}
