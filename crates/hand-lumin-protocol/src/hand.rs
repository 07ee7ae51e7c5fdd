//! Tracked-hand frame construction from Lumin keypoint samples

use crate::keypoints::{LuminKeyPoint, map_keypoint};
use openspatial_types::{HandFrame, JointPoseSet, KeyPose, PinchSignal, Pose, Vec3};

/// One Lumin keypoint as sampled this tick.
#[derive(Debug, Clone, Copy)]
pub struct LuminKeyPointSample {
    /// Keypoint identifier.
    pub keypoint: LuminKeyPoint,
    /// Keypoint position in world space. Lumin reports no per-point
    /// orientation.
    pub position: Vec3,
    /// Whether the tracker considers this point valid this tick.
    pub is_valid: bool,
}

/// Everything the Lumin tracker reports for one hand on one tick.
#[derive(Debug, Clone)]
pub struct LuminHandSample {
    /// Whether the hand is visible to the tracker.
    pub is_tracked: bool,
    /// Sampled keypoints with validity flags.
    pub keypoints: Vec<LuminKeyPointSample>,
    /// Recognized key pose.
    pub key_pose: KeyPose,
    /// Recognizer confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Normalize a Lumin hand sample into a canonical [`HandFrame`].
///
/// Invalid keypoints are skipped rather than written as garbage poses;
/// the persistent store keeps the previous tick's value for those joints.
/// All joints carry identity rotation — the vendor supplies positions
/// only.
#[must_use]
pub fn hand_frame(sample: &LuminHandSample) -> HandFrame {
    if !sample.is_tracked {
        return HandFrame::untracked();
    }

    let mut joints = JointPoseSet::new();
    for point in &sample.keypoints {
        if !point.is_valid {
            continue;
        }
        if let Some(joint) = map_keypoint(point.keypoint) {
            joints.set(joint, Pose::from_position(point.position));
        }
    }

    HandFrame {
        tracked: true,
        joints,
        pinch: PinchSignal::Classified {
            key_pose: sample.key_pose,
            confidence: sample.confidence,
        },
        pointer_pose: None,
    }
}
