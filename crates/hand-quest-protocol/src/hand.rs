//! Tracked-hand frame construction from OVR skeleton samples

use crate::bones::{QuestBone, map_bone};
use openspatial_types::{HandFrame, JointPoseSet, PinchSignal, Pose};

/// One OVR bone as sampled from the skeleton this tick.
#[derive(Debug, Clone, Copy)]
pub struct QuestBoneSample {
    /// Bone identifier.
    pub bone: QuestBone,
    /// Bone transform in world space.
    pub pose: Pose,
}

/// Everything the OVR runtime reports for one hand on one tick.
#[derive(Debug, Clone)]
pub struct QuestHandSample {
    /// `OVRHand.IsTracked`.
    pub is_tracked: bool,
    /// Enumerated skeleton bones.
    pub bones: Vec<QuestBoneSample>,
    /// `OVRHand.PointerPose` — the platform hand ray.
    pub pointer_pose: Pose,
    /// `OVRHand.GetFingerIsPinching(Index)`.
    pub index_pinching: bool,
}

/// Normalize an OVR hand sample into a canonical [`HandFrame`].
///
/// Bones without a canonical counterpart are skipped; the native pointer
/// pose rides along so the tracker uses the platform hand ray instead of
/// synthesizing one.
#[must_use]
pub fn hand_frame(sample: &QuestHandSample) -> HandFrame {
    if !sample.is_tracked {
        return HandFrame::untracked();
    }

    let mut joints = JointPoseSet::new();
    for bone_sample in &sample.bones {
        if let Some(joint) = map_bone(bone_sample.bone) {
            joints.set(joint, bone_sample.pose);
        }
    }

    HandFrame {
        tracked: true,
        joints,
        pinch: PinchSignal::Direct(sample.index_pinching),
        pointer_pose: Some(sample.pointer_pose),
    }
}
