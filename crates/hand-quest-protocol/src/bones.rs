//! OVR bone taxonomy and the bone-to-joint mapping table
//!
//! The mapping is declarative: one static table, no branching. Bones the
//! canonical taxonomy has no use for (forearm stub, thumb trapezium, pinky
//! metacarpal stub) are simply absent from the table and get ignored at
//! lookup time.

use openspatial_types::HandJoint;
use thiserror::Error;

/// Bone identifiers reported by the OVR hand skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuestBone {
    /// Wrist root.
    WristRoot,
    /// Forearm stub; not part of the canonical taxonomy.
    ForearmStub,
    /// Thumb trapezium; not part of the canonical taxonomy.
    Thumb0,
    /// Thumb metacarpal.
    Thumb1,
    /// Thumb proximal phalange.
    Thumb2,
    /// Thumb distal phalange.
    Thumb3,
    /// Thumb tip.
    ThumbTip,
    /// Index proximal phalange.
    Index1,
    /// Index intermediate phalange.
    Index2,
    /// Index distal phalange.
    Index3,
    /// Index tip.
    IndexTip,
    /// Middle proximal phalange.
    Middle1,
    /// Middle intermediate phalange.
    Middle2,
    /// Middle distal phalange.
    Middle3,
    /// Middle tip.
    MiddleTip,
    /// Ring proximal phalange.
    Ring1,
    /// Ring intermediate phalange.
    Ring2,
    /// Ring distal phalange.
    Ring3,
    /// Ring tip.
    RingTip,
    /// Pinky metacarpal stub; not part of the canonical taxonomy.
    Pinky0,
    /// Pinky proximal phalange.
    Pinky1,
    /// Pinky intermediate phalange.
    Pinky2,
    /// Pinky distal phalange.
    Pinky3,
    /// Pinky tip.
    PinkyTip,
}

/// Static bone-to-canonical-joint table.
///
/// Immutable after construction; [`map_bone`] is the lookup entry point.
pub const BONE_JOINT_MAP: &[(QuestBone, HandJoint)] = &[
    (QuestBone::WristRoot, HandJoint::Wrist),
    (QuestBone::Thumb1, HandJoint::ThumbMetacarpal),
    (QuestBone::Thumb2, HandJoint::ThumbProximal),
    (QuestBone::Thumb3, HandJoint::ThumbDistal),
    (QuestBone::ThumbTip, HandJoint::ThumbTip),
    (QuestBone::Index1, HandJoint::IndexKnuckle),
    (QuestBone::Index2, HandJoint::IndexMiddle),
    (QuestBone::Index3, HandJoint::IndexDistal),
    (QuestBone::IndexTip, HandJoint::IndexTip),
    (QuestBone::Middle1, HandJoint::MiddleKnuckle),
    (QuestBone::Middle2, HandJoint::MiddleMiddle),
    (QuestBone::Middle3, HandJoint::MiddleDistal),
    (QuestBone::MiddleTip, HandJoint::MiddleTip),
    (QuestBone::Ring1, HandJoint::RingKnuckle),
    (QuestBone::Ring2, HandJoint::RingMiddle),
    (QuestBone::Ring3, HandJoint::RingDistal),
    (QuestBone::RingTip, HandJoint::RingTip),
    (QuestBone::Pinky1, HandJoint::PinkyKnuckle),
    (QuestBone::Pinky2, HandJoint::PinkyMiddle),
    (QuestBone::Pinky3, HandJoint::PinkyDistal),
    (QuestBone::PinkyTip, HandJoint::PinkyTip),
];

/// Canonical joint for an OVR bone, or `None` when the bone has no
/// canonical counterpart.
#[must_use]
pub fn map_bone(bone: QuestBone) -> Option<HandJoint> {
    BONE_JOINT_MAP
        .iter()
        .find(|(b, _)| *b == bone)
        .map(|(_, joint)| *joint)
}

/// Degenerate mapping-table conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoneMapError {
    /// Two bones map onto the same canonical joint; the later entry would
    /// silently overwrite the earlier one every tick.
    #[error("bones {first:?} and {second:?} both map to canonical joint {joint:?}")]
    DuplicateTarget {
        /// First bone claiming the joint.
        first: QuestBone,
        /// Second bone claiming the joint.
        second: QuestBone,
        /// The contested canonical joint.
        joint: HandJoint,
    },
}

/// Validate the static table for duplicate canonical targets.
///
/// Overwrites are permitted at runtime, but a duplicate target is almost
/// certainly a misconfigured table, so this check runs in tests and can be
/// run at adapter startup.
///
/// # Errors
///
/// Returns [`BoneMapError::DuplicateTarget`] for the first duplicate found.
pub fn validate_bone_map() -> Result<(), BoneMapError> {
    for (i, (first, joint)) in BONE_JOINT_MAP.iter().enumerate() {
        if let Some((second, _)) = BONE_JOINT_MAP[i + 1..].iter().find(|(_, j)| j == joint) {
            tracing::warn!(?first, ?second, ?joint, "duplicate canonical target in bone map");
            return Err(BoneMapError::DuplicateTarget {
                first: *first,
                second: *second,
                joint: *joint,
            });
        }
    }
    Ok(())
}
