//! Lumin keypoint taxonomy and the keypoint-to-joint mapping table
//!
//! The Lumin tracker reports a sparser skeleton than the canonical
//! taxonomy: ring and pinky have no intermediate keypoint, and the wrist
//! ulnar/radial points have no canonical counterpart. Unmapped keypoints
//! are ignored at lookup time.

use openspatial_types::HandJoint;
use thiserror::Error;

/// Keypoint identifiers reported by the Lumin hand tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LuminKeyPoint {
    /// Thumb metacarpophalangeal point.
    ThumbMcp,
    /// Thumb interphalangeal point.
    ThumbIp,
    /// Thumb tip.
    ThumbTip,
    /// Index metacarpophalangeal point.
    IndexMcp,
    /// Index proximal interphalangeal point.
    IndexPip,
    /// Index tip.
    IndexTip,
    /// Middle metacarpophalangeal point.
    MiddleMcp,
    /// Middle proximal interphalangeal point.
    MiddlePip,
    /// Middle tip.
    MiddleTip,
    /// Ring metacarpophalangeal point.
    RingMcp,
    /// Ring tip.
    RingTip,
    /// Pinky metacarpophalangeal point.
    PinkyMcp,
    /// Pinky tip.
    PinkyTip,
    /// Wrist center.
    WristCenter,
    /// Wrist ulnar side; not part of the canonical taxonomy.
    WristUlnar,
    /// Wrist radial side; not part of the canonical taxonomy.
    WristRadial,
    /// Hand center; doubles as the native palm.
    HandCenter,
}

/// Static keypoint-to-canonical-joint table.
pub const KEYPOINT_JOINT_MAP: &[(LuminKeyPoint, HandJoint)] = &[
    (LuminKeyPoint::ThumbMcp, HandJoint::ThumbProximal),
    (LuminKeyPoint::ThumbIp, HandJoint::ThumbDistal),
    (LuminKeyPoint::ThumbTip, HandJoint::ThumbTip),
    (LuminKeyPoint::IndexMcp, HandJoint::IndexKnuckle),
    (LuminKeyPoint::IndexPip, HandJoint::IndexMiddle),
    (LuminKeyPoint::IndexTip, HandJoint::IndexTip),
    (LuminKeyPoint::MiddleMcp, HandJoint::MiddleKnuckle),
    (LuminKeyPoint::MiddlePip, HandJoint::MiddleMiddle),
    (LuminKeyPoint::MiddleTip, HandJoint::MiddleTip),
    (LuminKeyPoint::RingMcp, HandJoint::RingKnuckle),
    (LuminKeyPoint::RingTip, HandJoint::RingTip),
    (LuminKeyPoint::PinkyMcp, HandJoint::PinkyKnuckle),
    (LuminKeyPoint::PinkyTip, HandJoint::PinkyTip),
    (LuminKeyPoint::WristCenter, HandJoint::Wrist),
    (LuminKeyPoint::HandCenter, HandJoint::Palm),
];

/// Canonical joint for a Lumin keypoint, or `None` when the keypoint has
/// no canonical counterpart.
#[must_use]
pub fn map_keypoint(keypoint: LuminKeyPoint) -> Option<HandJoint> {
    KEYPOINT_JOINT_MAP
        .iter()
        .find(|(k, _)| *k == keypoint)
        .map(|(_, joint)| *joint)
}

/// Degenerate mapping-table conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyPointMapError {
    /// Two keypoints map onto the same canonical joint.
    #[error("keypoints {first:?} and {second:?} both map to canonical joint {joint:?}")]
    DuplicateTarget {
        /// First keypoint claiming the joint.
        first: LuminKeyPoint,
        /// Second keypoint claiming the joint.
        second: LuminKeyPoint,
        /// The contested canonical joint.
        joint: HandJoint,
    },
}

/// Validate the static table for duplicate canonical targets.
///
/// # Errors
///
/// Returns [`KeyPointMapError::DuplicateTarget`] for the first duplicate
/// found.
pub fn validate_keypoint_map() -> Result<(), KeyPointMapError> {
    for (i, (first, joint)) in KEYPOINT_JOINT_MAP.iter().enumerate() {
        if let Some((second, _)) = KEYPOINT_JOINT_MAP[i + 1..].iter().find(|(_, j)| j == joint) {
            tracing::warn!(?first, ?second, ?joint, "duplicate canonical target in keypoint map");
            return Err(KeyPointMapError::DuplicateTarget {
                first: *first,
                second: *second,
                joint: *joint,
            });
        }
    }
    Ok(())
}
