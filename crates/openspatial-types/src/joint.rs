//! Canonical joint taxonomy and the per-hand joint store
//!
//! `HandJoint` is the fixed, vendor-independent skeletal landmark set.
//! `JointPoseSet` stores one pose per joint in a fixed array indexed by the
//! joint discriminant, with a parallel presence bitset. Joints are
//! insert-or-overwrite only: while a hand stays tracked, a joint that was
//! present on a previous tick stays present even if the vendor momentarily
//! stops reporting it (graceful degradation under partial occlusion).

use crate::pose::Pose;

/// Vendor-independent skeletal landmark identifier.
///
/// Covers the wrist, the palm, and five segments-plus-tip chains. Not every
/// vendor reports every joint; absent joints simply never enter the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandJoint {
    /// Wrist root.
    Wrist,
    /// Palm center. Often synthesized rather than vendor-supplied.
    Palm,
    /// Thumb metacarpal.
    ThumbMetacarpal,
    /// Thumb proximal segment.
    ThumbProximal,
    /// Thumb distal segment.
    ThumbDistal,
    /// Thumb tip.
    ThumbTip,
    /// Index metacarpal.
    IndexMetacarpal,
    /// Index knuckle (proximal).
    IndexKnuckle,
    /// Index middle segment.
    IndexMiddle,
    /// Index distal segment.
    IndexDistal,
    /// Index tip.
    IndexTip,
    /// Middle metacarpal.
    MiddleMetacarpal,
    /// Middle knuckle (proximal).
    MiddleKnuckle,
    /// Middle middle segment.
    MiddleMiddle,
    /// Middle distal segment.
    MiddleDistal,
    /// Middle tip.
    MiddleTip,
    /// Ring metacarpal.
    RingMetacarpal,
    /// Ring knuckle (proximal).
    RingKnuckle,
    /// Ring middle segment.
    RingMiddle,
    /// Ring distal segment.
    RingDistal,
    /// Ring tip.
    RingTip,
    /// Pinky metacarpal.
    PinkyMetacarpal,
    /// Pinky knuckle (proximal).
    PinkyKnuckle,
    /// Pinky middle segment.
    PinkyMiddle,
    /// Pinky distal segment.
    PinkyDistal,
    /// Pinky tip.
    PinkyTip,
}

impl HandJoint {
    /// Number of canonical joints.
    pub const COUNT: usize = 26;

    /// All canonical joints, in discriminant order.
    pub const ALL: [HandJoint; Self::COUNT] = [
        HandJoint::Wrist,
        HandJoint::Palm,
        HandJoint::ThumbMetacarpal,
        HandJoint::ThumbProximal,
        HandJoint::ThumbDistal,
        HandJoint::ThumbTip,
        HandJoint::IndexMetacarpal,
        HandJoint::IndexKnuckle,
        HandJoint::IndexMiddle,
        HandJoint::IndexDistal,
        HandJoint::IndexTip,
        HandJoint::MiddleMetacarpal,
        HandJoint::MiddleKnuckle,
        HandJoint::MiddleMiddle,
        HandJoint::MiddleDistal,
        HandJoint::MiddleTip,
        HandJoint::RingMetacarpal,
        HandJoint::RingKnuckle,
        HandJoint::RingMiddle,
        HandJoint::RingDistal,
        HandJoint::RingTip,
        HandJoint::PinkyMetacarpal,
        HandJoint::PinkyKnuckle,
        HandJoint::PinkyMiddle,
        HandJoint::PinkyDistal,
        HandJoint::PinkyTip,
    ];

    /// Dense index of this joint, suitable for fixed-array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-hand mapping from canonical joint to pose.
///
/// Fixed-size array plus presence bitset: O(1) lookup with no hashing, and
/// the "joints are overwritten, never deleted" invariant is structural --
/// there is no per-joint removal operation, only whole-hand [`clear`].
///
/// [`clear`]: JointPoseSet::clear
#[derive(Debug, Clone, Copy)]
pub struct JointPoseSet {
    poses: [Pose; HandJoint::COUNT],
    present: u32,
}

impl JointPoseSet {
    /// Create an empty set: no joint present.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            poses: [Pose::ZERO_IDENTITY; HandJoint::COUNT],
            present: 0,
        }
    }

    /// Insert or overwrite the pose for `joint`.
    pub fn set(&mut self, joint: HandJoint, pose: Pose) {
        self.poses[joint.index()] = pose;
        self.present |= 1 << joint.index();
    }

    /// Pose for `joint`, or `None` if it has never been observed.
    #[must_use]
    pub fn get(&self, joint: HandJoint) -> Option<Pose> {
        if self.contains(joint) {
            Some(self.poses[joint.index()])
        } else {
            None
        }
    }

    /// Whether `joint` has an entry.
    #[must_use]
    pub fn contains(&self, joint: HandJoint) -> bool {
        self.present & (1 << joint.index()) != 0
    }

    /// Number of joints present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.present.count_ones() as usize
    }

    /// Whether no joint is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present == 0
    }

    /// Iterate over present joints and their poses, in taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (HandJoint, Pose)> + '_ {
        HandJoint::ALL
            .iter()
            .filter(|joint| self.contains(**joint))
            .map(|joint| (*joint, self.poses[joint.index()]))
    }

    /// Merge every joint present in `other` into this set.
    ///
    /// Joints present here but absent in `other` are left untouched; this
    /// is the per-tick store update path.
    pub fn merge(&mut self, other: &JointPoseSet) {
        for (joint, pose) in other.iter() {
            self.set(joint, pose);
        }
    }

    /// Remove every joint (whole-hand teardown).
    pub fn clear(&mut self) {
        self.present = 0;
    }
}

impl Default for JointPoseSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for JointPoseSet {
    /// Two sets are equal when the same joints are present with exactly
    /// equal poses. Stale array slots behind absent presence bits don't
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.present == other.present && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn joint_indices_are_dense_and_unique() {
        for (i, joint) in HandJoint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }

    #[test]
    fn set_then_get_roundtrips_exactly() {
        let mut set = JointPoseSet::new();
        let pose = Pose::from_position(Vec3::new(0.1, 0.2, 0.3));
        set.set(HandJoint::IndexTip, pose);
        assert_eq!(set.get(HandJoint::IndexTip), Some(pose));
    }

    #[test]
    fn missing_joint_reads_as_absent() {
        let set = JointPoseSet::new();
        assert_eq!(set.get(HandJoint::Palm), None);
        assert!(!set.contains(HandJoint::Palm));
        assert!(set.is_empty());
    }

    #[test]
    fn overwrite_never_removes_other_joints() {
        let mut set = JointPoseSet::new();
        set.set(HandJoint::Wrist, Pose::from_position(Vec3::X));
        set.set(HandJoint::Palm, Pose::from_position(Vec3::Y));
        set.set(HandJoint::Wrist, Pose::from_position(Vec3::Z));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(HandJoint::Wrist), Some(Pose::from_position(Vec3::Z)));
        assert_eq!(set.get(HandJoint::Palm), Some(Pose::from_position(Vec3::Y)));
    }

    #[test]
    fn merge_keeps_joints_absent_from_update() {
        let mut store = JointPoseSet::new();
        store.set(HandJoint::PinkyTip, Pose::from_position(Vec3::X));

        let mut update = JointPoseSet::new();
        update.set(HandJoint::Wrist, Pose::from_position(Vec3::Y));
        store.merge(&update);

        assert!(store.contains(HandJoint::PinkyTip));
        assert!(store.contains(HandJoint::Wrist));
    }

    #[test]
    fn clear_removes_everything() {
        let mut set = JointPoseSet::new();
        for joint in HandJoint::ALL {
            set.set(joint, Pose::ZERO_IDENTITY);
        }
        assert_eq!(set.len(), HandJoint::COUNT);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn iter_yields_present_joints_in_order() {
        let mut set = JointPoseSet::new();
        set.set(HandJoint::MiddleKnuckle, Pose::ZERO_IDENTITY);
        set.set(HandJoint::Wrist, Pose::ZERO_IDENTITY);
        let joints: Vec<HandJoint> = set.iter().map(|(j, _)| j).collect();
        assert_eq!(joints, vec![HandJoint::Wrist, HandJoint::MiddleKnuckle]);
    }
}
