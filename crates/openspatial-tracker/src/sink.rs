//! Host event sink
//!
//! The boundary to the host input framework. The tracker never queues
//! events: every emission is synchronous within the tick, and the
//! change-dispatch gate upstream guarantees a sink only hears about
//! observable changes.
//!
//! [`RecordingSink`] is the test double: it allocates source handles from
//! a counter and records every emission in order.

use openspatial_types::{Handedness, JointPoseSet, Pose, Quat, Vec3};

/// Opaque host handle for a registered input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub u32);

/// What kind of physical source a slot is driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Articulated tracked hand.
    Hand,
    /// Held motion controller.
    Controller,
}

/// The interaction signal an input event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAction {
    /// Spatial pointer pose.
    PointerPose,
    /// Spatial grip pose.
    GripPose,
    /// Primary select.
    Select,
    /// Analog trigger treated as a press.
    TriggerPress,
    /// Index finger tip pose.
    IndexFingerPose,
}

/// Host input framework surface consumed by the tracker.
///
/// Implementations raise events to application code; the tracker calls
/// them synchronously from inside its tick.
pub trait InputEventSink {
    /// Allocate pointer resources and a fresh generic input source handle
    /// for a slot about to become active.
    fn request_input_source(&mut self, handedness: Handedness, kind: SourceKind) -> SourceId;

    /// A source started tracking.
    fn source_detected(&mut self, source: SourceId, handedness: Handedness, kind: SourceKind);

    /// A source stopped tracking; its handle is dead after this call.
    fn source_lost(&mut self, source: SourceId, handedness: Handedness, kind: SourceKind);

    /// Source-level aggregate: both position and rotation moved.
    fn source_pose_changed(&mut self, source: SourceId, pose: Pose);

    /// Source-level aggregate: only position is available and it moved.
    fn source_position_changed(&mut self, source: SourceId, position: Vec3);

    /// Source-level aggregate: only rotation is available and it moved.
    fn source_rotation_changed(&mut self, source: SourceId, rotation: Quat);

    /// Bulk per-tick joint snapshot for a tracked hand.
    fn hand_joints_updated(
        &mut self,
        source: SourceId,
        handedness: Handedness,
        joints: &JointPoseSet,
    );

    /// A pose-valued interaction channel changed.
    fn pose_input_changed(
        &mut self,
        source: SourceId,
        handedness: Handedness,
        action: DeviceAction,
        pose: Pose,
    );

    /// A boolean channel went false→true.
    fn input_down(&mut self, source: SourceId, handedness: Handedness, action: DeviceAction);

    /// A boolean channel went true→false.
    fn input_up(&mut self, source: SourceId, handedness: Handedness, action: DeviceAction);
}

/// Everything a [`RecordingSink`] heard, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Source started tracking.
    SourceDetected {
        /// Host handle.
        source: SourceId,
        /// Slot.
        handedness: Handedness,
        /// Hand or controller.
        kind: SourceKind,
    },
    /// Source stopped tracking.
    SourceLost {
        /// Host handle.
        source: SourceId,
        /// Slot.
        handedness: Handedness,
        /// Hand or controller.
        kind: SourceKind,
    },
    /// Aggregate pose change.
    SourcePoseChanged {
        /// Host handle.
        source: SourceId,
        /// New aggregate pose.
        pose: Pose,
    },
    /// Aggregate position-only change.
    SourcePositionChanged {
        /// Host handle.
        source: SourceId,
        /// New position.
        position: Vec3,
    },
    /// Aggregate rotation-only change.
    SourceRotationChanged {
        /// Host handle.
        source: SourceId,
        /// New rotation.
        rotation: Quat,
    },
    /// Bulk joint snapshot.
    HandJointsUpdated {
        /// Host handle.
        source: SourceId,
        /// Slot.
        handedness: Handedness,
        /// Snapshot of the store at emission time.
        joints: JointPoseSet,
    },
    /// Pose channel change.
    PoseInputChanged {
        /// Host handle.
        source: SourceId,
        /// Slot.
        handedness: Handedness,
        /// Which channel.
        action: DeviceAction,
        /// New pose.
        pose: Pose,
    },
    /// Boolean channel went down.
    InputDown {
        /// Host handle.
        source: SourceId,
        /// Slot.
        handedness: Handedness,
        /// Which channel.
        action: DeviceAction,
    },
    /// Boolean channel went up.
    InputUp {
        /// Host handle.
        source: SourceId,
        /// Slot.
        handedness: Handedness,
        /// Which channel.
        action: DeviceAction,
    },
}

/// Recording test sink.
#[derive(Debug, Default)]
pub struct RecordingSink {
    next_id: u32,
    events: Vec<InputEvent>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Forget everything recorded so far (handle counter keeps running).
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Count recorded events matching a predicate.
    pub fn count_matching(&self, predicate: impl Fn(&InputEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl InputEventSink for RecordingSink {
    fn request_input_source(&mut self, _handedness: Handedness, _kind: SourceKind) -> SourceId {
        let id = SourceId(self.next_id);
        self.next_id += 1;
        id
    }

    fn source_detected(&mut self, source: SourceId, handedness: Handedness, kind: SourceKind) {
        self.events.push(InputEvent::SourceDetected {
            source,
            handedness,
            kind,
        });
    }

    fn source_lost(&mut self, source: SourceId, handedness: Handedness, kind: SourceKind) {
        self.events.push(InputEvent::SourceLost {
            source,
            handedness,
            kind,
        });
    }

    fn source_pose_changed(&mut self, source: SourceId, pose: Pose) {
        self.events.push(InputEvent::SourcePoseChanged { source, pose });
    }

    fn source_position_changed(&mut self, source: SourceId, position: Vec3) {
        self.events
            .push(InputEvent::SourcePositionChanged { source, position });
    }

    fn source_rotation_changed(&mut self, source: SourceId, rotation: Quat) {
        self.events
            .push(InputEvent::SourceRotationChanged { source, rotation });
    }

    fn hand_joints_updated(
        &mut self,
        source: SourceId,
        handedness: Handedness,
        joints: &JointPoseSet,
    ) {
        self.events.push(InputEvent::HandJointsUpdated {
            source,
            handedness,
            joints: *joints,
        });
    }

    fn pose_input_changed(
        &mut self,
        source: SourceId,
        handedness: Handedness,
        action: DeviceAction,
        pose: Pose,
    ) {
        self.events.push(InputEvent::PoseInputChanged {
            source,
            handedness,
            action,
            pose,
        });
    }

    fn input_down(&mut self, source: SourceId, handedness: Handedness, action: DeviceAction) {
        self.events.push(InputEvent::InputDown {
            source,
            handedness,
            action,
        });
    }

    fn input_up(&mut self, source: SourceId, handedness: Handedness, action: DeviceAction) {
        self.events.push(InputEvent::InputUp {
            source,
            handedness,
            action,
        });
    }
}
