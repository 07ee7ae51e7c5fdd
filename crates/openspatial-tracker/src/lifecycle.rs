//! Device lifecycle state machine and the per-tick pipeline
//!
//! One [`SourceTracker`] owns two independent handedness slots. Each slot
//! is `Absent`, a tracked hand, or a tracked controller — never more than
//! one at a time. An externally observed exclusive mode flag (hand
//! tracking vs. controllers) plus per-device trackability decide the
//! transitions once per tick; a mode switch tears the old entry down
//! completely before the replacement is constructed, so no joint, channel
//! or smoothing state ever carries across.

use crate::channel::InteractionChannel;
use crate::config::TrackerConfig;
use crate::derive::{controller_hand_joints, synthesize_palm};
use crate::gesture::is_selecting;
use crate::hand_ray::HandRayState;
use crate::sink::{DeviceAction, InputEventSink, SourceId, SourceKind};
use openspatial_types::{
    ControllerFrame, HandFrame, HandJoint, Handedness, JointPoseSet, Pose, Vec3,
};
use tracing::{debug, trace};

/// Exclusive input mode observed from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Hand tracking is active; controllers are ignored.
    #[default]
    Hands,
    /// Controllers are active; hand tracking is ignored.
    Controllers,
}

/// Everything the platform reports for one update tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Exclusive input mode this tick.
    pub mode: InputMode,
    /// Viewer head pose, when the camera resource is available. Absence
    /// skips ray derivation for the tick; nothing else stalls.
    pub head_pose: Option<Pose>,
    /// Play-space transform composing local controller poses into world
    /// space.
    pub play_space: Pose,
    /// Hand frames, indexed by [`Handedness::index`].
    pub hands: [HandFrame; 2],
    /// Controller frames, indexed by [`Handedness::index`].
    pub controllers: [ControllerFrame; 2],
}

impl TickInput {
    /// Hand frame for a slot.
    #[must_use]
    pub fn hand(&self, handedness: Handedness) -> &HandFrame {
        &self.hands[handedness.index()]
    }

    /// Controller frame for a slot.
    #[must_use]
    pub fn controller(&self, handedness: Handedness) -> &ControllerFrame {
        &self.controllers[handedness.index()]
    }
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            mode: InputMode::Hands,
            head_pose: None,
            play_space: Pose::ZERO_IDENTITY,
            hands: [HandFrame::untracked(), HandFrame::untracked()],
            controllers: [ControllerFrame::untracked(), ControllerFrame::untracked()],
        }
    }
}

/// Per-hand pipeline state.
#[derive(Debug)]
struct HandEntry {
    source: SourceId,
    joints: JointPoseSet,
    last_broadcast: Option<JointPoseSet>,
    pointer: InteractionChannel<Pose>,
    grip: InteractionChannel<Pose>,
    index: InteractionChannel<Pose>,
    select: InteractionChannel<bool>,
    trigger: InteractionChannel<bool>,
    ray: HandRayState,
}

impl HandEntry {
    fn new(source: SourceId, config: &TrackerConfig) -> Self {
        Self {
            source,
            joints: JointPoseSet::new(),
            last_broadcast: None,
            pointer: InteractionChannel::new(Pose::ZERO_IDENTITY),
            grip: InteractionChannel::new(Pose::ZERO_IDENTITY),
            index: InteractionChannel::new(Pose::ZERO_IDENTITY),
            select: InteractionChannel::new(false),
            trigger: InteractionChannel::new(false),
            ray: HandRayState::new(&config.hand_ray),
        }
    }
}

/// Per-controller pipeline state.
#[derive(Debug)]
struct ControllerEntry {
    source: SourceId,
    joints: JointPoseSet,
    current_pose: Pose,
    velocity: Vec3,
    angular_velocity: Vec3,
    pointer: InteractionChannel<Pose>,
    grip: InteractionChannel<Pose>,
    index: InteractionChannel<Pose>,
    select: InteractionChannel<bool>,
    trigger: InteractionChannel<bool>,
}

impl ControllerEntry {
    fn new(source: SourceId) -> Self {
        Self {
            source,
            joints: JointPoseSet::new(),
            current_pose: Pose::ZERO_IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            pointer: InteractionChannel::new(Pose::ZERO_IDENTITY),
            grip: InteractionChannel::new(Pose::ZERO_IDENTITY),
            index: InteractionChannel::new(Pose::ZERO_IDENTITY),
            select: InteractionChannel::new(false),
            trigger: InteractionChannel::new(false),
        }
    }
}

#[derive(Debug, Default)]
enum Slot {
    #[default]
    Absent,
    Hand(Box<HandEntry>),
    Controller(Box<ControllerEntry>),
}

/// The device lifecycle state machine wrapping the whole pipeline.
#[derive(Debug)]
pub struct SourceTracker {
    config: TrackerConfig,
    slots: [Slot; 2],
}

impl SourceTracker {
    /// Create a tracker with both slots absent.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            slots: [Slot::Absent, Slot::Absent],
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Run one tick: lifecycle transitions, pipeline, event dispatch.
    ///
    /// The two slots are processed sequentially and share no state.
    pub fn update(&mut self, input: &TickInput, sink: &mut dyn InputEventSink) {
        for handedness in Handedness::ALL {
            self.update_slot(handedness, input, sink);
        }
    }

    /// Which source kind currently drives a slot, if any.
    #[must_use]
    pub fn active_kind(&self, handedness: Handedness) -> Option<SourceKind> {
        match &self.slots[handedness.index()] {
            Slot::Absent => None,
            Slot::Hand(_) => Some(SourceKind::Hand),
            Slot::Controller(_) => Some(SourceKind::Controller),
        }
    }

    /// Read-only joint access for a slot; `None` while the slot is
    /// absent.
    #[must_use]
    pub fn joints(&self, handedness: Handedness) -> Option<&JointPoseSet> {
        match &self.slots[handedness.index()] {
            Slot::Absent => None,
            Slot::Hand(entry) => Some(&entry.joints),
            Slot::Controller(entry) => Some(&entry.joints),
        }
    }

    /// Pose of a single canonical joint for a slot.
    #[must_use]
    pub fn joint_pose(&self, handedness: Handedness, joint: HandJoint) -> Option<Pose> {
        self.joints(handedness).and_then(|set| set.get(joint))
    }

    /// World-space linear velocity of a slot's controller; `None` while
    /// the slot is absent or hand-driven.
    #[must_use]
    pub fn controller_velocity(&self, handedness: Handedness) -> Option<Vec3> {
        match &self.slots[handedness.index()] {
            Slot::Controller(entry) => Some(entry.velocity),
            Slot::Absent | Slot::Hand(_) => None,
        }
    }

    /// World-space angular velocity of a slot's controller; `None` while
    /// the slot is absent or hand-driven.
    #[must_use]
    pub fn controller_angular_velocity(&self, handedness: Handedness) -> Option<Vec3> {
        match &self.slots[handedness.index()] {
            Slot::Controller(entry) => Some(entry.angular_velocity),
            Slot::Absent | Slot::Hand(_) => None,
        }
    }

    /// Active source handles as `(handedness, source, kind)`.
    pub fn active_sources(&self) -> impl Iterator<Item = (Handedness, SourceId, SourceKind)> + '_ {
        Handedness::ALL.into_iter().filter_map(|handedness| {
            match &self.slots[handedness.index()] {
                Slot::Absent => None,
                Slot::Hand(entry) => Some((handedness, entry.source, SourceKind::Hand)),
                Slot::Controller(entry) => {
                    Some((handedness, entry.source, SourceKind::Controller))
                }
            }
        })
    }

    fn update_slot(
        &mut self,
        handedness: Handedness,
        input: &TickInput,
        sink: &mut dyn InputEventSink,
    ) {
        let config = self.config;
        let idx = handedness.index();

        match input.mode {
            InputMode::Hands => {
                // Opposite-kind entry from a previous mode is torn down
                // before anything else happens this tick.
                if matches!(self.slots[idx], Slot::Controller(_)) {
                    self.teardown(handedness, sink);
                }

                let frame = input.hand(handedness);
                if frame.tracked {
                    if matches!(self.slots[idx], Slot::Absent) {
                        let source = sink.request_input_source(handedness, SourceKind::Hand);
                        debug!(%handedness, ?source, "hand source detected");
                        sink.source_detected(source, handedness, SourceKind::Hand);
                        self.slots[idx] = Slot::Hand(Box::new(HandEntry::new(source, &config)));
                    }
                    if let Slot::Hand(entry) = &mut self.slots[idx] {
                        update_hand(
                            entry,
                            frame,
                            input.head_pose.as_ref(),
                            &config,
                            handedness,
                            sink,
                        );
                    }
                } else if matches!(self.slots[idx], Slot::Hand(_)) {
                    self.teardown(handedness, sink);
                }
            }
            InputMode::Controllers => {
                if matches!(self.slots[idx], Slot::Hand(_)) {
                    self.teardown(handedness, sink);
                }

                let frame = input.controller(handedness);
                if frame.tracked {
                    if matches!(self.slots[idx], Slot::Absent) {
                        let source = sink.request_input_source(handedness, SourceKind::Controller);
                        debug!(%handedness, ?source, "controller source detected");
                        sink.source_detected(source, handedness, SourceKind::Controller);
                        self.slots[idx] = Slot::Controller(Box::new(ControllerEntry::new(source)));
                    }
                    if let Slot::Controller(entry) = &mut self.slots[idx] {
                        update_controller(entry, frame, &input.play_space, &config, handedness, sink);
                    }
                } else if matches!(self.slots[idx], Slot::Controller(_)) {
                    self.teardown(handedness, sink);
                }
            }
        }
    }

    /// Destroy a slot's entry, announcing the loss. All joint, channel,
    /// and smoothing state dies with the entry.
    fn teardown(&mut self, handedness: Handedness, sink: &mut dyn InputEventSink) {
        match std::mem::take(&mut self.slots[handedness.index()]) {
            Slot::Absent => {}
            Slot::Hand(entry) => {
                debug!(%handedness, source = ?entry.source, "hand source lost");
                sink.source_lost(entry.source, handedness, SourceKind::Hand);
            }
            Slot::Controller(entry) => {
                debug!(%handedness, source = ?entry.source, "controller source lost");
                sink.source_lost(entry.source, handedness, SourceKind::Controller);
            }
        }
    }
}

/// Heuristic palm normal when no palm-normal joint exists: the negative
/// of the world up axis.
const PALM_NORMAL_HEURISTIC: Vec3 = Vec3::new(0.0, -1.0, 0.0);

fn update_hand(
    entry: &mut HandEntry,
    frame: &HandFrame,
    head_pose: Option<&Pose>,
    config: &TrackerConfig,
    handedness: Handedness,
    sink: &mut dyn InputEventSink,
) {
    // Vendor joints first, then the synthesized palm when the vendor
    // supplied none. The merge preserves joints the vendor momentarily
    // stopped reporting.
    entry.joints.merge(&frame.joints);
    if !frame.joints.contains(HandJoint::Palm)
        && let Some(palm) = synthesize_palm(&entry.joints, handedness, &config.palm_fix)
    {
        entry.joints.set(HandJoint::Palm, palm);
    }

    // Bulk broadcast only when the snapshot actually moved.
    if entry.last_broadcast.as_ref() != Some(&entry.joints) {
        sink.hand_joints_updated(entry.source, handedness, &entry.joints);
        entry.last_broadcast = Some(entry.joints);
    }

    // Pointer: native platform ray when present, synthesized hand ray
    // otherwise. Ray synthesis needs the head; without it this tick's
    // pointer derivation is skipped and the channel keeps its value.
    let pointer_pose = frame.pointer_pose.or_else(|| {
        let palm = entry.joints.get(HandJoint::Palm)?;
        let Some(head) = head_pose else {
            trace!(%handedness, "no head pose; skipping hand-ray derivation");
            return None;
        };
        entry
            .ray
            .update(
                palm.position,
                PALM_NORMAL_HEURISTIC,
                head,
                handedness,
                &config.hand_ray,
            )
            .map(|ray| ray.pointer_pose())
    });

    // Grip: the palm, falling back to the wrist for skeletons observed
    // before the palm could be synthesized.
    let grip_pose = entry
        .joints
        .get(HandJoint::Palm)
        .or_else(|| entry.joints.get(HandJoint::Wrist));

    // Source-level aggregate, at most one per tick. A tracked hand has
    // both position and rotation available, so this is always the full
    // pose shape.
    if let Some(grip) = grip_pose
        && entry.grip.update(grip)
    {
        sink.source_pose_changed(entry.source, grip);
        sink.pose_input_changed(entry.source, handedness, DeviceAction::GripPose, grip);
    }

    if let Some(pointer) = pointer_pose
        && entry.pointer.update(pointer)
    {
        sink.pose_input_changed(entry.source, handedness, DeviceAction::PointerPose, pointer);
    }

    let selecting = is_selecting(&frame.pinch, config.pinch_confidence_threshold);
    dispatch_bool(
        &mut entry.select,
        selecting,
        entry.source,
        handedness,
        DeviceAction::Select,
        sink,
    );
    dispatch_bool(
        &mut entry.trigger,
        selecting,
        entry.source,
        handedness,
        DeviceAction::TriggerPress,
        sink,
    );

    if let Some(index_tip) = entry.joints.get(HandJoint::IndexTip)
        && entry.index.update(index_tip)
    {
        sink.pose_input_changed(
            entry.source,
            handedness,
            DeviceAction::IndexFingerPose,
            index_tip,
        );
    }
}

fn update_controller(
    entry: &mut ControllerEntry,
    frame: &ControllerFrame,
    play_space: &Pose,
    config: &TrackerConfig,
    handedness: Handedness,
    sink: &mut dyn InputEventSink,
) {
    let world = play_space.transform_pose(Pose::new(
        frame.local_position,
        frame.local_rotation,
    ));

    // Each component updates only while its validity flag holds; the
    // other keeps the last valid value.
    if frame.position_valid {
        entry.current_pose.position = world.position;
    }
    if frame.rotation_valid {
        entry.current_pose.rotation = world.rotation;
    }
    let pose = entry.current_pose;

    // Velocities are directions, not points: rotate with the play space
    // but do not translate.
    entry.velocity = play_space.transform_direction(frame.local_velocity);
    entry.angular_velocity = play_space.transform_direction(frame.local_angular_velocity);

    // Synthetic hand joints for bounds/gesture heuristics.
    entry.joints = controller_hand_joints(pose, handedness);

    // Aggregate shape follows the availability flags; never more than one
    // per tick.
    if entry.grip.update(pose) {
        match (frame.position_valid, frame.rotation_valid) {
            (true, true) => sink.source_pose_changed(entry.source, pose),
            (true, false) => sink.source_position_changed(entry.source, pose.position),
            (false, true) => sink.source_rotation_changed(entry.source, pose.rotation),
            (false, false) => {}
        }
        sink.pose_input_changed(entry.source, handedness, DeviceAction::GripPose, pose);
    }

    // A controller's pointer is its grip.
    if entry.pointer.update(pose) {
        sink.pose_input_changed(entry.source, handedness, DeviceAction::PointerPose, pose);
    }

    let pressed = frame.trigger > config.trigger_dead_zone;
    dispatch_bool(
        &mut entry.select,
        pressed,
        entry.source,
        handedness,
        DeviceAction::Select,
        sink,
    );
    dispatch_bool(
        &mut entry.trigger,
        pressed,
        entry.source,
        handedness,
        DeviceAction::TriggerPress,
        sink,
    );

    if let Some(index_tip) = entry.joints.get(HandJoint::IndexTip)
        && entry.index.update(index_tip)
    {
        sink.pose_input_changed(
            entry.source,
            handedness,
            DeviceAction::IndexFingerPose,
            index_tip,
        );
    }
}

fn dispatch_bool(
    channel: &mut InteractionChannel<bool>,
    value: bool,
    source: SourceId,
    handedness: Handedness,
    action: DeviceAction,
    sink: &mut dyn InputEventSink,
) {
    if channel.update(value) {
        if value {
            sink.input_down(source, handedness, action);
        } else {
            sink.input_up(source, handedness, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{InputEvent, RecordingSink};
    use openspatial_types::{PinchSignal, Quat};

    fn tracked_hand_frame(wrist: Vec3, knuckle: Vec3) -> HandFrame {
        let mut joints = JointPoseSet::new();
        joints.set(HandJoint::Wrist, Pose::from_position(wrist));
        joints.set(HandJoint::MiddleKnuckle, Pose::from_position(knuckle));
        HandFrame {
            tracked: true,
            joints,
            pinch: PinchSignal::Direct(false),
            pointer_pose: Some(Pose::from_position(wrist + Vec3::Z)),
        }
    }

    fn hands_tick(handedness: Handedness, frame: HandFrame) -> TickInput {
        let mut input = TickInput::default();
        input.hands[handedness.index()] = frame;
        input.head_pose = Some(Pose::from_position(Vec3::new(0.0, 1.6, 0.0)));
        input
    }

    fn detected_count(sink: &RecordingSink) -> usize {
        sink.count_matching(|e| matches!(e, InputEvent::SourceDetected { .. }))
    }

    fn lost_count(sink: &RecordingSink) -> usize {
        sink.count_matching(|e| matches!(e, InputEvent::SourceLost { .. }))
    }

    #[test]
    fn hand_becoming_visible_detects_exactly_once() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();
        let input = hands_tick(Handedness::Left, tracked_hand_frame(Vec3::ZERO, Vec3::Z));

        tracker.update(&input, &mut sink);
        assert_eq!(detected_count(&sink), 1);
        assert_eq!(tracker.active_kind(Handedness::Left), Some(SourceKind::Hand));
        assert_eq!(tracker.active_kind(Handedness::Right), None);

        tracker.update(&input, &mut sink);
        assert_eq!(detected_count(&sink), 1);
    }

    #[test]
    fn hand_loss_announces_exactly_once() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        tracker.update(
            &hands_tick(Handedness::Left, tracked_hand_frame(Vec3::ZERO, Vec3::Z)),
            &mut sink,
        );
        let empty = TickInput::default();
        tracker.update(&empty, &mut sink);
        assert_eq!(lost_count(&sink), 1);
        assert_eq!(tracker.active_kind(Handedness::Left), None);

        tracker.update(&empty, &mut sink);
        tracker.update(&empty, &mut sink);
        assert_eq!(lost_count(&sink), 1);
    }

    #[test]
    fn mode_switch_tears_down_before_building_replacement() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        tracker.update(
            &hands_tick(Handedness::Right, tracked_hand_frame(Vec3::ZERO, Vec3::Z)),
            &mut sink,
        );
        sink.clear();

        let mut input = TickInput::default();
        input.mode = InputMode::Controllers;
        input.controllers[Handedness::Right.index()] = ControllerFrame {
            tracked: true,
            position_valid: true,
            rotation_valid: true,
            local_position: Vec3::new(0.2, 1.0, 0.0),
            local_rotation: Quat::IDENTITY,
            local_velocity: Vec3::ZERO,
            local_angular_velocity: Vec3::ZERO,
            trigger: 0.0,
        };
        tracker.update(&input, &mut sink);

        // Lost for the hand strictly before detected for the controller.
        let lost_at = sink
            .events()
            .iter()
            .position(|e| matches!(e, InputEvent::SourceLost { kind: SourceKind::Hand, .. }));
        let detected_at = sink.events().iter().position(
            |e| matches!(e, InputEvent::SourceDetected { kind: SourceKind::Controller, .. }),
        );
        assert!(lost_at.is_some());
        assert!(detected_at.is_some());
        assert!(lost_at < detected_at);
        assert_eq!(
            tracker.active_kind(Handedness::Right),
            Some(SourceKind::Controller)
        );
    }

    #[test]
    fn slots_are_independent() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut input = hands_tick(Handedness::Left, tracked_hand_frame(Vec3::ZERO, Vec3::Z));
        input.hands[Handedness::Right.index()] =
            tracked_hand_frame(Vec3::X, Vec3::X + Vec3::Z);
        tracker.update(&input, &mut sink);
        assert_eq!(detected_count(&sink), 2);

        // Right hand drops; left is untouched.
        input.hands[Handedness::Right.index()] = HandFrame::untracked();
        tracker.update(&input, &mut sink);
        assert_eq!(lost_count(&sink), 1);
        assert_eq!(tracker.active_kind(Handedness::Left), Some(SourceKind::Hand));
        assert_eq!(tracker.active_kind(Handedness::Right), None);
    }

    #[test]
    fn steady_hand_emits_no_repeat_events() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();
        let input = hands_tick(Handedness::Left, tracked_hand_frame(Vec3::ZERO, Vec3::Z));

        tracker.update(&input, &mut sink);
        sink.clear();
        tracker.update(&input, &mut sink);
        tracker.update(&input, &mut sink);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn palm_is_synthesized_into_the_store() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();
        let input = hands_tick(
            Handedness::Right,
            tracked_hand_frame(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)),
        );
        tracker.update(&input, &mut sink);

        let palm = tracker.joint_pose(Handedness::Right, HandJoint::Palm);
        assert_eq!(palm.map(|p| p.position), Some(Vec3::new(0.0, 0.0, 5.0)));
    }

    #[test]
    fn select_edges_dispatch_down_then_up_once() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut frame = tracked_hand_frame(Vec3::ZERO, Vec3::Z);
        frame.pinch = PinchSignal::Direct(true);
        let pinching = hands_tick(Handedness::Left, frame);

        let mut released_frame = tracked_hand_frame(Vec3::ZERO, Vec3::Z);
        released_frame.pinch = PinchSignal::Direct(false);
        let released = hands_tick(Handedness::Left, released_frame);

        tracker.update(&pinching, &mut sink);
        tracker.update(&pinching, &mut sink);
        let downs = sink.count_matching(
            |e| matches!(e, InputEvent::InputDown { action: DeviceAction::Select, .. }),
        );
        assert_eq!(downs, 1);

        tracker.update(&released, &mut sink);
        tracker.update(&released, &mut sink);
        let ups = sink.count_matching(
            |e| matches!(e, InputEvent::InputUp { action: DeviceAction::Select, .. }),
        );
        assert_eq!(ups, 1);
    }

    #[test]
    fn controller_aggregate_shape_follows_availability() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut input = TickInput::default();
        input.mode = InputMode::Controllers;
        input.controllers[Handedness::Left.index()] = ControllerFrame {
            tracked: true,
            position_valid: true,
            rotation_valid: false,
            local_position: Vec3::new(0.1, 1.0, 0.2),
            local_rotation: Quat::from_rotation_y(0.5),
            local_velocity: Vec3::ZERO,
            local_angular_velocity: Vec3::ZERO,
            trigger: 0.0,
        };
        tracker.update(&input, &mut sink);

        let position_only = sink
            .count_matching(|e| matches!(e, InputEvent::SourcePositionChanged { .. }));
        let full = sink.count_matching(|e| matches!(e, InputEvent::SourcePoseChanged { .. }));
        let rotation_only = sink
            .count_matching(|e| matches!(e, InputEvent::SourceRotationChanged { .. }));
        assert_eq!(position_only, 1);
        assert_eq!(full, 0);
        assert_eq!(rotation_only, 0);
    }

    #[test]
    fn rotation_only_change_with_both_flags_emits_single_pose_event() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut input = TickInput::default();
        input.mode = InputMode::Controllers;
        let slot = Handedness::Right.index();
        input.controllers[slot] = ControllerFrame {
            tracked: true,
            position_valid: true,
            rotation_valid: true,
            local_position: Vec3::new(0.2, 1.0, 0.0),
            local_rotation: Quat::IDENTITY,
            local_velocity: Vec3::ZERO,
            local_angular_velocity: Vec3::ZERO,
            trigger: 0.0,
        };
        tracker.update(&input, &mut sink);
        sink.clear();

        // Second tick: only the rotation moves, with both components
        // still available. The aggregate is the full pose shape exactly
        // once, never the position-only or rotation-only variants.
        input.controllers[slot].local_rotation = Quat::from_rotation_y(0.4);
        tracker.update(&input, &mut sink);

        let full = sink.count_matching(|e| matches!(e, InputEvent::SourcePoseChanged { .. }));
        let position_only =
            sink.count_matching(|e| matches!(e, InputEvent::SourcePositionChanged { .. }));
        let rotation_only =
            sink.count_matching(|e| matches!(e, InputEvent::SourceRotationChanged { .. }));
        assert_eq!(full, 1);
        assert_eq!(position_only, 0);
        assert_eq!(rotation_only, 0);
    }

    #[test]
    fn controller_velocities_rotate_with_the_play_space() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut input = TickInput::default();
        input.mode = InputMode::Controllers;
        // Play space rotated 90° about Y: local +Z becomes world +X, and
        // the play-space translation must not leak into velocities.
        input.play_space = Pose::new(
            Vec3::new(5.0, 0.0, 0.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        input.controllers[Handedness::Left.index()] = ControllerFrame {
            tracked: true,
            position_valid: true,
            rotation_valid: true,
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_velocity: Vec3::new(0.0, 0.0, 1.0),
            local_angular_velocity: Vec3::new(0.0, 2.0, 0.0),
            trigger: 0.0,
        };
        tracker.update(&input, &mut sink);

        let velocity = tracker
            .controller_velocity(Handedness::Left)
            .unwrap_or(Vec3::ZERO);
        assert!((velocity.x - 1.0).abs() < 1e-5);
        assert!(velocity.z.abs() < 1e-5);

        let angular = tracker
            .controller_angular_velocity(Handedness::Left)
            .unwrap_or(Vec3::ZERO);
        assert!((angular.y - 2.0).abs() < 1e-5);

        // Hand slots have no controller velocity.
        assert_eq!(tracker.controller_velocity(Handedness::Right), None);
    }

    #[test]
    fn controller_trigger_respects_dead_zone() {
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut input = TickInput::default();
        input.mode = InputMode::Controllers;
        let slot = Handedness::Right.index();
        input.controllers[slot] = ControllerFrame {
            tracked: true,
            position_valid: true,
            rotation_valid: true,
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_velocity: Vec3::ZERO,
            local_angular_velocity: Vec3::ZERO,
            trigger: 0.05,
        };
        tracker.update(&input, &mut sink);
        assert_eq!(
            sink.count_matching(|e| matches!(e, InputEvent::InputDown { .. })),
            0
        );

        input.controllers[slot].trigger = 0.5;
        tracker.update(&input, &mut sink);
        let downs = sink.count_matching(
            |e| matches!(e, InputEvent::InputDown { action: DeviceAction::Select, .. }),
        );
        assert_eq!(downs, 1);
    }

    #[test]
    fn missing_head_pose_skips_ray_but_not_the_tick() {
        // A hand without a native pointer (Lumin-style frame) needs the
        // head for ray derivation; without it the pointer channel stays
        // put while joints and grip still flow.
        let mut tracker = SourceTracker::new(TrackerConfig::default());
        let mut sink = RecordingSink::new();

        let mut frame = tracked_hand_frame(Vec3::ZERO, Vec3::Z);
        frame.pointer_pose = None;
        let mut input = hands_tick(Handedness::Left, frame);
        input.head_pose = None;

        tracker.update(&input, &mut sink);
        let pointer_events = sink.count_matching(|e| {
            matches!(e, InputEvent::PoseInputChanged { action: DeviceAction::PointerPose, .. })
        });
        let joint_events =
            sink.count_matching(|e| matches!(e, InputEvent::HandJointsUpdated { .. }));
        assert_eq!(pointer_events, 0);
        assert_eq!(joint_events, 1);
        assert_eq!(tracker.active_kind(Handedness::Left), Some(SourceKind::Hand));
    }
}
