//! Quest/OVR hand and touch-controller adapter
//!
//! Translates OVR-shaped skeleton and controller samples into the
//! canonical OpenSpatial frames. This crate is intentionally SDK-free and
//! I/O-free: callers read the OVR runtime themselves and hand the sampled
//! values in as plain data, which keeps every mapping decision testable
//! without hardware.
//!
//! The Quest runtime supplies a native pointer pose and a direct per-finger
//! pinch boolean, so frames built here carry `PinchSignal::Direct` and a
//! `pointer_pose`; the tracker never has to synthesize a hand ray for this
//! vendor.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bones;
pub mod controller;
pub mod hand;

pub use bones::{BONE_JOINT_MAP, BoneMapError, QuestBone, map_bone, validate_bone_map};
pub use controller::{TRIGGER_DEAD_ZONE, QuestControllerSample, controller_frame};
pub use hand::{QuestBoneSample, QuestHandSample, hand_frame};
