//! Magic Leap hand-tracking adapter
//!
//! Translates Lumin-shaped keypoint and key-pose samples into canonical
//! OpenSpatial frames. Like the other adapters, this crate is SDK-free:
//! keypoints arrive as plain data with their per-point validity flags.
//!
//! Two vendor quirks shape the frames built here:
//!
//! - Keypoints are positions only; every joint is written with identity
//!   rotation, and the hand-center keypoint doubles as a native palm.
//! - There is no platform pointer pose, so frames carry `pointer_pose:
//!   None` and the tracker synthesizes its own hand ray.
//!
//! The select signal is a key-pose classification plus a confidence scalar
//! (`PinchSignal::Classified`), thresholded downstream by the gesture
//! classifier.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod hand;
pub mod keypoints;

pub use hand::{LuminHandSample, LuminKeyPointSample, hand_frame};
pub use keypoints::{KEYPOINT_JOINT_MAP, KeyPointMapError, LuminKeyPoint, map_keypoint, validate_keypoint_map};
