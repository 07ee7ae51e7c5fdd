//! Canonical hand-skeleton and pose types for OpenSpatial
//!
//! This crate defines the vendor-independent data model that every adapter
//! normalizes into and every derivation step reads from:
//!
//! - **Pose**: rigid transform (position + unit quaternion), no scale
//! - **HandJoint**: the fixed canonical joint taxonomy (26 landmarks)
//! - **JointPoseSet**: fixed-array joint store with a presence bitset
//! - **HandFrame / ControllerFrame**: normalized per-tick vendor samples
//!
//! Everything here is plain `Copy`-friendly data with no I/O and no
//! allocation on the per-tick paths, so adapters and the tracker pipeline
//! can be tested without any SDK plumbing.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod frame;
pub mod hand;
pub mod joint;
pub mod pose;

pub use frame::{ControllerFrame, HandFrame, PinchSignal};
pub use hand::{Handedness, KeyPose};
pub use joint::{HandJoint, JointPoseSet};
pub use pose::{Pose, look_rotation};

// Re-export the math value types so downstream crates don't need a direct
// glam dependency for simple construction.
pub use glam::{Quat, Vec3};
