//! Hand/controller pose normalization pipeline and device lifecycle
//!
//! This crate turns normalized vendor frames (built by the adapter crates)
//! into canonical interaction signals and host events:
//!
//! - **Interaction channels** with a change-dispatch gate: an event is
//!   emitted only when a channel's observable value actually changed
//! - **Palm & pointer derivation**: midpoint palm synthesis with a
//!   configurable per-handedness rotation fix, native pointer pass-through
//!   or a Kalman-stabilized synthesized hand ray
//! - **Gesture classification**: key-pose confidence thresholding or
//!   direct pinch pass-through
//! - **Device lifecycle**: a per-handedness state machine deciding whether
//!   a hand or a held controller feeds the pipeline, with detected/lost
//!   notifications on every transition
//!
//! The whole pipeline is single-threaded and tick-driven: one call to
//! [`SourceTracker::update`] per host update, no suspension points, all
//! mutation in place. The two handedness slots share no state and are
//! processed sequentially.
//!
//! # Example
//!
//! ```
//! use openspatial_tracker::{RecordingSink, SourceTracker, TickInput, TrackerConfig};
//!
//! let mut tracker = SourceTracker::new(TrackerConfig::default());
//! let mut sink = RecordingSink::new();
//!
//! // Nothing tracked: a tick is a no-op.
//! tracker.update(&TickInput::default(), &mut sink);
//! assert!(sink.events().is_empty());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod channel;
pub mod config;
pub mod derive;
pub mod gesture;
pub mod hand_ray;
pub mod lifecycle;
pub mod sink;

pub use channel::InteractionChannel;
pub use config::{HandRayConfig, KalmanParams, PalmOrientationFix, TrackerConfig};
pub use derive::{controller_hand_joints, synthesize_palm};
pub use gesture::is_selecting;
pub use hand_ray::{HandRay, HandRayState};
pub use lifecycle::{InputMode, SourceTracker, TickInput};
pub use sink::{DeviceAction, InputEvent, InputEventSink, RecordingSink, SourceId, SourceKind};
