//! Recursive smoothing filters for OpenSpatial tracking signals
//!
//! This crate provides the one-dimensional recursive (Kalman-style)
//! smoother used across the tracker: scalar channels (axes, confidences)
//! and vector channels (ray origins and directions) share a single
//! implementation, parameterized over the value type's vector-space
//! operations.
//!
//! # Guarantees
//!
//! - No heap allocations
//! - O(1) per update
//! - Pure numeric: NaN/Inf propagate if fed, nothing panics
//!
//! # Example
//!
//! ```
//! use openspatial_filters::KalmanState;
//!
//! let mut filter: KalmanState<f32> = KalmanState::new();
//! let mut estimate = 0.0;
//! for _ in 0..100 {
//!     estimate = filter.update(1.0);
//! }
//! assert!(estimate > 0.5 && estimate < 1.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod kalman;

pub use kalman::{DEFAULT_P, DEFAULT_Q, DEFAULT_R, KalmanState, MeasureOrder, Smoothable};
