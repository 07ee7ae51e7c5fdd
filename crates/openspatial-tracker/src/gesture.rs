//! Discrete gesture classification
//!
//! Turns a vendor pinch signal into the select boolean. For classified
//! signals, select fires only when the recognizer confidence clears the
//! configured threshold AND the key pose is on the pinch allow-list.
//! Direct SDK pinch booleans pass through untouched.
//!
//! There is deliberately no hysteresis band: the bare threshold is
//! re-evaluated every tick, so a confidence signal oscillating around the
//! threshold flickers the boolean. See the test documenting that behavior
//! before "fixing" it.

use openspatial_types::{KeyPose, PinchSignal};

/// Key poses that count as a select when confident enough.
const SELECT_POSES: [KeyPose; 2] = [KeyPose::Pinch, KeyPose::Fist];

/// Classify a pinch signal into the select boolean.
#[must_use]
pub fn is_selecting(signal: &PinchSignal, confidence_threshold: f32) -> bool {
    match *signal {
        PinchSignal::Direct(pinching) => pinching,
        PinchSignal::Classified {
            key_pose,
            confidence,
        } => confidence > confidence_threshold && SELECT_POSES.contains(&key_pose),
    }
}
