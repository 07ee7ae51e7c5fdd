//! Handedness and discrete key-pose taxonomy

/// Which hand (or controller slot) a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    /// Left hand / left controller slot.
    Left,
    /// Right hand / right controller slot.
    Right,
}

impl Handedness {
    /// Both handedness slots, in update order.
    pub const ALL: [Handedness; 2] = [Handedness::Left, Handedness::Right];

    /// Dense index for per-slot array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }

    /// The opposite slot.
    #[must_use]
    pub const fn other(self) -> Handedness {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handedness::Left => write!(f, "left"),
            Handedness::Right => write!(f, "right"),
        }
    }
}

/// Discrete hand-shape classification produced by a vendor gesture
/// recognizer.
///
/// The set follows the Magic Leap key-pose catalog; vendors without a
/// recognizer never produce one (they report a direct pinch boolean
/// instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPose {
    /// Index finger extended.
    Finger,
    /// Closed fist.
    Fist,
    /// Thumb and index pinched together.
    Pinch,
    /// Thumb up.
    Thumb,
    /// Thumb and index in an L shape.
    L,
    /// Open hand, palm facing away.
    OpenHand,
    /// Thumb and index forming a ring.
    Ok,
    /// Hand forming a C shape.
    C,
    /// Hand visible but no recognized pose.
    NoPose,
    /// No hand visible.
    NoHand,
}
