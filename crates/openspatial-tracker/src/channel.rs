//! Interaction channels and the change-dispatch gate
//!
//! Each exposed signal (pointer pose, grip pose, select boolean, trigger
//! press, index-finger pose) lives in one channel. A channel holds the
//! current and previous value; "changed" is derived by exact comparison at
//! update time, never stored. The dispatch discipline on top of this is:
//! emit exactly one event per channel per tick, and only when the update
//! reported a change.

/// One interaction signal with change detection.
///
/// Comparison is exact (`PartialEq` on the raw fields): an epsilon gate
/// would suppress legitimate sub-epsilon updates and make event emission
/// dependent on magnitude.
#[derive(Debug, Clone, Copy)]
pub struct InteractionChannel<T: Copy + PartialEq> {
    current: T,
    previous: T,
}

impl<T: Copy + PartialEq> InteractionChannel<T> {
    /// Create a channel seeded with `initial` as both current and
    /// previous value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            previous: initial,
        }
    }

    /// Write this tick's value; returns whether it differs from the
    /// previous tick's value.
    #[must_use]
    pub fn update(&mut self, value: T) -> bool {
        self.previous = self.current;
        self.current = value;
        self.current != self.previous
    }

    /// Current value.
    #[must_use]
    pub fn current(&self) -> T {
        self.current
    }

    /// Value before the most recent update.
    #[must_use]
    pub fn previous(&self) -> T {
        self.previous
    }
}
