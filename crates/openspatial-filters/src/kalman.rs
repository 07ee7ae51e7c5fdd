//! One-dimensional recursive Kalman smoother
//!
//! The classic scalar Kalman recurrence with fixed process and measurement
//! noise, applied independently per channel. Vector channels run the same
//! recurrence with a scalar covariance and a vector estimate, which is why
//! the filter is generic over [`Smoothable`] rather than duplicated per
//! value type.

use std::fmt;

/// Default process noise.
pub const DEFAULT_Q: f32 = 0.000_001;
/// Default measurement noise.
pub const DEFAULT_R: f32 = 0.01;
/// Default estimation covariance.
pub const DEFAULT_P: f32 = 1.0;

/// Vector-space operations the smoother needs from a value type.
///
/// Implemented for `f32` and `glam::Vec3`; any type with component-wise
/// add/sub/scale works.
pub trait Smoothable: Copy + fmt::Debug {
    /// Additive identity.
    fn zero() -> Self;
    /// Component-wise addition.
    fn add(self, other: Self) -> Self;
    /// Component-wise subtraction.
    fn sub(self, other: Self) -> Self;
    /// Uniform scaling.
    fn scale(self, factor: f32) -> Self;
}

impl Smoothable for f32 {
    fn zero() -> Self {
        0.0
    }
    fn add(self, other: Self) -> Self {
        self + other
    }
    fn sub(self, other: Self) -> Self {
        self - other
    }
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Smoothable for glam::Vec3 {
    fn zero() -> Self {
        glam::Vec3::ZERO
    }
    fn add(self, other: Self) -> Self {
        self + other
    }
    fn sub(self, other: Self) -> Self {
        self - other
    }
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

/// Order of a batch of measurements fed to [`KalmanState::update_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureOrder {
    /// Oldest measurement first (natural order).
    Chronological,
    /// Newest measurement first; the batch is folded back-to-front.
    NewestFirst,
}

/// Recursive smoother state for one signal channel.
///
/// Holds the configured noise parameters (`q`, `r`), the estimation
/// covariance (`p`), the current estimate (`x`) and the last gain (`k`).
/// State persists for the lifetime of the tracked signal; [`reset`]
/// reinitializes covariance and estimate without discarding `q`/`r`.
///
/// [`reset`]: KalmanState::reset
#[derive(Debug, Clone, Copy)]
pub struct KalmanState<V: Smoothable> {
    q: f32,
    r: f32,
    p: f32,
    x: V,
    k: f32,
}

impl<V: Smoothable> KalmanState<V> {
    /// Create a smoother with default noise parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_noise(DEFAULT_Q, DEFAULT_R)
    }

    /// Create a smoother with explicit process and measurement noise.
    #[must_use]
    pub fn with_noise(q: f32, r: f32) -> Self {
        Self {
            q,
            r,
            p: DEFAULT_P,
            x: V::zero(),
            k: 0.0,
        }
    }

    /// Feed one measurement and return the new estimate.
    pub fn update(&mut self, measurement: V) -> V {
        self.update_with(measurement, None, None)
    }

    /// Feed one measurement, optionally retuning the noise parameters.
    ///
    /// An override is written only when it differs from the stored value,
    /// so steady callers never touch the parameter fields.
    pub fn update_with(&mut self, measurement: V, new_q: Option<f32>, new_r: Option<f32>) -> V {
        #[allow(clippy::float_cmp, reason = "redundant-write guard wants exact comparison")]
        {
            if let Some(q) = new_q
                && q != self.q
            {
                self.q = q;
            }
            if let Some(r) = new_r
                && r != self.r
            {
                self.r = r;
            }
        }

        self.k = (self.p + self.q) / (self.p + self.q + self.r);
        self.p = self.r * (self.p + self.q) / (self.r + self.p + self.q);

        let result = self.x.add(measurement.sub(self.x).scale(self.k));
        self.x = result;
        result
    }

    /// Fold a batch of measurements through the filter, returning the
    /// final estimate.
    ///
    /// An empty batch leaves the state untouched and returns the zero
    /// value, matching the single-measurement contract's starting point.
    pub fn update_batch(&mut self, measurements: &[V], order: MeasureOrder) -> V {
        self.update_batch_with(measurements, order, None, None)
    }

    /// Batch update with optional noise retuning applied on every step.
    pub fn update_batch_with(
        &mut self,
        measurements: &[V],
        order: MeasureOrder,
        new_q: Option<f32>,
        new_r: Option<f32>,
    ) -> V {
        let mut result = V::zero();
        match order {
            MeasureOrder::Chronological => {
                for m in measurements {
                    result = self.update_with(*m, new_q, new_r);
                }
            }
            MeasureOrder::NewestFirst => {
                for m in measurements.iter().rev() {
                    result = self.update_with(*m, new_q, new_r);
                }
            }
        }
        result
    }

    /// Reset covariance, estimate, and gain to their initial values.
    ///
    /// `q` and `r` keep their configured values.
    pub fn reset(&mut self) {
        self.p = DEFAULT_P;
        self.x = V::zero();
        self.k = 0.0;
    }

    /// Current estimate.
    #[must_use]
    pub fn estimate(&self) -> V {
        self.x
    }

    /// Current estimation covariance.
    #[must_use]
    pub fn covariance(&self) -> f32 {
        self.p
    }

    /// Gain applied on the last update.
    #[must_use]
    pub fn gain(&self) -> f32 {
        self.k
    }

    /// Configured process noise.
    #[must_use]
    pub fn process_noise(&self) -> f32 {
        self.q
    }

    /// Configured measurement noise.
    #[must_use]
    pub fn measurement_noise(&self) -> f32 {
        self.r
    }
}

impl<V: Smoothable> Default for KalmanState<V> {
    fn default() -> Self {
        Self::new()
    }
}
