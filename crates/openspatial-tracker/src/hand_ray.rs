//! Synthesized hand ray
//!
//! Pointing proxy for vendors without a native pointer pose. The ray aims
//! from an approximated shoulder (a fixed offset below and beside the
//! head) through the palm, with origin and direction each run through the
//! recursive smoother to keep the ray stable against per-tick jitter.
//!
//! When the palm normal faces back toward the viewer, or the geometry
//! degenerates (palm at the shoulder), the last stable ray is held rather
//! than emitting a wild one.

use crate::config::HandRayConfig;
use openspatial_types::{Handedness, Pose, Vec3, look_rotation};
use openspatial_filters::KalmanState;

/// A stabilized pointing ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandRay {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Unit ray direction.
    pub direction: Vec3,
}

impl HandRay {
    /// Pointer pose for this ray: origin position, look-rotation
    /// orientation.
    #[must_use]
    pub fn pointer_pose(&self) -> Pose {
        Pose::new(self.origin, look_rotation(self.direction))
    }
}

/// Per-hand hand-ray derivation state.
///
/// Persists across ticks; torn down with the hand entry so no smoothing
/// state leaks across a tracking loss or mode switch.
#[derive(Debug, Clone)]
pub struct HandRayState {
    origin_filter: KalmanState<Vec3>,
    direction_filter: KalmanState<Vec3>,
    last: Option<HandRay>,
}

impl HandRayState {
    /// Create fresh ray state with the configured smoothing parameters.
    #[must_use]
    pub fn new(config: &HandRayConfig) -> Self {
        Self {
            origin_filter: KalmanState::with_noise(
                config.origin_smoothing.q,
                config.origin_smoothing.r,
            ),
            direction_filter: KalmanState::with_noise(
                config.direction_smoothing.q,
                config.direction_smoothing.r,
            ),
            last: None,
        }
    }

    /// Advance the ray for this tick.
    ///
    /// `palm_normal` is the outward palm normal; when no palm-normal joint
    /// exists the caller passes the heuristic `-Vec3::Y`. Returns the last
    /// stable ray when the hand is not in a pointing attitude or the
    /// geometry degenerates, and `None` only before the first stable tick.
    pub fn update(
        &mut self,
        palm_position: Vec3,
        palm_normal: Vec3,
        head: &Pose,
        handedness: Handedness,
        config: &HandRayConfig,
    ) -> Option<HandRay> {
        if !is_pointing(palm_normal, head, config.backward_tolerance) {
            return self.last;
        }

        let shoulder = aim_origin(head, handedness, config);
        let raw_direction = (palm_position - shoulder).normalize_or_zero();
        if raw_direction == Vec3::ZERO {
            return self.last;
        }

        let origin = self.origin_filter.update(palm_position);
        let direction = self
            .direction_filter
            .update(raw_direction)
            .normalize_or_zero();
        if direction == Vec3::ZERO {
            return self.last;
        }

        let ray = HandRay { origin, direction };
        self.last = Some(ray);
        Some(ray)
    }

    /// Last stable ray, if any tick has produced one.
    #[must_use]
    pub fn current(&self) -> Option<HandRay> {
        self.last
    }

    /// Drop the stable ray and reset both smoothers (q/r kept).
    pub fn reset(&mut self) {
        self.origin_filter.reset();
        self.direction_filter.reset();
        self.last = None;
    }
}

/// Whether the palm attitude reads as pointing rather than, say, facing
/// the viewer's own face.
fn is_pointing(palm_normal: Vec3, head: &Pose, backward_tolerance: f32) -> bool {
    palm_normal.normalize_or_zero().dot(head.forward()) > -backward_tolerance
}

/// Approximate aim shoulder: below the head, offset laterally toward the
/// acting hand.
fn aim_origin(head: &Pose, handedness: Handedness, config: &HandRayConfig) -> Vec3 {
    let lateral = match handedness {
        Handedness::Left => -config.shoulder_lateral,
        Handedness::Right => config.shoulder_lateral,
    };
    head.position + head.rotation * Vec3::new(lateral, -config.shoulder_drop, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn head_at_origin() -> Pose {
        Pose::from_position(Vec3::new(0.0, 1.6, 0.0))
    }

    fn default_config() -> HandRayConfig {
        HandRayConfig::default()
    }

    #[test]
    fn first_pointing_tick_produces_a_ray() {
        let config = default_config();
        let mut state = HandRayState::new(&config);
        let palm = Vec3::new(0.2, 1.3, 0.5);

        let ray = state.update(palm, -Vec3::Y, &head_at_origin(), Handedness::Right, &config);
        let ray = ray.expect("pointing palm should produce a ray");
        assert_relative_eq!(ray.direction.length(), 1.0, epsilon = 1e-5);
        // Aims away from the body, roughly along +Z.
        assert!(ray.direction.z > 0.0);
    }

    #[test]
    fn ray_converges_to_the_steady_aim() {
        let config = default_config();
        let mut state = HandRayState::new(&config);
        let palm = Vec3::new(0.15, 1.4, 0.6);
        let head = head_at_origin();

        let mut last = None;
        for _ in 0..300 {
            last = state.update(palm, -Vec3::Y, &head, Handedness::Right, &config);
        }
        let ray = last.expect("steady input yields a ray");

        let shoulder = head.position + Vec3::new(config.shoulder_lateral, -config.shoulder_drop, 0.0);
        let expected = (palm - shoulder).normalize();
        assert_relative_eq!(ray.direction.x, expected.x, epsilon = 1e-2);
        assert_relative_eq!(ray.direction.y, expected.y, epsilon = 1e-2);
        assert_relative_eq!(ray.direction.z, expected.z, epsilon = 1e-2);
        assert_relative_eq!(ray.origin.x, palm.x, epsilon = 1e-2);
    }

    #[test]
    fn backward_facing_palm_holds_the_last_ray() {
        let config = default_config();
        let mut state = HandRayState::new(&config);
        let head = head_at_origin();

        let first = state.update(Vec3::new(0.2, 1.3, 0.5), -Vec3::Y, &head, Handedness::Right, &config);
        assert!(first.is_some());

        // Palm normal swings to face the viewer: ray must not jump.
        let held = state.update(
            Vec3::new(0.9, 1.3, 0.1),
            -head.forward(),
            &head,
            Handedness::Right,
            &config,
        );
        assert_eq!(held, first);
    }

    #[test]
    fn degenerate_geometry_before_any_ray_yields_none() {
        let config = default_config();
        let mut state = HandRayState::new(&config);
        let head = head_at_origin();
        let shoulder = aim_origin(&head, Handedness::Left, &config);

        let ray = state.update(shoulder, -Vec3::Y, &head, Handedness::Left, &config);
        assert_eq!(ray, None);
    }

    #[test]
    fn reset_drops_the_stable_ray() {
        let config = default_config();
        let mut state = HandRayState::new(&config);
        let _ = state.update(Vec3::new(0.2, 1.3, 0.5), -Vec3::Y, &head_at_origin(), Handedness::Right, &config);
        assert!(state.current().is_some());
        state.reset();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn shoulders_mirror_laterally() {
        let config = default_config();
        let head = head_at_origin();
        let left = aim_origin(&head, Handedness::Left, &config);
        let right = aim_origin(&head, Handedness::Right, &config);
        assert_relative_eq!(left.x, -right.x);
        assert!(left.y < head.position.y);
    }
}
