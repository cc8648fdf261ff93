//! Camera placement chosen on every reset.

use glam::{Quat, Vec3};
use rand::Rng;

/// Distance of the camera from the grid center.
pub const VIEW_DISTANCE: f32 = 14.0;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
}

impl Viewpoint {
    /// The straight-on view down the -Z axis.
    pub fn front() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, VIEW_DISTANCE),
            target: Vec3::ZERO,
        }
    }

    /// Picks a fresh camera placement.
    ///
    /// Half the time this is [`Viewpoint::front`]. Otherwise the eye starts
    /// on +X and is rotated a quarter turn around a random axis.
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            return Self::front();
        }
        let axis = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        let Some(axis) = axis.try_normalize() else {
            return Self::front();
        };
        let rotation = Quat::from_axis_angle(axis, std::f32::consts::FRAC_PI_2);
        Self {
            eye: rotation * Vec3::new(VIEW_DISTANCE, 0.0, 0.0),
            target: Vec3::ZERO,
        }
    }

    /// Returns the distance from eye to target.
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_front_view() {
        let view = Viewpoint::front();
        assert_eq!(view.eye, Vec3::new(0.0, 0.0, 14.0));
        assert_eq!(view.target, Vec3::ZERO);
    }

    #[test]
    fn test_random_views_keep_distance() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_rotated = false;
        for _ in 0..100 {
            let view = Viewpoint::random(&mut rng);
            assert_eq!(view.target, Vec3::ZERO);
            assert!((view.distance() - VIEW_DISTANCE).abs() < 1e-3);
            saw_rotated |= view != Viewpoint::front();
        }
        assert!(saw_rotated);
    }
}
