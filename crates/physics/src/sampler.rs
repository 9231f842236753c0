//! # Wedge Placement
//!
//! Entities are placed by drawing a point inside an annular wedge: a ring
//! between two radii, cut to an angle range measured from [`FORWARD`] about
//! the vertical axis. The result always lies on the horizontal plane through
//! the wedge center.

use fastrand::Rng;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::transform::{yaw_rotation, FORWARD};

/// Annular wedge around a center point. Angles are in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min_angle: f32,
    pub max_angle: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Region {
    #[must_use]
    pub const fn new(min_angle: f32, max_angle: f32, min_radius: f32, max_radius: f32) -> Self {
        Self {
            min_angle,
            max_angle,
            min_radius,
            max_radius,
        }
    }

    /// Draw a point inside the wedge centered on `center`.
    pub fn sample(&self, rng: &mut Rng, center: Vec3) -> Vec3 {
        choose_random_position(
            rng,
            center,
            self.min_angle,
            self.max_angle,
            self.min_radius,
            self.max_radius,
        )
    }

    /// Both ranges collapse to a single value, so sampling is deterministic.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max_angle <= self.min_angle && self.max_radius <= self.min_radius
    }
}

/// Uniform draw from `[min, max)`.
pub fn random_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.f32()
}

/// Choose a position inside an annular wedge.
///
/// The radius is drawn from `[min_radius, max_radius)` when that range is
/// non-empty and is exactly `min_radius` otherwise; the angle follows the
/// same rule. The point is `center + rotate_y(angle) * FORWARD * radius`.
pub fn choose_random_position(
    rng: &mut Rng,
    center: Vec3,
    min_angle: f32,
    max_angle: f32,
    min_radius: f32,
    max_radius: f32,
) -> Vec3 {
    let radius = if max_radius > min_radius {
        random_range(rng, min_radius, max_radius)
    } else {
        min_radius
    };

    let angle = if max_angle > min_angle {
        random_range(rng, min_angle, max_angle)
    } else {
        min_angle
    };

    center + yaw_rotation(angle) * FORWARD * radius
}
