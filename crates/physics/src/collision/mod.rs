//! # Contact Detection
//!
//! Overlap tests between bounding spheres. The arena only consumes the fact
//! that two bodies touched, so there is no impulse response here: callers get
//! a [`Contact`] and decide what the touch means.

mod sphere_sphere;

pub use sphere_sphere::*;

use glam::Vec3;

/// Contact information between two overlapping bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point in world space, on the surface of body A
    pub point: Vec3,
    /// Contact normal (from body A to body B)
    pub normal: Vec3,
    /// Penetration depth
    pub depth: f32,
}

impl Contact {
    #[must_use]
    pub const fn new(point: Vec3, normal: Vec3, depth: f32) -> Self {
        Self { point, normal, depth }
    }
}
