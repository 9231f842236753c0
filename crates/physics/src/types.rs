use glam::Vec3;

/// Bounding sphere used for contact queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub pos: Vec3,
    pub radius: f32,
}

impl Sphere {
    #[must_use]
    pub const fn new(pos: Vec3, radius: f32) -> Self {
        Self { pos, radius }
    }
}
