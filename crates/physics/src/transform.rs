//! Transform utilities for arena bodies
//!
//! Every body in the arena is a position plus an orientation. Yaw is measured
//! in degrees about the vertical axis: zero faces [`FORWARD`] (+Z) and
//! positive values turn toward +X.

use glam::{EulerRot, Quat, Vec3};

/// World up axis.
pub const UP: Vec3 = Vec3::Y;

/// Direction a body faces under the identity rotation.
pub const FORWARD: Vec3 = Vec3::Z;

/// Position and orientation of a body
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Body at `position` turned `yaw_degrees` about the vertical axis.
    #[must_use]
    pub fn from_yaw(position: Vec3, yaw_degrees: f32) -> Self {
        Self::new(position, yaw_rotation(yaw_degrees))
    }

    /// Unit vector the body currently faces.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    /// Heading on the horizontal plane, in degrees within `(-180, 180]`.
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        let forward = self.forward();
        forward.x.atan2(forward.z).to_degrees()
    }

    /// Turn about the world vertical axis.
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.rotation = (yaw_rotation(degrees) * self.rotation).normalize();
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Face `target`. Leaves the rotation untouched when the target coincides
    /// with the current position.
    pub fn look_at(&mut self, target: Vec3) {
        if let Some(rotation) = look_rotation(target - self.position) {
            self.rotation = rotation;
        }
    }
}

/// Rotation of `degrees` about the vertical axis.
#[must_use]
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

/// Roll-free rotation whose forward axis points along `direction`.
///
/// Returns `None` for a zero-length direction.
#[must_use]
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let dir = direction.try_normalize()?;
    let yaw = dir.x.atan2(dir.z);
    let pitch = -dir.y.clamp(-1.0, 1.0).asin();
    Some(Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0))
}
