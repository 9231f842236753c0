#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Arena Physics
//!
//! The small slice of spatial machinery the penguin arena needs. There is no
//! rigid-body integration here: bodies are moved kinematically by their
//! owners, and this crate only answers geometric questions about them.
//!
//! ## Key Components
//!
//! -   **Transforms:** [`Transform`] pairs a position with an orientation and
//!     knows how to yaw about the vertical axis and face a target. See the
//!     [`transform`] module.
//! -   **Placement:** [`Region`] and [`choose_random_position`] draw points
//!     inside an annular wedge around a center, which is how every entity in
//!     the arena is placed. See the [`sampler`] module.
//! -   **Contacts:** [`detect_sphere_sphere_collision`] and
//!     [`detect_overlaps`] turn overlapping bounding spheres into contact
//!     events. See the [`collision`] module.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Region, Transform, Vec3};
//!
//! let mut rng = fastrand::Rng::with_seed(7);
//! let region = Region::new(-45.0, 45.0, 4.0, 9.0);
//! let spot = region.sample(&mut rng, Vec3::ZERO);
//!
//! let mut body = Transform::from_yaw(Vec3::ZERO, 0.0);
//! body.look_at(spot);
//! assert!(body.forward().dot(spot.normalize()) > 0.999);
//! ```

pub mod collision;
pub mod sampler;
pub mod transform;
pub mod types;

pub use collision::{detect_overlaps, detect_sphere_sphere_collision, Contact};
pub use glam::{Quat, Vec3};
pub use sampler::{choose_random_position, random_range, Region};
pub use transform::{look_rotation, yaw_rotation, Transform, FORWARD, UP};
pub use types::Sphere;
