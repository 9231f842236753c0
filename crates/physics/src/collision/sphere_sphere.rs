//! Sphere-sphere overlap detection

use glam::Vec3;

use super::Contact;
use crate::types::Sphere;

/// Detect collision between two spheres
#[must_use]
pub fn detect_sphere_sphere_collision(
    sphere_a: &Sphere,
    sphere_b: &Sphere,
) -> Option<Contact> {
    let delta = sphere_b.pos - sphere_a.pos;
    let distance_squared = delta.length_squared();
    let min_distance = sphere_a.radius + sphere_b.radius;

    if distance_squared < min_distance * min_distance {
        let distance = distance_squared.sqrt();

        // Handle case where spheres are at same position
        let normal = if distance > 0.0001 {
            delta / distance
        } else {
            Vec3::Y
        };

        let depth = min_distance - distance;
        let contact_point = sphere_a.pos + normal * sphere_a.radius;

        Some(Contact::new(contact_point, normal, depth))
    } else {
        None
    }
}

/// Test `probe` against every keyed body and return the keys it touches,
/// preserving the order of `bodies`, each with its contact geometry.
///
/// Callers that only react to the touch itself can ignore the [`Contact`];
/// it is kept for response code and diagnostics.
#[must_use]
pub fn detect_overlaps<K, I>(probe: &Sphere, bodies: I) -> Vec<(K, Contact)>
where
    I: IntoIterator<Item = (K, Sphere)>,
{
    bodies
        .into_iter()
        .filter_map(|(key, body)| {
            detect_sphere_sphere_collision(probe, &body).map(|contact| (key, contact))
        })
        .collect()
}
