//! Ray-surface intersection and pixel-space conversion.

use glam::{Vec2, Vec3};
use panelray_core::{Ray, Surface};

/// Rays closer to parallel than this never intersect the surface plane.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Result of a ray hitting a surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// World-space hit position.
    pub position: Vec3,
    /// Distance from ray origin to the hit point.
    pub distance: f32,
    /// Surface-local pixel coordinate (top-left origin).
    pub pixel: Vec2,
}

/// Intersect a world-space ray with a surface's finite quad.
///
/// Returns `None` when the ray is parallel to the surface plane, the
/// plane lies behind the ray origin, or the intersection falls outside
/// the surface's extent. A miss is a normal per-frame outcome, not an
/// error.
///
/// On a hit, the world intersection is converted to the surface's local
/// frame and then to pixel space:
///
/// ```text
/// pixel_x = (local_x + width * scale / 2) / scale
/// pixel_y = height - (local_y + height * scale / 2) / scale
/// ```
///
/// The surface origin sits at its center and pixel Y grows downward to
/// match the raster's top-left origin. Element bounds are declared in
/// this same pixel space.
pub fn intersect_surface(ray: &Ray, surface: &Surface) -> Option<SurfaceHit> {
    let inverse = surface.transform().inverse();
    let local_origin = inverse.transform_point3(ray.origin);
    let local_dir = inverse.transform_vector3(ray.direction);

    // The surface quad is the z=0 plane in its local frame.
    if local_dir.z.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = -local_origin.z / local_dir.z;
    if t < 0.0 {
        return None;
    }

    let local = local_origin + local_dir * t;
    let width = surface.width() as f32;
    let height = surface.height() as f32;
    let scale = surface.scale();

    let pixel = Vec2::new(
        (local.x + width * scale * 0.5) / scale,
        height - (local.y + height * scale * 0.5) / scale,
    );

    if pixel.x < 0.0 || pixel.x > width || pixel.y < 0.0 || pixel.y > height {
        return None;
    }

    Some(SurfaceHit {
        position: ray.at(t),
        distance: t * ray.direction.length(),
        pixel,
    })
}
