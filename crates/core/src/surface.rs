//! The UI canvas placed in the 3D scene.

use glam::{Affine3A, Quat, Vec2, Vec3};
use thiserror::Error;

/// Errors raised when constructing a [`Surface`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// Width or height was zero.
    #[error("surface dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Scale was zero, negative, or not finite.
    #[error("surface scale must be a positive finite number")]
    InvalidScale,
}

/// A rectangular UI canvas rendered as a texture in the 3D scene.
///
/// The surface has a fixed pixel resolution, a `scale` mapping pixels to
/// world units, and a world pose. It is immutable for its lifetime;
/// re-creating it reallocates the raster target backing it.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    width: u32,
    height: u32,
    scale: f32,
    position: Vec3,
    rotation: Quat,
}

impl Surface {
    /// Create a surface at the world origin facing +Z.
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SurfaceError::InvalidScale);
        }
        Ok(Self {
            width,
            height,
            scale,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        })
    }

    /// Builder: place the surface center at `position` in world space.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder: orient the surface with `rotation` in world space.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel-to-world-unit scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// World position of the surface center.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World transform of the surface quad (centered on its origin,
    /// facing local +Z).
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.position)
    }

    /// Size of the surface quad in world units.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.scale,
            self.height as f32 * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_validation() {
        assert!(Surface::new(1024, 768, 0.001).is_ok());
        assert_eq!(
            Surface::new(0, 768, 0.001).unwrap_err(),
            SurfaceError::InvalidDimensions {
                width: 0,
                height: 768
            }
        );
        assert_eq!(
            Surface::new(1024, 768, 0.0).unwrap_err(),
            SurfaceError::InvalidScale
        );
        assert_eq!(
            Surface::new(1024, 768, -1.0).unwrap_err(),
            SurfaceError::InvalidScale
        );
        assert_eq!(
            Surface::new(1024, 768, f32::NAN).unwrap_err(),
            SurfaceError::InvalidScale
        );
    }

    #[test]
    fn test_world_size() {
        let surface = Surface::new(1024, 768, 0.001).unwrap();
        let size = surface.world_size();
        assert!((size.x - 1.024).abs() < 1e-6);
        assert!((size.y - 0.768).abs() < 1e-6);
    }

    #[test]
    fn test_placement() {
        let surface = Surface::new(1024, 768, 0.001)
            .unwrap()
            .with_position(Vec3::new(0.0, 1.5, -0.5));
        let translation: Vec3 = surface.transform().translation.into();
        assert_eq!(translation, Vec3::new(0.0, 1.5, -0.5));
        assert_eq!(surface.position(), Vec3::new(0.0, 1.5, -0.5));
    }
}
