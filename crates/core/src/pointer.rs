//! Pointer identity, rays, and per-hand pointer state.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Which hand a controller (and its pointer) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    /// The left-hand controller.
    Left,
    /// The right-hand controller.
    Right,
}

impl Hand {
    /// Both hands, in index order.
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Stable index for per-hand storage.
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    /// Human-readable name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

/// A ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin in world coordinates.
    pub origin: Vec3,
    /// Ray direction (normalized on construction).
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray from a controller pose: controllers point along their local −Z
    /// axis.
    pub fn from_pose(position: Vec3, rotation: Quat) -> Self {
        Self {
            origin: position,
            direction: rotation * Vec3::NEG_Z,
        }
    }

    /// Evaluate the point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Per-hand pointer state, owned by the frame driver and updated once per
/// frame. At most one element is hovered per pointer at any time; the two
/// hands never affect each other's state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Last surface-local pixel coordinate. `None` means the pointer is
    /// not currently intersecting the surface.
    pub point: Option<Vec2>,
    /// Index of the currently hovered element in this frame's element
    /// list, if any. A non-owning lookup key, not a reference.
    pub hovered: Option<usize>,
    /// Whether this pointer's observable state changed this frame.
    pub dirty: bool,
}

impl PointerState {
    /// Reset to the disconnected state, discarding any in-flight hover.
    pub fn clear(&mut self) {
        self.point = None;
        self.hovered = None;
        self.dirty = false;
    }
}

/// Policy controlling when pointer movement forces a repaint.
///
/// Hover enter/leave and cursor appearance/disappearance always mark the
/// surface dirty. Whether cursor repositioning alone does too is a cost
/// knob: redrawing tracks the cursor smoothly, skipping it saves repaints
/// when nothing but the cursor moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepaintPolicy {
    /// Repaint whenever a pointer's surface coordinate changes.
    #[default]
    CursorMovement,
    /// Repaint only on hover transitions and cursor presence changes.
    HoverChangesOnly,
}
