//! Per-frame orchestration of the interaction pipeline.

use panelray_core::{Hand, PointerState, Ray, RepaintPolicy, Surface, UiElement};
use panelray_render::{RasterTarget, SurfaceRenderer};
use tracing::trace;

use crate::hit::hit_test;
use crate::hover::HoverTracker;
use crate::raycast::intersect_surface;
use crate::select::{dispatch_select, SelectPhase};

/// What a frame update observably did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Whether the raster was repainted this frame.
    pub repainted: bool,
}

/// Drives the full pipeline once per render frame: controller pose →
/// ray intersection → hit test → hover update → conditional repaint.
///
/// Owns the surface, its raster target, and one hover tracker per hand.
/// Runs synchronously inside the host's frame callback; select events
/// must be dispatched from that same logical thread.
pub struct FrameDriver {
    surface: Surface,
    renderer: SurfaceRenderer,
    raster: RasterTarget,
    trackers: [HoverTracker; 2],
}

impl FrameDriver {
    /// Create a driver for `surface`, allocating its raster target.
    pub fn new(surface: Surface, renderer: SurfaceRenderer, policy: RepaintPolicy) -> Self {
        Self {
            surface,
            renderer,
            raster: RasterTarget::new(surface.width(), surface.height()),
            trackers: [
                HoverTracker::new(Hand::Left, policy),
                HoverTracker::new(Hand::Right, policy),
            ],
        }
    }

    /// Process one render frame.
    ///
    /// `poses` holds each hand's pointing ray, `None` for untracked
    /// controllers — treated identically to a ray that misses. After
    /// both hands update, the raster repaints at most once, and only if
    /// some pointer marked it dirty. `dt` only times the evaluation; the
    /// pipeline itself is frame-rate independent.
    pub fn frame(&mut self, dt: f32, poses: [Option<Ray>; 2], elements: &[UiElement]) -> FrameReport {
        let mut any_dirty = false;
        for hand in Hand::ALL {
            let hit = poses[hand.index()]
                .as_ref()
                .and_then(|ray| intersect_surface(ray, &self.surface));
            let point = hit.map(|h| h.pixel);
            let hovered = point.and_then(|p| hit_test(p, elements));
            any_dirty |= self.trackers[hand.index()].update(point, hovered);
        }

        if any_dirty {
            let pointers = self.pointers();
            self.renderer.repaint(elements, &pointers, &mut self.raster);
        }
        trace!(dt, repainted = any_dirty, "frame processed");
        FrameReport {
            repainted: any_dirty,
        }
    }

    /// Dispatch a discrete select event against the current hover state.
    /// Returns whether a handler was invoked.
    pub fn select(&self, hand: Hand, phase: SelectPhase, elements: &[UiElement]) -> bool {
        dispatch_select(hand, phase, self.trackers[hand.index()].hovered(), elements)
    }

    /// Forget all state for `hand`, e.g. when its controller is torn
    /// down mid-frame. Stale hovers will not receive handlers.
    pub fn drop_pointer(&mut self, hand: Hand) {
        self.trackers[hand.index()].clear();
    }

    /// Current state of one hand's pointer.
    pub fn pointer(&self, hand: Hand) -> &PointerState {
        self.trackers[hand.index()].state()
    }

    /// Both pointer states, in [`Hand::ALL`] order.
    pub fn pointers(&self) -> [PointerState; 2] {
        [*self.trackers[0].state(), *self.trackers[1].state()]
    }

    /// The surface this driver operates.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The raster target backing the surface's appearance.
    pub fn raster(&self) -> &RasterTarget {
        &self.raster
    }

    /// Mutable raster access for the GPU upload path.
    pub fn raster_mut(&mut self) -> &mut RasterTarget {
        &mut self.raster
    }
}
