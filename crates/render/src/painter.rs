//! Repainting a surface raster from an element snapshot.

use panelray_core::{Color, PointerState, UiElement};
use tracing::trace;

use crate::raster::RasterTarget;

/// Appearance of the per-hand cursor marker.
#[derive(Debug, Clone, Copy)]
pub struct CursorStyle {
    /// Ring radius in pixels.
    pub radius: f32,
    /// Stroke width in pixels.
    pub stroke: f32,
    /// Stroke color.
    pub color: Color,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            radius: 10.0,
            stroke: 2.0,
            color: Color::BLACK,
        }
    }
}

/// Paints the surface raster: backdrop, elements styled by hover state,
/// and one cursor ring per intersecting pointer.
///
/// Painting is a pure function of (elements, pointer states); calling
/// [`repaint`](Self::repaint) twice with identical inputs produces an
/// identical raster.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRenderer {
    background: Color,
    cursor: CursorStyle,
}

impl SurfaceRenderer {
    /// Create a renderer with the given backdrop color.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            cursor: CursorStyle::default(),
        }
    }

    /// Builder: override the cursor style.
    pub fn with_cursor(mut self, cursor: CursorStyle) -> Self {
        self.cursor = cursor;
        self
    }

    /// Repaint the raster and mark it for re-upload.
    ///
    /// Elements draw in declaration order, using their hover color when
    /// either hand hovers them. Cursors draw last, on top, skipping hands
    /// with no current intersection.
    pub fn repaint(
        &self,
        elements: &[UiElement],
        pointers: &[PointerState; 2],
        raster: &mut RasterTarget,
    ) {
        raster.fill(self.background);

        for (index, element) in elements.iter().enumerate() {
            let hovered = pointers.iter().any(|p| p.hovered == Some(index));
            raster.fill_rect(element.bounds, element.fill_color(hovered));
        }

        for pointer in pointers {
            if let Some(point) = pointer.point {
                raster.stroke_ring(point, self.cursor.radius, self.cursor.stroke, self.cursor.color);
            }
        }

        raster.needs_upload = true;
        trace!(elements = elements.len(), "surface repainted");
    }
}
