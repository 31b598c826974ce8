//! Hit testing a surface-local point against the element snapshot.

use glam::Vec2;
use panelray_core::UiElement;

/// Find the element under `point`, if any.
///
/// Elements are scanned in the caller-supplied order and the first whose
/// bounds contain the point wins; later overlapping elements are never
/// considered. Containment is inclusive on all edges, and degenerate
/// bounds never hit. Pure and O(n); returns the element's index, the
/// non-owning key used by the hover tracker and dispatcher.
pub fn hit_test(point: Vec2, elements: &[UiElement]) -> Option<usize> {
    elements
        .iter()
        .position(|element| element.bounds.contains(point))
}
