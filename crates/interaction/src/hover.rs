//! Per-pointer hover state machine.

use glam::Vec2;
use panelray_core::{Hand, PointerState, RepaintPolicy};
use tracing::debug;

/// Tracks one hand's hover state across frames.
///
/// States are "idle" (`hovered == None`) and "hovering element `i`".
/// Re-hitting the same element with an unchanged cursor is a no-op: no
/// transition fires and no repaint is requested. Hover state for one
/// hand never affects the other hand's tracker, though both may hover
/// the same element at once.
#[derive(Debug, Clone, Copy)]
pub struct HoverTracker {
    hand: Hand,
    policy: RepaintPolicy,
    state: PointerState,
}

impl HoverTracker {
    /// Create an idle tracker for `hand`.
    pub fn new(hand: Hand, policy: RepaintPolicy) -> Self {
        Self {
            hand,
            policy,
            state: PointerState::default(),
        }
    }

    /// The pointer state recorded by the last [`update`](Self::update).
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Currently hovered element index, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered
    }

    /// Advance the state machine with this frame's observation.
    ///
    /// `point` is the surface-local coordinate (None when the ray missed
    /// the surface or the controller is untracked) and `hit` the element
    /// index under it. A missing point always clears the hover. Returns
    /// whether this pointer now requires a repaint.
    pub fn update(&mut self, point: Option<Vec2>, hit: Option<usize>) -> bool {
        // No intersection carries no hit, whatever the hit tester said.
        let hit = if point.is_some() { hit } else { None };

        let presence_changed = point.is_some() != self.state.point.is_some();
        let hover_changed = hit != self.state.hovered;
        let moved = match (point, self.state.point) {
            (Some(now), Some(before)) => now != before,
            _ => false,
        };

        if hover_changed {
            match (self.state.hovered, hit) {
                (None, Some(index)) => debug!(hand = self.hand.name(), index, "hover enter"),
                (Some(index), None) => debug!(hand = self.hand.name(), index, "hover leave"),
                (Some(from), Some(to)) => {
                    debug!(hand = self.hand.name(), from, to, "hover moved")
                }
                (None, None) => {}
            }
        }

        self.state.point = point;
        self.state.hovered = hit;
        self.state.dirty = presence_changed
            || hover_changed
            || (moved && self.policy == RepaintPolicy::CursorMovement);
        self.state.dirty
    }

    /// Discard all state for this hand, e.g. when its controller
    /// disconnects mid-frame. No handler will fire for the stale hover.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(policy: RepaintPolicy) -> HoverTracker {
        HoverTracker::new(Hand::Right, policy)
    }

    #[test]
    fn test_enter_and_leave_set_dirty() {
        let mut t = tracker(RepaintPolicy::CursorMovement);
        assert!(t.update(Some(Vec2::new(150.0, 150.0)), Some(0)));
        assert_eq!(t.hovered(), Some(0));

        // Same element, same point: idempotent, no redraw.
        assert!(!t.update(Some(Vec2::new(150.0, 150.0)), Some(0)));

        // Moved off every element but still on the surface.
        assert!(t.update(Some(Vec2::new(0.0, 0.0)), None));
        assert_eq!(t.hovered(), None);

        // Left the surface entirely.
        assert!(t.update(None, None));
        assert!(t.state().point.is_none());

        // Still absent: nothing to redraw.
        assert!(!t.update(None, None));
    }

    #[test]
    fn test_hover_switch_between_elements() {
        let mut t = tracker(RepaintPolicy::HoverChangesOnly);
        assert!(t.update(Some(Vec2::new(10.0, 10.0)), Some(0)));
        assert!(t.update(Some(Vec2::new(20.0, 20.0)), Some(1)));
        assert_eq!(t.hovered(), Some(1));
    }

    #[test]
    fn test_cursor_movement_policy() {
        let mut t = tracker(RepaintPolicy::CursorMovement);
        assert!(t.update(Some(Vec2::new(10.0, 10.0)), Some(0)));
        // Cursor slides within the same element: repaint under this policy.
        assert!(t.update(Some(Vec2::new(11.0, 10.0)), Some(0)));
    }

    #[test]
    fn test_hover_changes_only_policy() {
        let mut t = tracker(RepaintPolicy::HoverChangesOnly);
        assert!(t.update(Some(Vec2::new(10.0, 10.0)), Some(0)));
        // Same hover, different coordinate: no repaint.
        assert!(!t.update(Some(Vec2::new(11.0, 10.0)), Some(0)));
        // Hover change still repaints.
        assert!(t.update(Some(Vec2::new(90.0, 90.0)), None));
    }

    #[test]
    fn test_missing_point_discards_hit() {
        let mut t = tracker(RepaintPolicy::CursorMovement);
        // A hit with no intersection point is contradictory; the point wins.
        assert!(!t.update(None, Some(2)));
        assert_eq!(t.hovered(), None);
    }

    #[test]
    fn test_clear_discards_in_flight_hover() {
        let mut t = tracker(RepaintPolicy::CursorMovement);
        t.update(Some(Vec2::new(10.0, 10.0)), Some(0));
        t.clear();
        assert_eq!(t.hovered(), None);
        assert!(!t.state().dirty);
    }
}
