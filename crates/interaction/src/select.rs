//! Routing discrete select events to hovered elements.

use panelray_core::{Hand, UiElement};
use tracing::debug;

/// Which edge of the select input fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectPhase {
    /// Trigger pressed.
    Start,
    /// Trigger released.
    End,
}

/// Dispatch a select event for `hand` to its hovered element.
///
/// Looks up the hovered index against the current element snapshot and
/// invokes the matching handler synchronously with no arguments. The
/// event is silently dropped when nothing is hovered, the index is stale
/// (out of range for this frame's snapshot), or the element exposes no
/// handler for this phase; none of those are errors. Returns whether a
/// handler ran.
pub fn dispatch_select(
    hand: Hand,
    phase: SelectPhase,
    hovered: Option<usize>,
    elements: &[UiElement],
) -> bool {
    let Some(index) = hovered else {
        debug!(hand = hand.name(), ?phase, "select with no hover, dropped");
        return false;
    };
    let Some(element) = elements.get(index) else {
        debug!(hand = hand.name(), ?phase, index, "stale hover index, dropped");
        return false;
    };
    let handler = match phase {
        SelectPhase::Start => element.on_select_start.as_ref(),
        SelectPhase::End => element.on_select_end.as_ref(),
    };
    match handler {
        Some(handler) => {
            debug!(hand = hand.name(), ?phase, index, "select dispatched");
            handler();
            true
        }
        None => {
            debug!(hand = hand.name(), ?phase, index, "element has no handler");
            false
        }
    }
}
