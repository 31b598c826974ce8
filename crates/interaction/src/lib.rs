//! Pointer interaction engine for panelray surfaces.
//!
//! Converts controller rays into surface-local pixel coordinates, hit
//! tests them against the caller's element snapshot, tracks per-hand
//! hover state, dispatches select events to hovered elements, and drives
//! repaints only when something observable changed.

pub mod frame;
pub mod hit;
pub mod hover;
pub mod raycast;
pub mod select;

// Re-export commonly used types
pub use frame::{FrameDriver, FrameReport};
pub use hit::hit_test;
pub use hover::HoverTracker;
pub use raycast::{intersect_surface, SurfaceHit};
pub use select::{dispatch_select, SelectPhase};
