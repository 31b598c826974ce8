#![warn(missing_docs)]
//! Core data model shared across the panelray workspace.

pub mod element;
pub mod pointer;
pub mod surface;

// Re-export commonly used types
pub use element::{Color, Rect, SelectHandler, UiElement, UiElementKind};
pub use pointer::{Hand, PointerState, Ray, RepaintPolicy};
pub use surface::{Surface, SurfaceError};
