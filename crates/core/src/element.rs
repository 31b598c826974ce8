//! UI element declarations supplied by the caller.
//!
//! Elements are read-only snapshots: the engine reads their bounds and
//! colors each frame and invokes their handlers, but never mutates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(
    /// RGBA bytes.
    pub [u8; 4],
);

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Opaque black.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// The default canvas backdrop.
    pub const GREEN: Self = Self([0, 128, 0, 255]);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
}

/// An axis-aligned rectangle in surface-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment test on all four edges.
    ///
    /// Degenerate bounds (negative width or height) never contain any
    /// point, so malformed declarations stay inert instead of failing.
    pub fn contains(&self, point: Vec2) -> bool {
        if self.width < 0.0 || self.height < 0.0 {
            return false;
        }
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// A select handler supplied by the caller, invoked with no arguments.
pub type SelectHandler = Rc<dyn Fn()>;

/// Variant-specific element data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiElementKind {
    /// A plain filled rectangle.
    Rect,
    /// A button. The label is carried for callers that render text;
    /// this engine draws buttons as rectangles.
    Button {
        /// Button label text.
        label: String,
    },
}

/// A single UI element on the surface.
#[derive(Clone)]
pub struct UiElement {
    /// Variant tag.
    pub kind: UiElementKind,
    /// Bounds rectangle in surface-pixel space.
    pub bounds: Rect,
    /// Base fill color.
    pub color: Color,
    /// Fill color while hovered by either hand, if any.
    pub hover_color: Option<Color>,
    /// Handler fired when a select press begins over this element.
    pub on_select_start: Option<SelectHandler>,
    /// Handler fired when a select press ends over this element.
    pub on_select_end: Option<SelectHandler>,
}

impl UiElement {
    /// Create a plain rectangle element.
    pub fn rect(bounds: Rect, color: Color) -> Self {
        Self {
            kind: UiElementKind::Rect,
            bounds,
            color,
            hover_color: None,
            on_select_start: None,
            on_select_end: None,
        }
    }

    /// Create a button element.
    pub fn button(bounds: Rect, color: Color, label: impl Into<String>) -> Self {
        Self {
            kind: UiElementKind::Button {
                label: label.into(),
            },
            bounds,
            color,
            hover_color: None,
            on_select_start: None,
            on_select_end: None,
        }
    }

    /// Builder: set the hover color.
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = Some(color);
        self
    }

    /// Builder: set the select-start handler.
    pub fn with_on_select_start(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_select_start = Some(Rc::new(handler));
        self
    }

    /// Builder: set the select-end handler.
    pub fn with_on_select_end(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_select_end = Some(Rc::new(handler));
        self
    }

    /// Fill color given the current hover state.
    pub fn fill_color(&self, hovered: bool) -> Color {
        if hovered {
            self.hover_color.unwrap_or(self.color)
        } else {
            self.color
        }
    }
}

impl fmt::Debug for UiElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiElement")
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("color", &self.color)
            .field("hover_color", &self.hover_color)
            .field("on_select_start", &self.on_select_start.is_some())
            .field("on_select_end", &self.on_select_end.is_some())
            .finish()
    }
}
