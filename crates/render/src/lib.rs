//! Raster rendering for panelray surfaces.
//!
//! The surface's visual appearance lives in a CPU-side RGBA8 raster
//! target. [`SurfaceRenderer`] repaints it from an element snapshot and
//! the per-hand pointer states; [`gpu`] re-uploads it to a wgpu texture
//! when (and only when) a repaint occurred.

pub mod gpu;
pub mod painter;
pub mod raster;

pub use gpu::SurfaceTexture;
pub use painter::{CursorStyle, SurfaceRenderer};
pub use raster::RasterTarget;
