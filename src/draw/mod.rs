//! Scene model and Cairo rendering.
//!
//! This module defines the core drawing types of the whiteboard:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`Element`]: the drawn primitives (strokes, shapes, text)
//! - [`Scene`]: committed elements, the in-progress element and selection
//! - [`Surface`]: the raster target the editor renders into
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod element;
pub mod font;
pub mod render;
pub mod scene;
pub mod surface;

pub use color::Color;
pub use element::{Element, StrokeStyle};
pub use font::FontDescriptor;
pub use render::{RenderStyle, render_element, render_scene};
pub use scene::Scene;
pub use surface::{Surface, SurfaceError};
