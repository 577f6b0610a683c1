//! Rendering: Frame-Aufbau gegen eine abstrakte Zeichenfläche.

pub mod renderer;
pub mod surface;

pub use renderer::{RenderStyle, Renderer};
pub use surface::{DrawCommand, RecordingSurface, StrokeStyle, Surface};
