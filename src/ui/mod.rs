//! UI-Anbindung an egui: Zeichenfläche und Zeiger-Input.

pub mod egui_surface;
pub mod input;

pub use egui_surface::EguiSurface;
pub use input::collect_pointer_moves;
