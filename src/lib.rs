//! Bézier Spring Demo Library.
//! Kurvenmathematik, Federphysik und Frame-Loop als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{FixedFrames, FrameClock, FrameSignal, InputTracker, LoopDriver, SimulationState};
pub use core::{ControlPoints, SpringParams, SpringPoint, TargetMapping};
pub use render::{DrawCommand, RecordingSurface, Renderer, StrokeStyle, Surface};
pub use shared::DemoOptions;
