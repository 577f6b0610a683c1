//! Application-Layer: Input, Simulationszustand und Loop-Driver.

pub mod driver;
pub mod input;
pub mod state;

pub use driver::{FixedFrames, FrameClock, FrameSignal, LoopDriver};
pub use input::InputTracker;
pub use state::SimulationState;
