//! Core-Mathematik: Bézier-Auswertung, Federphysik, Kontrollpunkte.

pub mod control_points;
pub mod curve;
pub mod spring;
pub mod target;

pub use control_points::ControlPoints;
pub use spring::{SpringParams, SpringPoint};
pub use target::TargetMapping;
