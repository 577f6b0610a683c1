//! Simulationszustand: Kontrollpunkte, Zeigerziel, Zeichenflächengröße.

use super::input::InputTracker;
use crate::core::{ControlPoints, SpringParams, TargetMapping};
use crate::shared::DemoOptions;
use glam::Vec2;

/// Expliziter Zustand der Simulation, gehalten vom [`super::LoopDriver`].
#[derive(Debug, Clone)]
pub struct SimulationState {
    points: ControlPoints,
    input: InputTracker,
    mapping: TargetMapping,
    canvas_size: Vec2,
    /// Anzahl der bisher ausgeführten Ticks
    frame: u64,
}

impl SimulationState {
    /// Startzustand für eine Zeichenfläche: Endpunkte und Federpunkte auf
    /// der Mittellinie, Zeigerziel in der Mitte.
    pub fn new(canvas_size: Vec2, options: &DemoOptions) -> Self {
        Self {
            points: ControlPoints::from_canvas(
                canvas_size,
                options.endpoint_inset,
                options.spring_inset,
            ),
            input: InputTracker::new(canvas_size / 2.0),
            mapping: options.target_mapping,
            canvas_size,
            frame: 0,
        }
    }

    /// Zustand aus expliziten Kontrollpunkten (Tests, Szenarien).
    pub fn with_points(points: ControlPoints, pointer: Vec2, canvas_size: Vec2) -> Self {
        Self {
            points,
            input: InputTracker::new(pointer),
            mapping: TargetMapping::Shared,
            canvas_size,
            frame: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_mapping(&mut self, mapping: TargetMapping) {
        self.mapping = mapping;
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    pub fn pointer(&self) -> Vec2 {
        self.input.position()
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ziele `(P1, P2)` aus aktueller Zeigerposition und Zuordnung.
    pub fn targets(&self) -> (Vec2, Vec2) {
        self.mapping.targets(self.input.position(), self.canvas_size)
    }

    pub(crate) fn pointer_moved(&mut self, x: f32, y: f32) {
        self.input.set_position(x, y);
    }

    pub(crate) fn resize(&mut self, canvas_size: Vec2) {
        self.canvas_size = canvas_size;
    }

    /// Ein Physikschritt für P1 und P2.
    pub(crate) fn step_physics(&mut self, params: SpringParams) {
        let (target_p1, target_p2) = self.targets();
        self.points.step_springs(target_p1, target_p2, params);
        self.frame += 1;
    }
}
