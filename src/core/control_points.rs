//! Die vier Kontrollpunkte der Kurve: zwei feste Endpunkte, zwei Federpunkte.

use super::curve;
use super::spring::{SpringParams, SpringPoint};
use glam::Vec2;

/// Geordnetes Quadrupel (P0, P1, P2, P3).
///
/// P0 und P3 werden einmalig gesetzt und sind danach nur lesbar.
/// P1 und P2 ändern sich ausschließlich über [`ControlPoints::step_springs`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    p0: Vec2,
    p1: SpringPoint,
    p2: SpringPoint,
    p3: Vec2,
}

impl ControlPoints {
    /// Erstellt die Punkte mit ruhenden Federpunkten.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            p0,
            p1: SpringPoint::at_rest(p1),
            p2: SpringPoint::at_rest(p2),
            p3,
        }
    }

    /// Startlayout für eine Zeichenfläche der Größe `canvas_size`.
    ///
    /// Alle Punkte liegen auf der horizontalen Mittellinie; Endpunkte um
    /// `endpoint_inset`, Federpunkte um `spring_inset` vom Rand eingerückt.
    pub fn from_canvas(canvas_size: Vec2, endpoint_inset: f32, spring_inset: f32) -> Self {
        let mid_y = canvas_size.y / 2.0;
        Self::new(
            Vec2::new(endpoint_inset, mid_y),
            Vec2::new(spring_inset, mid_y),
            Vec2::new(canvas_size.x - spring_inset, mid_y),
            Vec2::new(canvas_size.x - endpoint_inset, mid_y),
        )
    }

    pub fn p0(&self) -> Vec2 {
        self.p0
    }

    pub fn p1(&self) -> &SpringPoint {
        &self.p1
    }

    pub fn p2(&self) -> &SpringPoint {
        &self.p2
    }

    pub fn p3(&self) -> Vec2 {
        self.p3
    }

    /// Positionen als Array `[P0, P1, P2, P3]`.
    pub fn positions(&self) -> [Vec2; 4] {
        [self.p0, self.p1.position, self.p2.position, self.p3]
    }

    /// Ein Physikschritt für beide Federpunkte, jeweils mit eigenem Ziel.
    pub fn step_springs(&mut self, target_p1: Vec2, target_p2: Vec2, params: SpringParams) {
        self.p1.step(target_p1, params);
        self.p2.step(target_p2, params);
    }

    /// Kurvenposition bei `t`.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.positions();
        curve::evaluate(t, p0, p1, p2, p3)
    }

    /// Normierte Tangente bei `t` (`None` bei entarteter Kurve).
    pub fn unit_tangent(&self, t: f32) -> Option<Vec2> {
        let [p0, p1, p2, p3] = self.positions();
        curve::unit_tangent(t, p0, p1, p2, p3)
    }
}
