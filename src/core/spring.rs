//! Feder-Dämpfer-Modell für die beweglichen Kontrollpunkte.

use glam::Vec2;

/// Federkonstante und Dämpfung eines Integrationsschritts.
///
/// Stabil für `0 < damping < 1` und kleine `stiffness` (bezogen auf einen
/// Schritt pro Frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Rückstellbeschleunigung pro Pixel Abstand zum Ziel
    pub stiffness: f32,
    /// Faktor, mit dem die Geschwindigkeit pro Schritt multipliziert wird
    pub damping: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }
}

/// Kontrollpunkt, dessen Position über die Federphysik gesteuert wird.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringPoint {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl SpringPoint {
    /// Erstellt einen ruhenden Punkt.
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Ein expliziter Euler-Schritt Richtung `target`.
    ///
    /// Dämpfung wird nach der Beschleunigung angewendet:
    /// `v = (v + k·(target − x)) · d`, danach `x += v`.
    /// Keine Begrenzung von Geschwindigkeit oder Position.
    pub fn step(&mut self, target: Vec2, params: SpringParams) {
        let acceleration = params.stiffness * (target - self.position);
        self.velocity = (self.velocity + acceleration) * params.damping;
        self.position += self.velocity;
    }

    /// Abstand zum Ziel (für Tests und Logging).
    pub fn distance_to(&self, target: Vec2) -> f32 {
        self.position.distance(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_pulls_towards_target() {
        let mut point = SpringPoint::at_rest(Vec2::new(0.0, 0.0));
        point.step(Vec2::new(100.0, -50.0), SpringParams::new(0.1, 0.5));
        // a = (10, -5), v = (5, -2.5)
        assert_relative_eq!(point.velocity.x, 5.0);
        assert_relative_eq!(point.velocity.y, -2.5);
        assert_relative_eq!(point.position.x, 5.0);
        assert_relative_eq!(point.position.y, -2.5);
    }

    #[test]
    fn test_step_at_target_at_rest_stays() {
        let target = Vec2::new(12.0, 34.0);
        let mut point = SpringPoint::at_rest(target);
        point.step(target, SpringParams::new(0.08, 0.85));
        assert_eq!(point.position, target);
        assert_eq!(point.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_step_is_deterministic() {
        let start = SpringPoint {
            position: Vec2::new(313.7, 281.1),
            velocity: Vec2::new(-2.25, 0.75),
        };
        let target = Vec2::new(400.0, 100.0);
        let params = SpringParams::new(0.03, 0.85);

        let mut a = start;
        let mut b = start;
        a.step(target, params);
        b.step(target, params);

        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        assert_eq!(a.velocity.x.to_bits(), b.velocity.x.to_bits());
        assert_eq!(a.velocity.y.to_bits(), b.velocity.y.to_bits());
    }

    #[test]
    fn test_converges_for_representative_params() {
        let target = Vec2::new(400.0, 100.0);
        for stiffness in [0.02, 0.03, 0.05, 0.08] {
            let mut point = SpringPoint::at_rest(Vec2::new(100.0, 300.0));
            let initial = point.distance_to(target);
            let params = SpringParams::new(stiffness, 0.85);
            for _ in 0..1000 {
                point.step(target, params);
            }
            let remaining = point.distance_to(target);
            assert!(
                remaining < initial * 0.01,
                "stiffness {stiffness}: Restabstand {remaining:.4} von {initial:.1}"
            );
        }
    }

    #[test]
    fn test_no_oscillation_growth() {
        let target = Vec2::ZERO;
        let mut point = SpringPoint::at_rest(Vec2::new(500.0, 0.0));
        let params = SpringParams::new(0.08, 0.85);
        let mut peak = f32::MAX;
        // Maximaler Ausschlag je 50er-Fenster muss monoton fallen
        for _ in 0..10 {
            let mut window_peak = 0.0f32;
            for _ in 0..50 {
                point.step(target, params);
                window_peak = window_peak.max(point.distance_to(target));
            }
            assert!(window_peak <= peak, "{window_peak} > {peak}");
            peak = window_peak;
        }
    }
}
