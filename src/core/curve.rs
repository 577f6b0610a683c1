//! Kubische Bézier-Kurve: Position und Tangente in Bernstein-Form.

use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Gültig für `t` in `[0, 1]`. Alle Aufrufer liefern Werte aus diesem
/// Bereich, daher keine Begrenzung.
pub fn evaluate(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;
    u2 * u * p0 + 3.0 * u2 * t * p1 + 3.0 * u * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1−P0) + 6(1-t)t·(P2−P1) + 3t²·(P3−P2)
pub fn tangent(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Normierte Tangente oder `None` bei entarteter Kurve (Länge 0).
pub fn unit_tangent(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Option<Vec2> {
    let raw = tangent(t, p0, p1, p2, p3);
    let length = raw.length();
    if length == 0.0 {
        return None;
    }
    Some(raw / length)
}

/// Obergrenze der Intervalle pro Abtastung.
pub const MAX_SAMPLE_INTERVALS: usize = 10_000;

/// Anzahl der Intervalle für eine Schrittweite (1 bis [`MAX_SAMPLE_INTERVALS`]).
///
/// `0.01` → 100 Intervalle → 101 Samples inkl. beider Endpunkte.
pub fn sample_count(step: f32) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 1;
    }
    let intervals = (1.0 / step).round();
    if !intervals.is_finite() || intervals >= MAX_SAMPLE_INTERVALS as f32 {
        return MAX_SAMPLE_INTERVALS;
    }
    (intervals as usize).max(1)
}

/// Parameterwerte `t = i / intervals` für `i` in `0..=intervals`.
///
/// Über den Index statt durch Aufaddieren von `step`, damit `t = 1.0`
/// exakt erreicht wird.
pub fn sample_parameters(intervals: usize) -> impl Iterator<Item = f32> {
    let intervals = intervals.max(1);
    (0..=intervals).map(move |i| i as f32 / intervals as f32)
}
