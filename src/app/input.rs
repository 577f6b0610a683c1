//! Input-Tracker: letzte bekannte Zeigerposition als Physik-Ziel.

use glam::Vec2;

/// Hält die aktuelle Zeigerposition in Zeichenflächen-Koordinaten.
///
/// Kein Puffer, keine Event-Queue: der letzte Schreibzugriff gewinnt.
/// Geschrieben wird ausschließlich über [`InputTracker::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct InputTracker {
    position: Vec2,
}

impl InputTracker {
    /// Erstellt einen Tracker mit Startposition (z.B. Mitte der Zeichenfläche).
    pub fn new(initial: Vec2) -> Self {
        Self { position: initial }
    }

    /// Überschreibt beide Koordinaten mit der neuen Zeigerposition.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Aktuelles Ziel für den nächsten Physikschritt.
    pub fn position(&self) -> Vec2 {
        self.position
    }
}
