//! Zuordnung Zeiger → Federziele für P1 und P2.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Legt fest, welchem Ziel jeder der beiden Federpunkte folgt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TargetMapping {
    /// Beide Punkte folgen direkt dem Zeiger
    #[default]
    Shared,
    /// Jeder Punkt folgt dem Zeiger plus festem Versatz
    Offset { p1: Vec2, p2: Vec2 },
    /// P1 folgt dem Zeiger, P2 dem an der vertikalen Mittellinie gespiegelten Zeiger
    Mirrored,
}

impl TargetMapping {
    /// Ziele `(P1, P2)` für die aktuelle Zeigerposition.
    pub fn targets(&self, pointer: Vec2, canvas_size: Vec2) -> (Vec2, Vec2) {
        match *self {
            TargetMapping::Shared => (pointer, pointer),
            TargetMapping::Offset { p1, p2 } => (pointer + p1, pointer + p2),
            TargetMapping::Mirrored => (pointer, Vec2::new(canvas_size.x - pointer.x, pointer.y)),
        }
    }
}
