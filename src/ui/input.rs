//! Viewport-Input: Zeigerbewegungen aus egui in Zeichenflächen-Koordinaten.

use glam::Vec2;

/// Sammelt alle `PointerMoved`-Events dieses Frames, rect-lokal.
///
/// Reihenfolge bleibt erhalten, damit beim Weiterreichen an den
/// Input-Tracker die letzte Bewegung gewinnt.
pub fn collect_pointer_moves(ui: &egui::Ui, rect: egui::Rect) -> Vec<Vec2> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(to_canvas(*pos, rect)),
                _ => None,
            })
            .collect()
    })
}

/// Screen-Position → rect-lokale Position.
pub fn to_canvas(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}
