//! Zeichenflächen-Abstraktion für den Renderer.
//!
//! Der Renderer kennt nur dieses Trait. Die egui-Implementierung liegt in
//! `ui::egui_surface`, die aufzeichnende Variante dient Tests und Benchmarks.

use glam::Vec2;

/// Linienstil: Stärke in Pixeln und Farbe (RGBA, 0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: [f32; 4],
}

impl StrokeStyle {
    pub fn new(width: f32, color: [f32; 4]) -> Self {
        Self { width, color }
    }
}

/// 2D-Rasterfläche, auf die ein Frame gezeichnet wird.
///
/// Koordinaten sind flächenlokal (Ursprung oben links, y nach unten).
pub trait Surface {
    /// Aktuelle Größe der Fläche in Pixeln.
    fn size(&self) -> Vec2;
    /// Füllt die komplette Fläche mit einer Farbe.
    fn fill_background(&mut self, color: [f32; 4]);
    /// Zeichnet einen zusammenhängenden Linienzug.
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle);
    /// Zeichnet ein einzelnes Liniensegment.
    fn line_segment(&mut self, from: Vec2, to: Vec2, stroke: StrokeStyle);
    /// Zeichnet eine gefüllte Kreisscheibe.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        color: [f32; 4],
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: StrokeStyle,
    },
    Segment {
        from: Vec2,
        to: Vec2,
        stroke: StrokeStyle,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Fläche ohne Display, die alle Befehle mitschreibt.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Alle seit dem letzten `take_commands` aufgezeichneten Befehle.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Entnimmt die Aufzeichnung und leert den Puffer.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Ändert die Flächengröße (simuliert ein Fenster-Resize).
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Anzahl der aufgezeichneten Einzelsegmente (Tangenten-Striche).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Segment { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_background(&mut self, color: [f32; 4]) {
        self.commands.push(DrawCommand::Background { color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn line_segment(&mut self, from: Vec2, to: Vec2, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Segment { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
