//! egui-Zeichenfläche: setzt die Renderer-Befehle auf einen `egui::Painter` um.

use glam::Vec2;

use crate::render::{StrokeStyle, Surface};

/// Zeichenfläche über einem Viewport-Rechteck.
///
/// Renderer-Koordinaten sind rect-lokal und werden hier um `rect.min`
/// verschoben.
pub struct EguiSurface {
    painter: egui::Painter,
    rect: egui::Rect,
}

impl EguiSurface {
    pub fn new(painter: egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.x, self.rect.min.y + p.y)
    }
}

impl Surface for EguiSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn fill_background(&mut self, color: [f32; 4]) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) {
        let screen_points: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter
            .add(egui::Shape::line(screen_points, to_stroke(stroke)));
    }

    fn line_segment(&mut self, from: Vec2, to: Vec2, stroke: StrokeStyle) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], to_stroke(stroke));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}

/// RGBA [0..1] → `Color32`.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

fn to_stroke(stroke: StrokeStyle) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}
