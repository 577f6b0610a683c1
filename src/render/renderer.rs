//! Frame-Renderer: Hintergrund, Kurve, Tangenten-Striche, Kontrollpunkt-Marker.

use super::surface::{StrokeStyle, Surface};
use crate::core::{curve, ControlPoints};
use crate::shared::DemoOptions;
use glam::Vec2;

/// Zeichenrelevanter Ausschnitt der [`DemoOptions`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub show_tangents: bool,
    pub tangent_length_px: f32,
    pub curve: StrokeStyle,
    pub tangent: StrokeStyle,
    pub marker_radius_px: f32,
    pub background_color: [f32; 4],
    pub endpoint_color: [f32; 4],
    pub spring_point_color: [f32; 4],
}

impl RenderStyle {
    pub fn from_options(options: &DemoOptions) -> Self {
        Self {
            show_tangents: options.show_tangents,
            tangent_length_px: options.tangent_length_px,
            curve: StrokeStyle::new(options.curve_width_px, options.curve_color),
            tangent: StrokeStyle::new(options.tangent_width_px, options.tangent_color),
            marker_radius_px: options.marker_radius_px,
            background_color: options.background_color,
            endpoint_color: options.endpoint_color,
            spring_point_color: options.spring_point_color,
        }
    }
}

/// Zeichnet einen kompletten Frame auf eine [`Surface`].
///
/// Jeder Aufruf von [`Renderer::render`] übermalt die ganze Fläche,
/// es gibt kein inkrementelles Neuzeichnen.
pub struct Renderer {
    style: RenderStyle,
    curve_intervals: usize,
    tangent_intervals: usize,
    /// Wiederverwendeter Puffer für die Kurven-Samples
    curve_samples: Vec<Vec2>,
}

impl Renderer {
    pub fn new(options: &DemoOptions) -> Self {
        let curve_intervals = curve::sample_count(options.curve_step);
        Self {
            style: RenderStyle::from_options(options),
            curve_intervals,
            tangent_intervals: curve::sample_count(options.tangent_step),
            curve_samples: Vec::with_capacity(curve_intervals + 1),
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Zeichnet einen Frame: clear → Kurve → Tangenten → vier Marker.
    pub fn render(&mut self, surface: &mut impl Surface, points: &ControlPoints) {
        self.clear(surface);
        self.draw_curve(surface, points);
        if self.style.show_tangents {
            self.draw_tangents(surface, points);
        }

        let [p0, p1, p2, p3] = points.positions();
        self.draw_marker(surface, p0, self.style.endpoint_color);
        self.draw_marker(surface, p1, self.style.spring_point_color);
        self.draw_marker(surface, p2, self.style.spring_point_color);
        self.draw_marker(surface, p3, self.style.endpoint_color);
    }

    /// Füllt die gesamte Fläche mit der Hintergrundfarbe.
    pub fn clear(&self, surface: &mut impl Surface) {
        surface.fill_background(self.style.background_color);
    }

    /// Tastet die Kurve ab und zeichnet sie als ein Linienzug.
    pub fn draw_curve(&mut self, surface: &mut impl Surface, points: &ControlPoints) {
        self.curve_samples.clear();
        self.curve_samples
            .extend(curve::sample_parameters(self.curve_intervals).map(|t| points.evaluate(t)));

        surface.stroke_polyline(&self.curve_samples, self.style.curve);
    }

    /// Kurze Striche entlang der normierten Tangente.
    ///
    /// Samples mit entarteter Tangente (Länge 0) werden übersprungen.
    pub fn draw_tangents(&self, surface: &mut impl Surface, points: &ControlPoints) {
        let stroke = self.style.tangent;
        for t in curve::sample_parameters(self.tangent_intervals) {
            let Some(direction) = points.unit_tangent(t) else {
                log::trace!("Tangente bei t={t:.2} entartet, übersprungen");
                continue;
            };
            let origin = points.evaluate(t);
            surface.line_segment(
                origin,
                origin + direction * self.style.tangent_length_px,
                stroke,
            );
        }
    }

    /// Gefüllte Kreisscheibe an einem Kontrollpunkt.
    pub fn draw_marker(&self, surface: &mut impl Surface, point: Vec2, color: [f32; 4]) {
        surface.fill_circle(point, self.style.marker_radius_px, color);
    }
}
