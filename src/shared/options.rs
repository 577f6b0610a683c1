//! Zentrale Konfiguration der Demo.
//!
//! `DemoOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{SpringParams, TargetMapping};
use serde::{Deserialize, Serialize};

// ── Physik ──────────────────────────────────────────────────────────

/// Federkonstante der beweglichen Kontrollpunkte.
pub const SPRING_STIFFNESS: f32 = 0.08;
/// Geschwindigkeits-Dämpfung pro Schritt (0 < d < 1).
pub const SPRING_DAMPING: f32 = 0.85;

// ── Layout ──────────────────────────────────────────────────────────

/// Abstand der festen Endpunkte vom linken/rechten Rand in Pixeln.
pub const ENDPOINT_INSET: f32 = 100.0;
/// Startabstand der Federpunkte vom linken/rechten Rand in Pixeln.
pub const SPRING_INSET: f32 = 300.0;

// ── Abtastung ───────────────────────────────────────────────────────

/// Parameter-Schrittweite für die Kurven-Polylinie (101 Samples).
pub const CURVE_STEP: f32 = 0.01;
/// Parameter-Schrittweite für die Tangenten-Striche (11 Samples).
pub const TANGENT_STEP: f32 = 0.1;
/// Kleinste zulässige Schrittweite (10 000 Intervalle).
pub const MIN_SAMPLE_STEP: f32 = 1e-4;
/// Größte zulässige Schrittweite (nur die beiden Endpunkte).
pub const MAX_SAMPLE_STEP: f32 = 1.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Länge eines Tangenten-Strichs in Pixeln.
pub const TANGENT_LENGTH_PX: f32 = 25.0;
/// Linienstärke der Kurve.
pub const CURVE_WIDTH_PX: f32 = 2.0;
/// Linienstärke der Tangenten-Striche.
pub const TANGENT_WIDTH_PX: f32 = 1.0;
/// Radius der Kontrollpunkt-Marker.
pub const MARKER_RADIUS_PX: f32 = 5.0;
/// Hintergrundfarbe (RGBA: #111111).
pub const BACKGROUND_COLOR: [f32; 4] = [0.067, 0.067, 0.067, 1.0];
/// Kurvenfarbe (RGBA: Weiß).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Tangentenfarbe (RGBA: Rot).
pub const TANGENT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der festen Endpunkte (RGBA: Blau).
pub const ENDPOINT_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe der Federpunkte (RGBA: Grün).
pub const SPRING_POINT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Demo-Optionen.
/// Wird als `bezier_spring_demo.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoOptions {
    // ── Physik ──────────────────────────────────────────────────
    /// Federkonstante
    pub stiffness: f32,
    /// Dämpfung pro Schritt
    pub damping: f32,

    // ── Layout ──────────────────────────────────────────────────
    /// Randabstand der Endpunkte P0/P3
    pub endpoint_inset: f32,
    /// Randabstand der Federpunkte P1/P2 beim Start
    pub spring_inset: f32,

    // ── Abtastung ───────────────────────────────────────────────
    /// Schrittweite der Kurven-Polylinie
    pub curve_step: f32,
    /// Schrittweite der Tangenten-Striche
    pub tangent_step: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Tangenten-Striche zeichnen
    #[serde(default = "default_show_tangents")]
    pub show_tangents: bool,
    /// Länge eines Tangenten-Strichs in Pixeln
    pub tangent_length_px: f32,
    /// Linienstärke der Kurve
    pub curve_width_px: f32,
    /// Linienstärke der Tangenten
    #[serde(default = "default_tangent_width_px")]
    pub tangent_width_px: f32,
    /// Radius der Marker
    pub marker_radius_px: f32,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Kurvenfarbe
    pub curve_color: [f32; 4],
    /// Tangentenfarbe
    pub tangent_color: [f32; 4],
    /// Farbe von P0/P3
    pub endpoint_color: [f32; 4],
    /// Farbe von P1/P2
    pub spring_point_color: [f32; 4],

    // ── Zielzuordnung ───────────────────────────────────────────
    // Als Tabelle serialisiert, daher am Ende der Struct.
    /// Zuordnung Zeiger → Ziele von P1/P2
    #[serde(default)]
    pub target_mapping: TargetMapping,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,

            endpoint_inset: ENDPOINT_INSET,
            spring_inset: SPRING_INSET,

            curve_step: CURVE_STEP,
            tangent_step: TANGENT_STEP,

            show_tangents: true,
            tangent_length_px: TANGENT_LENGTH_PX,
            curve_width_px: CURVE_WIDTH_PX,
            tangent_width_px: TANGENT_WIDTH_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            tangent_color: TANGENT_COLOR,
            endpoint_color: ENDPOINT_COLOR,
            spring_point_color: SPRING_POINT_COLOR,

            target_mapping: TargetMapping::Shared,
        }
    }
}

/// Serde-Default für `show_tangents` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_tangents() -> bool {
    true
}

/// Serde-Default für `tangent_width_px`.
fn default_tangent_width_px() -> f32 {
    TANGENT_WIDTH_PX
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(mut opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitize(&mut opts);
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt Schrittweiten außerhalb von `[MIN_SAMPLE_STEP, MAX_SAMPLE_STEP]`
    /// durch die Standardwerte.
    fn sanitize(opts: &mut Self) {
        if !Self::step_in_range(opts.curve_step) {
            log::warn!(
                "curve_step {} ungültig, verwende Standardwert {}",
                opts.curve_step,
                CURVE_STEP
            );
            opts.curve_step = CURVE_STEP;
        }
        if !Self::step_in_range(opts.tangent_step) {
            log::warn!(
                "tangent_step {} ungültig, verwende Standardwert {}",
                opts.tangent_step,
                TANGENT_STEP
            );
            opts.tangent_step = TANGENT_STEP;
        }
    }

    fn step_in_range(step: f32) -> bool {
        (MIN_SAMPLE_STEP..=MAX_SAMPLE_STEP).contains(&step)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier-spring-demo"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_spring_demo.toml")
    }

    /// Physik-Parameter für einen Integrationsschritt.
    pub fn spring_params(&self) -> SpringParams {
        SpringParams::new(self.stiffness, self.damping)
    }

    /// Gibt zurück, ob die Federparameter im stabilen Bereich liegen.
    ///
    /// Außerhalb davon schwingt das System auf; es wird trotzdem
    /// gerechnet, der Host loggt nur eine Warnung.
    pub fn spring_is_stable(&self) -> bool {
        self.stiffness > 0.0 && self.damping > 0.0 && self.damping < 1.0
    }
}
