//! Bézier Spring Demo.
//!
//! Kubische Bézier-Kurve, deren innere Kontrollpunkte dem Mauszeiger
//! über ein Feder-Dämpfer-Modell folgen.

use bezier_spring_demo::{ui, DemoOptions, LoopDriver};
use eframe::egui;
use glam::Vec2;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier Spring Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = Self::load_options();

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bézier Spring Demo"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Spring Demo",
            native_options,
            Box::new(|cc| {
                // Ohne Zeichenfläche kein Loop
                cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("wgpu nicht verfügbar: keine Zeichenfläche für die Demo")
                })?;
                Ok(Box::new(DemoApp::new(options)))
            }),
        )
    }

    /// Optionen aus TOML laden; beim ersten Start Standardwerte ablegen.
    fn load_options() -> DemoOptions {
        let config_path = DemoOptions::config_path();
        let options = DemoOptions::load_from_file(&config_path);

        if !config_path.exists() {
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }
        if !options.spring_is_stable() {
            log::warn!(
                "Federparameter außerhalb des stabilen Bereichs (stiffness={}, damping={})",
                options.stiffness,
                options.damping
            );
        }
        options
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    options: DemoOptions,
    /// Wird im ersten Frame mit bekannter Viewport-Größe erzeugt
    driver: Option<LoopDriver>,
}

impl DemoApp {
    fn new(options: DemoOptions) -> Self {
        Self {
            options,
            driver: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }

                let driver = self.driver.get_or_insert_with(|| {
                    LoopDriver::new(Vec2::new(rect.width(), rect.height()), &self.options)
                });

                for pos in ui::collect_pointer_moves(ui, rect) {
                    driver.pointer_moved(pos.x, pos.y);
                }

                let mut surface = ui::EguiSurface::new(ui.painter_at(rect), rect);
                driver.tick(&mut surface);
            });

        // Nächsten Frame anfordern
        ctx.request_repaint();
    }
}
