//! Loop-Driver: pro Frame Physik, dann Rendering.
//!
//! Der Driver hat genau einen Zustand ("läuft"). Wann der nächste Frame
//! kommt, entscheidet eine injizierbare [`FrameClock`]; im eframe-Host ist
//! das der Repaint-Zyklus, in Tests eine feste Anzahl Frames.

use super::state::SimulationState;
use crate::core::SpringParams;
use crate::render::{Renderer, Surface};
use crate::shared::DemoOptions;
use glam::Vec2;

/// Antwort der Frame-Clock auf "nächster Frame?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// Einen weiteren Tick ausführen
    Tick,
    /// Schleife beenden
    Cancel,
}

/// Quelle der Frame-Takte.
pub trait FrameClock {
    /// Wartet auf den nächsten Frame und meldet, ob weitergelaufen wird.
    fn next_frame(&mut self) -> FrameSignal;
}

impl<F: FnMut() -> FrameSignal> FrameClock for F {
    fn next_frame(&mut self) -> FrameSignal {
        self()
    }
}

/// Clock mit fester Anzahl Frames, danach `Cancel`.
#[derive(Debug, Clone)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameClock for FixedFrames {
    fn next_frame(&mut self) -> FrameSignal {
        if self.remaining == 0 {
            return FrameSignal::Cancel;
        }
        self.remaining -= 1;
        FrameSignal::Tick
    }
}

/// Besitzt Simulationszustand und Renderer und führt die Frames aus.
pub struct LoopDriver {
    state: SimulationState,
    renderer: Renderer,
    params: SpringParams,
}

impl LoopDriver {
    /// Erstellt den Driver für eine Zeichenfläche der Größe `canvas_size`.
    pub fn new(canvas_size: Vec2, options: &DemoOptions) -> Self {
        log::debug!(
            "LoopDriver startet: Fläche {}x{}, stiffness={}, damping={}, Ziel={:?}",
            canvas_size.x,
            canvas_size.y,
            options.stiffness,
            options.damping,
            options.target_mapping
        );
        Self::with_state(SimulationState::new(canvas_size, options), options)
    }

    /// Erstellt den Driver mit vorgegebenem Zustand.
    pub fn with_state(state: SimulationState, options: &DemoOptions) -> Self {
        Self {
            state,
            renderer: Renderer::new(options),
            params: options.spring_params(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Einziger Schreibzugang zum Zeigerziel.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.state.pointer_moved(x, y);
    }

    /// Ein Frame: Physik für beide Federpunkte, danach kompletter Repaint.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        let size = surface.size();
        if size != self.state.canvas_size() {
            self.state.resize(size);
        }

        self.state.step_physics(self.params);
        self.renderer.render(surface, self.state.points());

        log::trace!(
            "Frame {}: P1={} P2={}",
            self.state.frame(),
            self.state.points().p1().position,
            self.state.points().p2().position
        );
    }

    /// Tickt, bis die Clock `Cancel` meldet. Gibt die Anzahl Ticks zurück.
    pub fn run_until_cancelled(
        &mut self,
        clock: &mut impl FrameClock,
        surface: &mut impl Surface,
    ) -> u64 {
        let mut ticks = 0;
        while clock.next_frame() == FrameSignal::Tick {
            self.tick(surface);
            ticks += 1;
        }
        log::debug!("LoopDriver beendet nach {} Ticks", ticks);
        ticks
    }
}
