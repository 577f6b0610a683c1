//! Integrationstests für Kurve, Federphysik und Frame-Loop über die öffentliche API.

use bezier_spring_demo::core::curve;
use bezier_spring_demo::{
    ControlPoints, DemoOptions, DrawCommand, FixedFrames, FrameSignal, LoopDriver,
    RecordingSurface, SimulationState, SpringParams, SpringPoint, TargetMapping,
};
use glam::Vec2;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

/// Szenario-Layout: P0=(100,300), P1=(300,300), P2=(500,300), P3=(700,300).
fn scenario_points() -> ControlPoints {
    ControlPoints::new(
        Vec2::new(100.0, 300.0),
        Vec2::new(300.0, 300.0),
        Vec2::new(500.0, 300.0),
        Vec2::new(700.0, 300.0),
    )
}

fn scenario_options() -> DemoOptions {
    DemoOptions {
        stiffness: 0.03,
        damping: 0.85,
        ..DemoOptions::default()
    }
}

// ─── Kurve ───────────────────────────────────────────────────────────────────

#[test]
fn test_endpoints_interpolated_exactly_for_arbitrary_points() {
    let sets = [
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 5.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(9.0, 9.0),
        ],
        [
            Vec2::new(-120.5, 33.25),
            Vec2::new(1e4, -1e4),
            Vec2::new(0.125, 7.0),
            Vec2::new(640.0, 360.0),
        ],
    ];
    for [p0, p1, p2, p3] in sets {
        assert_eq!(curve::evaluate(0.0, p0, p1, p2, p3), p0);
        assert_eq!(curve::evaluate(1.0, p0, p1, p2, p3), p3);
    }
}

#[test]
fn test_curve_stays_in_control_bounding_box() {
    let p0 = Vec2::new(100.0, 300.0);
    let p1 = Vec2::new(420.0, -80.0);
    let p2 = Vec2::new(150.0, 650.0);
    let p3 = Vec2::new(700.0, 300.0);
    let min = p0.min(p1).min(p2).min(p3);
    let max = p0.max(p1).max(p2).max(p3);

    for t in curve::sample_parameters(200) {
        let p = curve::evaluate(t, p0, p1, p2, p3);
        assert!(
            p.cmpge(min - Vec2::splat(1e-3)).all() && p.cmple(max + Vec2::splat(1e-3)).all(),
            "t={t}: {p} außerhalb von {min}..{max}"
        );
    }
}

#[test]
fn test_reversed_control_points_give_same_curve() {
    let p0 = Vec2::new(100.0, 300.0);
    let p1 = Vec2::new(420.0, -80.0);
    let p2 = Vec2::new(150.0, 650.0);
    let p3 = Vec2::new(700.0, 300.0);
    for t in curve::sample_parameters(50) {
        let a = curve::evaluate(t, p0, p1, p2, p3);
        let b = curve::evaluate(1.0 - t, p3, p2, p1, p0);
        assert!(a.distance(b) < 1e-3, "t={t}: {a} != {b}");
    }
}

// ─── Physik ──────────────────────────────────────────────────────────────────

#[test]
fn test_spring_converges_within_one_percent() {
    let target = Vec2::new(640.0, 120.0);
    for stiffness in [0.02, 0.04, 0.06, 0.08] {
        let mut point = SpringPoint::at_rest(Vec2::new(100.0, 600.0));
        let initial = point.distance_to(target);
        for _ in 0..1000 {
            point.step(target, SpringParams::new(stiffness, 0.85));
        }
        assert!(point.distance_to(target) < initial * 0.01);
    }
}

#[test]
fn test_scenario_pinned_target_reached_after_500_steps() {
    let target = Vec2::new(400.0, 100.0);
    let options = scenario_options();
    let mut driver = LoopDriver::with_state(
        SimulationState::with_points(scenario_points(), target, CANVAS),
        &options,
    );
    let mut surface = RecordingSurface::new(CANVAS);

    let ticks = driver.run_until_cancelled(&mut FixedFrames::new(500), &mut surface);
    assert_eq!(ticks, 500);

    let points = driver.state().points();
    assert!(points.p1().distance_to(target) < 5.0);
    assert!(points.p2().distance_to(target) < 5.0);
    assert_eq!(points.p0(), Vec2::new(100.0, 300.0));
    assert_eq!(points.p3(), Vec2::new(700.0, 300.0));
}

#[test]
fn test_single_step_bit_identical() {
    let make = || {
        let mut p = SpringPoint::at_rest(Vec2::new(300.0, 300.0));
        p.step(Vec2::new(400.0, 100.0), SpringParams::new(0.03, 0.85));
        p
    };
    let a = make();
    let b = make();
    assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
    assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
    assert_eq!(a.velocity.x.to_bits(), b.velocity.x.to_bits());
    assert_eq!(a.velocity.y.to_bits(), b.velocity.y.to_bits());
}

// ─── Loop + Rendering ────────────────────────────────────────────────────────

#[test]
fn test_degenerate_curve_renders_without_tangents() {
    let p = Vec2::new(400.0, 300.0);
    let options = DemoOptions::default();
    // Zeiger auf dem Punkt → Federpunkte bleiben liegen
    let mut driver = LoopDriver::with_state(
        SimulationState::with_points(ControlPoints::new(p, p, p, p), p, CANVAS),
        &options,
    );
    let mut surface = RecordingSurface::new(CANVAS);
    driver.tick(&mut surface);

    assert_eq!(surface.segment_count(), 0);
    assert!(surface
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Polyline { .. })));
}

#[test]
fn test_pointer_moves_between_ticks_last_write_wins() {
    let options = DemoOptions::default();
    let mut driver = LoopDriver::new(CANVAS, &options);
    let mut surface = RecordingSurface::new(CANVAS);

    driver.pointer_moved(10.0, 10.0);
    driver.pointer_moved(700.0, 50.0);
    driver.tick(&mut surface);

    assert_eq!(driver.state().pointer(), Vec2::new(700.0, 50.0));
    assert_eq!(
        driver.state().targets(),
        (Vec2::new(700.0, 50.0), Vec2::new(700.0, 50.0))
    );
}

#[test]
fn test_mirrored_mapping_bends_points_apart() {
    let options = DemoOptions {
        target_mapping: TargetMapping::Mirrored,
        ..DemoOptions::default()
    };
    let mut driver = LoopDriver::new(CANVAS, &options);
    driver.pointer_moved(250.0, 100.0);
    let mut surface = RecordingSurface::new(CANVAS);
    driver.run_until_cancelled(&mut FixedFrames::new(400), &mut surface);

    let points = driver.state().points();
    assert!(points.p1().distance_to(Vec2::new(250.0, 100.0)) < 1.0);
    assert!(points.p2().distance_to(Vec2::new(550.0, 100.0)) < 1.0);
}

#[test]
fn test_every_tick_fully_repaints() {
    let mut driver = LoopDriver::new(CANVAS, &DemoOptions::default());
    let mut surface = RecordingSurface::new(CANVAS);
    let mut remaining = 3;
    let mut clock = || {
        if remaining == 0 {
            return FrameSignal::Cancel;
        }
        remaining -= 1;
        FrameSignal::Tick
    };
    driver.run_until_cancelled(&mut clock, &mut surface);

    let commands = surface.take_commands();
    let per_frame = commands.len() / 3;
    assert_eq!(commands.len() % 3, 0);
    for frame in commands.chunks(per_frame) {
        assert!(matches!(frame[0], DrawCommand::Background { .. }));
    }
    assert!(surface.commands().is_empty());
}
