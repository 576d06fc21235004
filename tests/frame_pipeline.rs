//! End-to-end run of the headless pipeline with in-memory configs

use hyperfold::config::{AppConfig, WireShapeKind};
use hyperfold::scene::{FractalScene, Pulse, WireScene};
use hyperfold::systems::{FrameBudget, FrameLoop, SimulationState, SimulationSystem, StopReason};
use hyperfold_fractal::PlacementStrategy;
use hyperfold_math::PlaneSpeeds;

#[test]
fn test_tesseract_animation_runs_to_budget() {
    let config = AppConfig::default();
    let mut wire = WireScene::from_config(&config.projection, &config.animation).unwrap();
    let sim = SimulationSystem::new(config.rotation.speeds.clone());
    let frame_loop = FrameLoop::new(FrameBudget::unlimited().with_max_frames(120), 1.0 / 60.0);

    let mut frames = 0;
    let (state, reason) = frame_loop.run(&sim, SimulationState::default(), |state| {
        let frame = wire.frame(state).unwrap();
        assert!(frame.is_complete());
        for v in frame.line_vertices() {
            assert!(v.position.iter().all(|c| c.is_finite()));
        }
        frames += 1;
    });

    assert_eq!(reason, StopReason::FrameLimit);
    assert_eq!(frames, 120);
    assert!((state.elapsed - 2.0).abs() < 1e-9);
}

#[test]
fn test_nested_tesseract_with_tumble() {
    let mut config = AppConfig::default();
    config.projection.shape = WireShapeKind::NestedTesseract;
    config.rotation.speeds = PlaneSpeeds::tumble_3d();

    let mut wire = WireScene::from_config(&config.projection, &config.animation).unwrap();
    let sim = SimulationSystem::new(config.rotation.speeds.clone());
    let frame_loop = FrameLoop::new(FrameBudget::unlimited().with_max_elapsed(3.0), 0.1);

    let (_, reason) = frame_loop.run(&sim, SimulationState::default(), |state| {
        let frame = wire.frame(state).unwrap();
        assert_eq!(frame.segments.len(), 80);
        // A pure 3D tumble never moves w
        for s in &frame.segments {
            assert!(s.start.w.abs() <= 1.0 + 1e-9);
        }
    });
    assert_eq!(reason, StopReason::TimeLimit);
}

#[test]
fn test_grid_colors_cycle_with_simulation() {
    let mut config = AppConfig::default();
    config.fractal.strategy = PlacementStrategy::Grid { grid_size: 6, spacing: 0.7 };
    config.fractal.base_size = 0.5;
    config.fractal.max_depth = 2;

    let scene = FractalScene::new(config.fractal.clone()).unwrap();
    assert_eq!(scene.tree().len(), 432);

    let sim = SimulationSystem::default().with_color_speed(config.animation.color_speed);
    let state = sim.update(&SimulationState::default(), 1.0 / 60.0);
    let before = scene.cell_styles(&Pulse::default(), 0.0);
    let after = scene.cell_styles(&Pulse::default(), state.color_phase);
    assert_eq!(before.len(), 216);
    assert_ne!(before, after);
}

#[test]
fn test_golden_spiral_scene() {
    let mut config = AppConfig::default();
    config.fractal.strategy = PlacementStrategy::GoldenSpiral;
    config.fractal.max_depth = 6;

    let scene = FractalScene::new(config.fractal).unwrap();
    let tree = scene.tree();
    assert_eq!(tree.len(), 37_449);
    assert_eq!(tree.spiral_path().len(), 6);
    assert_eq!(tree.spiral_curve(200).len(), 201);
}
