//! hyperfold - headless demo
//!
//! Generates the configured fractal, then animates the configured 4D
//! wireframe until the frame budget runs out, logging what a renderer would
//! draw.

use hyperfold::config::AppConfig;
use hyperfold::scene::{FractalScene, Pulse, WireScene};
use hyperfold::systems::{FrameBudget, FrameLoop, SimulationState, SimulationSystem};
use hyperfold_fractal::PlacementStrategy;

fn main() {
    // Config is read first so its log level can seed the logger
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fractal = FractalScene::new(config.fractal.clone())?;
    let tree = fractal.tree();
    for (depth, count) in tree.count_by_depth() {
        log::debug!("  depth {}: {} nodes", depth, count);
    }
    log::info!("{} leaves", tree.leaves().count());
    if *tree.strategy() == PlacementStrategy::GoldenSpiral {
        let curve = tree.spiral_curve(200);
        log::info!(
            "Golden spiral: {} path nodes, curve of {} points",
            tree.path_node_count(),
            curve.len()
        );
    }

    let mut wire = WireScene::from_config(&config.projection, &config.animation)?;
    let sim = SimulationSystem::new(config.rotation.speeds.clone())
        .with_color_speed(config.animation.color_speed);
    let pulse = Pulse {
        amplitude: config.animation.pulse_amplitude,
        frequency: config.animation.pulse_frequency,
    };

    let frame_loop = FrameLoop::new(
        FrameBudget::from_config(&config.animation),
        config.animation.frame_dt,
    );
    let cancel = frame_loop.cancel_token();
    let stats_interval = config.debug.stats_interval;

    let mut failure = None;
    let mut skipped_edges = 0usize;
    let (state, reason) = frame_loop.run(&sim, SimulationState::default(), |state| {
        let frame = match wire.frame(state) {
            Ok(frame) => frame,
            Err(e) => {
                failure = Some(e);
                cancel.cancel();
                return;
            }
        };
        skipped_edges += frame.skipped_edges;

        if stats_interval > 0 && state.frame % stats_interval == 0 {
            let vertices = frame.line_vertices();
            let styles = fractal.cell_styles(&pulse, state.color_phase);
            log::info!(
                "Frame {} (t={:.2}s): {} segments, {} line vertices, color phase {:.3}",
                state.frame,
                state.elapsed,
                frame.segments.len(),
                vertices.len(),
                state.color_phase
            );
            if let Some((_, style)) = styles.first() {
                log::debug!("  first cell hue {:.3}, glow {:.3}", style.hue, style.emissive);
            }
        }
    });

    if let Some(e) = failure {
        return Err(e.into());
    }

    log::info!(
        "Stopped after {} frames ({:.2}s simulated): {}",
        state.frame,
        state.elapsed,
        reason
    );
    if skipped_edges > 0 {
        log::warn!("{} edges were dropped at the singular plane", skipped_edges);
    }
    Ok(())
}
