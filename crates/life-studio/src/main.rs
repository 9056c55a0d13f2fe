mod app;
mod config;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use life_engine::device::GpuInit;
use life_engine::logging::{init_logging, LoggingConfig};
use life_engine::render::board::BoardLayout;
use life_engine::sim::Engine;
use life_engine::window::Runtime;

use app::LifeApp;
use config::LifeConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = LifeConfig::default();

    // Validate everything that can be checked without a window first, so a bad
    // configuration aborts before any frame is rendered.
    let layout = BoardLayout::new(config.xrows, config.yrows, config.viewport())
        .context("invalid board configuration")?;
    let mut engine =
        Engine::new(config.xrows, config.yrows).context("invalid simulation configuration")?;

    match config.seed {
        Some(seed) => engine.randomize_with(&mut StdRng::seed_from_u64(seed)),
        None => engine.randomize(),
    }

    let rules: Vec<&str> = engine.rules().iter().map(|r| r.name()).collect();
    log::info!(
        "starting {}x{} board on a {}x{} viewport at {} fps ({} live, rules {})",
        config.xrows,
        config.yrows,
        config.width,
        config.height,
        config.target_fps,
        engine.current_grid().live_count(),
        rules.join("/"),
    );

    let app = LifeApp::new(engine, layout, config.style);
    Runtime::run(config.runtime(), GpuInit::default(), app)
}
