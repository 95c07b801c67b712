mod app;
mod painter;
mod settings;

use anyhow::{Context, Result};
use clock_engine::device::GpuInit;
use clock_engine::logging::{init_logging, LoggingConfig};
use clock_engine::window::Runtime;
use clock_fractal::ClockFractalRenderer;

use app::ClockApp;
use settings::Settings;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let settings = Settings::from_env()?;
    let config = settings.clock_config()?;
    log::info!(
        "fractal clock starting: depth {}, {:?}",
        config.max_fractal_depth,
        settings.mode
    );

    let clock = ClockFractalRenderer::new(config).context("failed to build the clock renderer")?;
    let font = settings.load_font()?;
    let app = ClockApp::new(clock, &font)?;

    Runtime::run(settings.runtime_config(), GpuInit::default(), app)
}
