use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lines3d::{LinesApp, Scene, SceneConfig, WindowConfig};
use lines3d_engine::device::GpuInit;
use lines3d_engine::logging::{init_logging, LoggingConfig};
use lines3d_engine::window::Runtime;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = SceneConfig::default();
    config.validate().context("invalid scene configuration")?;
    let window = WindowConfig::default();

    let scene = Scene::generate(&config, &mut StdRng::from_os_rng());

    // Printed before the window opens.
    scene
        .describe(&mut io::stdout().lock())
        .context("failed to write scene description")?;

    let runtime_config = window.runtime_config(&config);
    Runtime::run(runtime_config, GpuInit::default(), LinesApp::new(config, scene))
}
