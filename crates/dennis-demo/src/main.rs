mod app;
mod config;

use dennis_engine::device::GpuInit;
use dennis_engine::logging::{init_logging, LoggingConfig};
use dennis_engine::text::GlyphAtlas;
use dennis_engine::window::{Runtime, RuntimeConfig};

use crate::app::DemoApp;
use crate::config::DemoConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();

    let atlas = match GlyphAtlas::load(&config.atlas_path) {
        Ok(atlas) => Some(atlas),
        Err(e) => {
            log::error!("{e}; text will not be drawn");
            None
        }
    };

    let app = DemoApp::new(config, atlas);

    if let Err(e) = Runtime::run(RuntimeConfig::default(), GpuInit::default(), app) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
