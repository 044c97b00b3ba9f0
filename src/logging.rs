// src/logging.rs

use log::info;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system.
/// Call once at startup; later calls are no-ops. `RUST_LOG` overrides the defaults.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("movie_catalog", log::LevelFilter::Debug)
            .filter_module("r2d2", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .init();

        info!("Logging system initialized");
    });
}
