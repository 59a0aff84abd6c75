use std::{error::Error, str::FromStr};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    prelude::*,
};

// Targets of the rendering and windowing stack, too verbose at debug level.
const FILTERED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "cosmic_text",
    "calloop",
    "sctk",
    "polling",
    "mio",
    "tokio",
];

pub fn setup_logger(log_level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stdout_log = tracing_subscriber::fmt::layer().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !FILTERED_TARGETS
                        .iter()
                        .any(|t| metadata.target().starts_with(t))
                })),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
