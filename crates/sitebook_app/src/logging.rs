//! Terminal logging initialization for the sitebook CLI.
//!
//! `TerminalMode::Mixed` routes warnings and errors to stderr, so per-file
//! conversion diagnostics stay out of any piped stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(
        LevelFilter::Info,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
