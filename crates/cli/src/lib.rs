//! Library side of the `modforge` command line tool.
//!
//! The binary parses a [`CliConfig`], initializes logging and hands the selected
//! command to one of the functions in [`commands`].

pub mod commands;
pub mod config;
pub mod schemas;

pub use commands::{
    FileReport, VerifySummary, check_file, compare_files, export_file, round_trip_files,
    verify_directory,
};
pub use config::{CliConfig, Command, compare_options};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set. Logs go to standard error so that
/// command output on standard output stays machine readable.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "modforge={level},modforge_serde={level},modforge_model={level},modforge_xml_mapping={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
