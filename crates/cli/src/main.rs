//! modforge
//!
//! Round-trips, compares, verifies and exports Bannerlord game configuration XML.

use anyhow::Context;
use clap::Parser;
use modforge::{
    CliConfig, Command, compare_files, compare_options, export_file, init_logging,
    round_trip_files, verify_directory,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(command = ?config.command, "Starting modforge");

    let success = match &config.command {
        Command::Roundtrip { files, write } => {
            let summary = round_trip_files(files, *write);
            print!("{}", summary);
            summary.is_success()
        }
        Command::Compare {
            expected,
            actual,
            ignore_comments,
            ignore_whitespace,
            strict_attribute_order,
        } => {
            let options =
                compare_options(*ignore_comments, *ignore_whitespace, *strict_attribute_order);
            match compare_files(expected, actual, &options)? {
                None => {
                    println!("equivalent");
                    true
                }
                Some(difference) => {
                    println!("different: {}", difference);
                    false
                }
            }
        }
        Command::Verify { .. } => {
            let dir = config
                .verify_dir()
                .context("no directory to verify")?;
            let summary = verify_directory(&dir, config.jobs).await?;
            print!("{}", summary);
            summary.is_success()
        }
        Command::Export { file, out } => {
            let json = export_file(file, out.as_deref())?;
            if out.is_none() {
                println!("{}", json);
            }
            true
        }
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
