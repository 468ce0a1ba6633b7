//! Command line configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MODFORGE_LOG_LEVEL` | info | Log level |
//! | `MODFORGE_DATA_DIR` | | Default directory for `verify` |
//! | `MODFORGE_JOBS` | 4 | Files checked concurrently by `verify` |

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modforge_serde::xml::CompareOptions;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Parser)]
#[command(name = "modforge")]
#[command(about = "Round-trip, compare and export Bannerlord game configuration XML")]
#[command(version)]
pub struct CliConfig {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "MODFORGE_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Module data directory used when `verify` is given no directory.
    #[arg(long, env = "MODFORGE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Number of files `verify` checks at the same time.
    #[arg(long, env = "MODFORGE_JOBS", default_value = "4", global = true)]
    pub jobs: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load and save each file, then compare the result with the original.
    Roundtrip {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the saved output back over files that round-trip cleanly.
        #[arg(long)]
        write: bool,
    },

    /// Compare two XML documents structurally.
    Compare {
        expected: PathBuf,
        actual: PathBuf,

        #[arg(long)]
        ignore_comments: bool,

        #[arg(long)]
        ignore_whitespace: bool,

        /// Require attributes to appear in the same order.
        #[arg(long)]
        strict_attribute_order: bool,
    },

    /// Round-trip every supported file in a directory.
    Verify { dir: Option<PathBuf> },

    /// Convert a file to its JSON transfer form.
    Export {
        file: PathBuf,

        /// Output path; standard output when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl CliConfig {
    /// Validates the configuration, returning all problems found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.jobs == 0 {
            errors.push("Jobs cannot be 0".to_string());
        }

        if let Command::Verify { dir: None } = &self.command
            && self.data_dir.is_none()
        {
            errors.push("verify needs a directory argument or MODFORGE_DATA_DIR".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Directory for `verify`: the argument, else the configured data directory.
    pub fn verify_dir(&self) -> Option<PathBuf> {
        match &self.command {
            Command::Verify { dir: Some(dir) } => Some(dir.clone()),
            Command::Verify { dir: None } => self.data_dir.clone(),
            _ => None,
        }
    }
}

/// Builds oracle options from the `compare` flags.
pub fn compare_options(
    ignore_comments: bool,
    ignore_whitespace: bool,
    strict_attribute_order: bool,
) -> CompareOptions {
    CompareOptions {
        ignore_comments,
        ignore_whitespace,
        ignore_attribute_order: !strict_attribute_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_roundtrip() {
        let config = parse(&["modforge", "roundtrip", "a.xml", "b.xml", "--write"]);
        match config.command {
            Command::Roundtrip { files, write } => {
                assert_eq!(files.len(), 2);
                assert!(write);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(config.log_level, "info");
        assert_eq!(config.jobs, 4);
    }

    #[test]
    fn test_roundtrip_requires_files() {
        assert!(CliConfig::try_parse_from(["modforge", "roundtrip"]).is_err());
    }

    #[test]
    fn test_compare_flags() {
        let config = parse(&[
            "modforge",
            "compare",
            "a.xml",
            "b.xml",
            "--ignore-comments",
            "--strict-attribute-order",
        ]);
        let Command::Compare {
            ignore_comments,
            ignore_whitespace,
            strict_attribute_order,
            ..
        } = config.command
        else {
            panic!("expected compare");
        };
        let options = compare_options(ignore_comments, ignore_whitespace, strict_attribute_order);
        assert!(options.ignore_comments);
        assert!(!options.ignore_whitespace);
        assert!(!options.ignore_attribute_order);
    }

    #[test]
    fn test_default_compare_options_match_oracle_defaults() {
        assert_eq!(compare_options(false, false, false), CompareOptions::default());
    }

    #[test]
    fn test_validate_valid() {
        let config = parse(&["modforge", "verify", "ModuleData"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.verify_dir(), Some(PathBuf::from("ModuleData")));
    }

    #[test]
    fn test_validate_verify_without_directory() {
        let mut config = parse(&["modforge", "verify"]);
        config.data_dir = None;
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("MODFORGE_DATA_DIR")));

        config.data_dir = Some(PathBuf::from("data"));
        assert!(config.validate().is_ok());
        assert_eq!(config.verify_dir(), Some(PathBuf::from("data")));
    }

    #[test]
    fn test_validate_invalid_values() {
        let mut config = parse(&["modforge", "export", "skills.xml"]);
        config.log_level = "loud".to_string();
        config.jobs = 0;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("Log level")));
        assert!(errors.iter().any(|e| e.contains("Jobs")));
    }
}
