//! # CLI Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags
//! 2. Environment variables (`TILL_*`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `TILL_CATALOG`: catalog file path (default `catalog.json`)
//! - `TILL_RECEIPT`: `true` to print JSON receipts instead of totals
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::env;
use std::path::PathBuf;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

pub const USAGE: &str = "\
Till - checkout pricing

Usage: till [OPTIONS] BASKET...

Prices each BASKET (a string of product codes with no separators).

Options:
  -c, --catalog <PATH>   Catalog file (default: catalog.json, env: TILL_CATALOG)
  -r, --receipt          Print an itemised JSON receipt per basket (env: TILL_RECEIPT)
  -h, --help             Show this help message";

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog file path.
    pub catalog_path: PathBuf,

    /// Print receipts instead of bare totals.
    pub receipt: bool,

    /// Scanned code strings to price, in output order.
    pub baskets: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Checkout(CliConfig),
    Help,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            receipt: false,
            baskets: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `TILL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(path) = lookup("TILL_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(receipt) = lookup("TILL_RECEIPT") {
            config.receipt = receipt
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TILL_RECEIPT".to_string()))?;
        }

        Ok(config)
    }

    /// Applies command line arguments (without the program name) on top of
    /// this configuration.
    pub fn with_args<I>(mut self, args: I) -> Result<CliCommand, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut only_baskets = false;

        while let Some(arg) = args.next() {
            if only_baskets {
                self.baskets.push(arg);
                continue;
            }

            match arg.as_str() {
                "--catalog" | "-c" => {
                    let path = args.next().ok_or_else(|| {
                        ConfigError::MissingRequired("--catalog <PATH>".to_string())
                    })?;
                    self.catalog_path = PathBuf::from(path);
                }
                "--receipt" | "-r" => self.receipt = true,
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--" => only_baskets = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ => self.baskets.push(arg),
            }
        }

        Ok(CliCommand::Checkout(self))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn checkout(command: CliCommand) -> CliConfig {
        match command {
            CliCommand::Checkout(config) => config,
            CliCommand::Help => panic!("expected checkout command"),
        }
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
    }

    #[test]
    fn test_env_overrides() {
        let env = HashMap::from([
            ("TILL_CATALOG", "/etc/till/store.json"),
            ("TILL_RECEIPT", "true"),
        ]);
        let config = CliConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/etc/till/store.json"));
        assert!(config.receipt);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = CliConfig::from_lookup(|key| (key == "TILL_RECEIPT").then(|| "yes".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "TILL_RECEIPT"));
    }

    #[test]
    fn test_args_override_env() {
        let base = CliConfig {
            catalog_path: PathBuf::from("from-env.json"),
            ..CliConfig::default()
        };
        let config = checkout(
            base.with_args(args(&["-c", "store.json", "--receipt", "AAB", "ABC"]))
                .unwrap(),
        );
        assert_eq!(config.catalog_path, PathBuf::from("store.json"));
        assert!(config.receipt);
        assert_eq!(config.baskets, ["AAB", "ABC"]);
    }

    #[test]
    fn test_help() {
        let command = CliConfig::default().with_args(args(&["AB", "--help"])).unwrap();
        assert_eq!(command, CliCommand::Help);
    }

    #[test]
    fn test_missing_catalog_value() {
        let err = CliConfig::default().with_args(args(&["--catalog"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_unknown_flag() {
        let err = CliConfig::default().with_args(args(&["--verbose"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFlag(ref flag) if flag == "--verbose"));
    }

    #[test]
    fn test_double_dash_and_empty_basket() {
        let config = checkout(
            CliConfig::default()
                .with_args(args(&["--", "-r", ""]))
                .unwrap(),
        );
        assert!(!config.receipt);
        assert_eq!(config.baskets, ["-r", ""]);
    }
}
