//! # Till CLI Library
//!
//! Everything behind the `till` binary. `main.rs` only parses configuration
//! and calls [`run`]; the rest lives here so it can be tested.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs           ◄─── You are here (logging setup & run)
//! ├── config.rs        ◄─── Env + flag configuration
//! ├── catalog_file.rs  ◄─── JSON catalog → till_core::Catalog
//! ├── state.rs         ◄─── Shared RwLock catalog, concurrent checkouts
//! └── error.rs         ◄─── AppError
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging (stderr, RUST_LOG override)                      │
//! │  2. Resolve CliConfig (defaults → TILL_* env → flags)                   │
//! │  3. Load catalog file & build Catalog (invariants enforced)             │
//! │  4. Price baskets concurrently against the shared catalog               │
//! │  5. Print one line (total) or one JSON receipt per basket, in order     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog_file;
pub mod config;
pub mod error;
pub mod state;

use std::io::Write;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use catalog_file::CatalogFile;
pub use config::{CliCommand, CliConfig, ConfigError};
pub use error::{AppError, AppResult};
pub use state::{BasketOutcome, CatalogState};

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only checkout results.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till_cli=trace` - Trace for this crate only
/// - Default: INFO, DEBUG for till_cli
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,till_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configured catalog and prices every basket, writing results to
/// `out`.
pub async fn run<W: Write>(config: &CliConfig, out: &mut W) -> AppResult<()> {
    info!(
        catalog = %config.catalog_path.display(),
        baskets = config.baskets.len(),
        "Starting checkout"
    );

    let catalog = CatalogFile::load(&config.catalog_path)?.into_catalog()?;
    let state = CatalogState::new(catalog);

    price_baskets(&state, config, out).await
}

/// Prices the configured baskets against `state`.
///
/// Results are written in basket order. The first basket that fails stops
/// the output and its error is returned.
pub async fn price_baskets<W: Write>(
    state: &CatalogState,
    config: &CliConfig,
    out: &mut W,
) -> AppResult<()> {
    let outcomes = state.checkout_all(config.baskets.clone()).await?;

    for BasketOutcome { basket, result } in outcomes {
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(basket = %basket, error = %e, "Checkout failed");
                return Err(e.into());
            }
        };

        if config.receipt {
            let line = serde_json::to_string(&receipt).map_err(std::io::Error::from)?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}\t{}", basket, receipt.total)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::CoreError;

    fn example_state() -> CatalogState {
        let catalog = CatalogFile::parse(include_str!("../catalog.example.json"))
            .unwrap()
            .into_catalog()
            .unwrap();
        CatalogState::new(catalog)
    }

    fn config(baskets: &[&str], receipt: bool) -> CliConfig {
        CliConfig {
            baskets: baskets.iter().map(|b| b.to_string()).collect(),
            receipt,
            ..CliConfig::default()
        }
    }

    #[tokio::test]
    async fn test_prints_totals_in_order() {
        let state = example_state();
        let mut out = Vec::new();

        price_baskets(&state, &config(&["ABBACBBAB", "C", ""], false), &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "ABBACBBAB\t250\nC\t30\n\t0\n");
    }

    #[tokio::test]
    async fn test_prints_json_receipts() {
        let state = example_state();
        let mut out = Vec::new();

        price_baskets(&state, &config(&["ABBACBBAB"], true), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let receipt: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(receipt["total"], 250);
        assert_eq!(receipt["deals"][0]["applications"], 1);
        assert_eq!(receipt["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let state = example_state();
        let mut out = Vec::new();

        let err = price_baskets(&state, &config(&["A", "ABBACBDBAB", "B"], false), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Core(CoreError::UnknownItem { ref remaining }) if remaining == "DBAB"
        ));
        assert_eq!(String::from_utf8(out).unwrap(), "A\t20\n");
    }

    #[tokio::test]
    async fn test_run_reports_missing_catalog() {
        let config = CliConfig {
            catalog_path: "/nonexistent/till/catalog.json".into(),
            ..config(&["A"], false)
        };
        let err = run(&config, &mut Vec::<u8>::new()).await.unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }
}
