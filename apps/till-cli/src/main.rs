//! # Till Entry Point
//!
//! ## Usage
//! ```bash
//! # Price two baskets against ./catalog.json
//! till ABBACBBAB ABC
//!
//! # Use another catalog and print itemised receipts
//! till --catalog apps/till-cli/catalog.example.json --receipt ABBACBBAB
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Resolve configuration (env, then flags)
//! 3. Hand over to `till_cli::run`

use till_cli::{config::USAGE, CliCommand, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    till_cli::init_tracing();

    let config = match CliConfig::from_env()?.with_args(std::env::args().skip(1))? {
        CliCommand::Checkout(config) => config,
        CliCommand::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let stdout = std::io::stdout();
    till_cli::run(&config, &mut stdout.lock()).await?;

    Ok(())
}
