//! Command-line boundary for the Faremeter engine.
//!
//! `faremeter optimize <path|->` reads an optimisation request as JSON, ranks
//! the destinations through the Kiwi Tequila adapter, and prints the winner as
//! JSON. Failures are classified by [`CliError::category`] so the binary can
//! pick an exit code and an error payload.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod optimize;

pub use error::{CliError, ErrorReport};
pub use optimize::RequestSource;

use optimize::OptimizeArgs;

const ARG_REQUEST: &str = "request";
const ARG_API_KEY: &str = "api-key";
const ARG_BASE_URL: &str = "base-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ENV_API_KEY: &str = "FAREMETER_API_KEY";
const ENV_LEGACY_API_KEY: &str = "KIWI_API_KEY";
const ENV_REQUEST: &str = "FAREMETER_CMDS_OPTIMIZE_REQUEST_PATH";

/// Path argument that selects standard input as the request source.
pub const STDIN_PATH: &str = "-";

/// Run the Faremeter CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure; see
/// [`CliError::category`] for how it should be reported.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => optimize::run_optimize(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "faremeter",
    about = "Rank destinations by airfare price per kilometre",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the destination with the lowest fare per kilometre.
    Optimize(OptimizeArgs),
}

#[cfg(test)]
mod tests;
