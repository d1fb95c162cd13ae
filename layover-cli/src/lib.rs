//! Command-line interface for planning airport layovers.
//!
//! `layover plan` loads a terminal document, resolves the request from CLI
//! flags, `LAYOVER_*` environment variables and configuration files, and
//! prints the itinerary as text or JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;
mod render;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_TERMINAL: &str = "terminal";
pub(crate) const ARG_PLAN_ARRIVAL: &str = "arrival";
pub(crate) const ARG_PLAN_DEPARTURE: &str = "departure";
pub(crate) const ARG_PLAN_LAYOVER_MINUTES: &str = "layover-minutes";
pub(crate) const ARG_PLAN_INTEREST: &str = "interest";
pub(crate) const ARG_PLAN_VISIT_MINUTES: &str = "visit-minutes";
pub(crate) const ARG_PLAN_SAFETY_BUFFER_MINUTES: &str = "safety-buffer-minutes";
pub(crate) const ARG_PLAN_FORMAT: &str = "format";
pub(crate) const ENV_PLAN_TERMINAL: &str = "LAYOVER_CMDS_PLAN_TERMINAL";
pub(crate) const ENV_PLAN_ARRIVAL: &str = "LAYOVER_CMDS_PLAN_ARRIVAL";
pub(crate) const ENV_PLAN_DEPARTURE: &str = "LAYOVER_CMDS_PLAN_DEPARTURE";
pub(crate) const ENV_PLAN_LAYOVER_MINUTES: &str = "LAYOVER_CMDS_PLAN_LAYOVER_MINUTES";

/// Run the layover CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// terminal cannot be loaded, planning fails, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "layover",
    about = "Plan what to do during an airport layover",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a walking itinerary between two gates.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
