//! Plan command implementation for the layover CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use layover_core::{
    DEFAULT_SAFETY_BUFFER_MINUTES, DEFAULT_VISIT_MINUTES, Itinerary, ItineraryPlanner,
    PlanRequest, Planner, Terminal, TerminalSpec,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::render::PlanReport;
use crate::{
    ARG_PLAN_ARRIVAL, ARG_PLAN_DEPARTURE, ARG_PLAN_FORMAT, ARG_PLAN_INTEREST,
    ARG_PLAN_LAYOVER_MINUTES, ARG_PLAN_SAFETY_BUFFER_MINUTES, ARG_PLAN_TERMINAL,
    ARG_PLAN_VISIT_MINUTES, CliError, ENV_PLAN_ARRIVAL, ENV_PLAN_DEPARTURE,
    ENV_PLAN_LAYOVER_MINUTES, ENV_PLAN_TERMINAL,
};

/// Output formats understood by `layover plan`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Numbered walking plan for people.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a layover by loading a terminal document (locations \
                 plus direct walking times) and greedily visiting the \
                 nearest places that match your interests while keeping a \
                 safety buffer for boarding.",
    about = "Plan a layover itinerary"
)]
#[ortho_config(prefix = "LAYOVER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON terminal document.
    #[arg(long = ARG_PLAN_TERMINAL, value_name = "path")]
    #[serde(default)]
    pub(crate) terminal: Option<Utf8PathBuf>,
    /// Location id of the arrival gate.
    #[arg(long = ARG_PLAN_ARRIVAL, value_name = "id")]
    #[serde(default)]
    pub(crate) arrival: Option<usize>,
    /// Location id of the departure gate.
    #[arg(long = ARG_PLAN_DEPARTURE, value_name = "id")]
    #[serde(default)]
    pub(crate) departure: Option<usize>,
    /// Minutes between arrival and departure.
    #[arg(long = ARG_PLAN_LAYOVER_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) layover_minutes: Option<u64>,
    /// Interest tag; repeat the flag or separate tags with commas.
    #[arg(long = ARG_PLAN_INTEREST, value_name = "tag", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) interests: Option<Vec<String>>,
    /// Minutes spent at each visited location (default 45).
    #[arg(long = ARG_PLAN_VISIT_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) visit_minutes: Option<u64>,
    /// Minutes reserved for security and boarding (default 40).
    #[arg(long = ARG_PLAN_SAFETY_BUFFER_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) safety_buffer_minutes: Option<u64>,
    /// Output format.
    #[arg(long = ARG_PLAN_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the terminal document.
    pub(crate) terminal: Utf8PathBuf,
    /// Planning parameters with defaults filled in.
    pub(crate) request: PlanRequest,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.terminal, ARG_PLAN_TERMINAL)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let terminal = args.terminal.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_TERMINAL,
            env: ENV_PLAN_TERMINAL,
        })?;
        let arrival = args.arrival.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_ARRIVAL,
            env: ENV_PLAN_ARRIVAL,
        })?;
        let departure = args.departure.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_DEPARTURE,
            env: ENV_PLAN_DEPARTURE,
        })?;
        let layover_minutes = args.layover_minutes.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_LAYOVER_MINUTES,
            env: ENV_PLAN_LAYOVER_MINUTES,
        })?;

        let request = PlanRequest::new(arrival, departure, layover_minutes)
            .with_interests(args.interests.unwrap_or_default())
            .with_visit_minutes(args.visit_minutes.unwrap_or(DEFAULT_VISIT_MINUTES))
            .with_safety_buffer_minutes(
                args.safety_buffer_minutes
                    .unwrap_or(DEFAULT_SAFETY_BUFFER_MINUTES),
            );

        Ok(Self {
            terminal,
            request,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let terminal = load_terminal(&config.terminal)?;
    let planner = ItineraryPlanner::new(&terminal);
    let itinerary = execute_plan(&planner, &config.request)?;
    let report = PlanReport::new(
        planner.locations(),
        planner.paths(),
        &itinerary,
        &config.request,
    );
    write_plan_report(writer, &report, config.format)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(planner: &dyn Planner, request: &PlanRequest) -> Result<Itinerary, CliError> {
    let itinerary = planner
        .plan(request)
        .map_err(|source| CliError::Plan { source })?;
    log::info!(
        "planned {} visits from {} to {}",
        itinerary.visits().len(),
        request.arrival,
        request.departure
    );
    Ok(itinerary)
}

/// Loads and validates a JSON terminal document from disk.
pub(crate) fn load_terminal(path: &Utf8Path) -> Result<Terminal, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTerminal {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let spec: TerminalSpec =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseTerminal {
            path: path.to_path_buf(),
            source,
        })?;
    Terminal::try_from(spec).map_err(|source| CliError::InvalidTerminal {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_report(
    writer: &mut dyn Write,
    report: &PlanReport<'_>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(CliError::SerialiseItinerary)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}
