//! Shared test harness modules for the layover CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::plan::{OutputFormat, PlanConfig, load_terminal, run_plan_with};

mod helpers;
