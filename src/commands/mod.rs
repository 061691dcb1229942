//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — ledger inspection and variant listing.
//! - `runtime.rs` — evaluate/suggest/accept flows.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

use crate::cli::Cli;
use crate::services::config::Settings;

pub fn dispatch(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    if admin::handle_ledger_commands(cli, settings)? {
        return Ok(());
    }
    if admin::handle_variants_command(cli)? {
        return Ok(());
    }
    runtime::handle_runtime_commands(cli, settings)
}
