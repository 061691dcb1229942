use crate::cli::{Cli, Commands, LedgerCommands, PinLength};
use crate::domain::models::{Date, LedgerStatus, Pin};
use crate::services::config::Settings;
use crate::services::ledger::UsedPinLedger;
use crate::services::output::{print_one, print_out};
use crate::services::variants::sorted_variants;

pub fn handle_ledger_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    let Commands::Ledger { command } = &cli.command else {
        return Ok(false);
    };

    let ledger = UsedPinLedger::new(settings.ledger_path.clone());
    match command {
        LedgerCommands::Status => {
            let status = LedgerStatus {
                entries: ledger.load().len(),
                path: ledger.path().display().to_string(),
            };
            print_one(cli.json, status, |s| {
                format!("entries={} path={}", s.entries, s.path)
            })?;
        }
        LedgerCommands::Contains { pin } => {
            let pin: Pin = pin.parse()?;
            let found = ledger.contains(&pin);
            print_one(cli.json, found, |f| {
                if *f { "recorded" } else { "not recorded" }.to_string()
            })?;
        }
    }

    Ok(true)
}

pub fn handle_variants_command(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Variants { date, length } = &cli.command else {
        return Ok(false);
    };

    let date: Date = date.parse()?;
    let list = sorted_variants(&date, length.map(PinLength::digits));
    print_out(cli.json, &list, |v| v.clone())?;

    Ok(true)
}
