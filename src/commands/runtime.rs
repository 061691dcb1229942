use crate::cli::{Cli, Commands, DemographicArgs};
use crate::domain::models::{
    AcceptReport, Demographics, EvaluationReport, JsonOut, Pin, SuggestReport,
};
use crate::services::config::Settings;
use crate::services::dictionary::CommonPinSet;
use crate::services::evaluator::PinEvaluator;
use crate::services::ledger::{RecordOutcome, UsedPinLedger};
use crate::services::output::print_one;
use crate::services::storage::audit;
use crate::services::suggest::suggest_pin;

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Evaluate { pin, demographics } => {
            let pin: Pin = pin.parse()?;
            let demographics = parse_demographics(demographics)?;
            let evaluator = PinEvaluator::new(CommonPinSet::load(&settings.dictionary_path));
            let verdict = evaluator.evaluate(&pin, &demographics);
            let report = EvaluationReport {
                pin: pin.to_string(),
                strength: verdict.strength,
                reasons: verdict.reasons,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("pin: {}", report.pin);
                println!("strength: {}", report.strength);
                if report.reasons.is_empty() {
                    println!("no known weaknesses found");
                } else {
                    println!("reasons:");
                    for reason in &report.reasons {
                        println!("  - {}", reason.describe());
                    }
                }
            }
        }
        Commands::Suggest {
            length,
            max_attempts,
            demographics,
        } => {
            let demographics = parse_demographics(demographics)?;
            let common = CommonPinSet::load(&settings.dictionary_path);
            let ledger = UsedPinLedger::new(settings.ledger_path.clone());
            let used = ledger.load();
            let bound = max_attempts.unwrap_or(settings.max_attempts);
            let mut rng = rand::thread_rng();
            let outcome = suggest_pin(
                &mut rng,
                length.digits(),
                &common,
                &used,
                &demographics,
                bound,
            );
            let report = SuggestReport {
                pin: outcome.pin.as_ref().map(Pin::to_string),
                status: if outcome.pin.is_some() {
                    "ok".to_string()
                } else {
                    "exhausted".to_string()
                },
                attempts: outcome.attempts,
            };
            audit(
                "suggest",
                serde_json::json!({
                    "length": length.digits(),
                    "status": report.status,
                    "attempts": report.attempts
                }),
            );
            print_one(cli.json, report, |r| match &r.pin {
                Some(pin) => format!("suggested pin: {pin}"),
                None => format!("no secure pin found after {} attempts", r.attempts),
            })?;
        }
        Commands::Accept { pin } => {
            let pin: Pin = pin.parse()?;
            let ledger = UsedPinLedger::new(settings.ledger_path.clone());
            let outcome = ledger.record(&pin)?;
            let report = AcceptReport {
                status: match outcome {
                    RecordOutcome::Recorded => "recorded".to_string(),
                    RecordOutcome::AlreadyRecorded => "already_recorded".to_string(),
                },
            };
            audit(
                "accept",
                serde_json::json!({
                    "digest": UsedPinLedger::digest(pin.as_str()),
                    "status": report.status
                }),
            );
            print_one(cli.json, report, |r| match r.status.as_str() {
                "recorded" => "pin recorded; it will not be suggested again".to_string(),
                _ => "pin was already recorded".to_string(),
            })?;
        }
        Commands::Variants { .. } | Commands::Ledger { .. } => {
            unreachable!("handled before runtime dispatch")
        }
    }

    Ok(())
}

fn parse_demographics(args: &DemographicArgs) -> anyhow::Result<Demographics> {
    Ok(Demographics::from_raw(
        args.dob.as_deref(),
        args.spouse_dob.as_deref(),
        args.anniversary.as_deref(),
    )?)
}
