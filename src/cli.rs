use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mpinguard", version, about = "MPIN strength checker and suggestor")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Common-PIN dictionary file (one all-digit pin per line)"
    )]
    pub dictionary: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Accepted-PIN ledger file (append-only digest list)"
    )]
    pub ledger: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Evaluate {
        pin: String,
        #[command(flatten)]
        demographics: DemographicArgs,
    },
    Suggest {
        #[arg(long, value_enum, default_value_t = PinLength::Four)]
        length: PinLength,
        #[arg(long, help = "Override the suggestion attempt bound")]
        max_attempts: Option<u32>,
        #[command(flatten)]
        demographics: DemographicArgs,
    },
    Accept {
        pin: String,
    },
    Variants {
        date: String,
        #[arg(long, value_enum)]
        length: Option<PinLength>,
    },
    Ledger {
        #[command(subcommand)]
        command: LedgerCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    Status,
    Contains { pin: String },
}

#[derive(Args, Debug, Default)]
pub struct DemographicArgs {
    #[arg(long, help = "Holder date of birth (YYYY-MM-DD)")]
    pub dob: Option<String>,
    #[arg(long, help = "Spouse date of birth (YYYY-MM-DD)")]
    pub spouse_dob: Option<String>,
    #[arg(long, help = "Anniversary date (YYYY-MM-DD)")]
    pub anniversary: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PinLength {
    #[value(name = "4")]
    Four,
    #[value(name = "6")]
    Six,
}

impl PinLength {
    pub fn digits(self) -> usize {
        match self {
            PinLength::Four => 4,
            PinLength::Six => 6,
        }
    }
}
