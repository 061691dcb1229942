use crate::domain::models::Pin;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of recording a pin. A repeat accept is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    AlreadyRecorded,
}

/// Append-only record of previously accepted pins.
///
/// Entries are SHA-256 hex digests rather than raw pin values, so the file
/// never holds the live credential. One digest per line; the file is only
/// ever appended to.
pub struct UsedPinLedger {
    path: PathBuf,
}

impl UsedPinLedger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn digest(pin: &str) -> String {
        hex::encode(Sha256::digest(pin.as_bytes()))
    }

    /// Read every digest currently recorded. Missing file means nothing
    /// has been accepted yet.
    pub fn load(&self) -> HashSet<String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!(
                    "ledger {} unavailable ({err}); treating as empty",
                    self.path.display()
                );
                return HashSet::new();
            }
        };
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, pin: &Pin) -> bool {
        self.load().contains(&Self::digest(pin.as_str()))
    }

    pub fn record(&self, pin: &Pin) -> anyhow::Result<RecordOutcome> {
        let digest = Self::digest(pin.as_str());
        if self.load().contains(&digest) {
            return Ok(RecordOutcome::AlreadyRecorded);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{digest}")?;
        Ok(RecordOutcome::Recorded)
    }
}
