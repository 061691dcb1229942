use std::collections::HashSet;
use std::path::Path;

/// Dictionary of known-weak pins, loaded once per run.
///
/// Constructed explicitly and handed to the evaluator so tests can
/// substitute a fixed dictionary without touching process state.
#[derive(Debug, Clone, Default)]
pub struct CommonPinSet(HashSet<String>);

impl CommonPinSet {
    /// Load from a newline-delimited file. A missing or unreadable file
    /// degrades to the empty set: evaluation then simply carries no
    /// common-pin signal.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!(
                    "common-pin dictionary {} unavailable ({err}); using empty set",
                    path.display()
                );
                return Self::default();
            }
        };
        Self::from_lines(&raw)
    }

    /// Parse dictionary text: one token per line, non-digit lines skipped.
    pub fn from_lines(raw: &str) -> Self {
        CommonPinSet(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()))
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, pin: &str) -> bool {
        self.0.contains(pin)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
