use thiserror::Error;

/// Input validation failures surfaced to the caller for re-prompting.
///
/// Resource problems (missing dictionary or ledger file) are not errors:
/// they degrade to empty collections at the point of loading.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),
    #[error("malformed pin: expected 4 or 6 digits")]
    MalformedPin,
}

impl InputError {
    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::MalformedDate(_) => "MALFORMED_DATE",
            InputError::MalformedPin => "MALFORMED_PIN",
        }
    }
}
