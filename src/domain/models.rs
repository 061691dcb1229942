use crate::domain::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrOut {
    pub ok: bool,
    pub error: ErrBody,
}

#[derive(Serialize)]
pub struct ErrBody {
    pub code: String,
    pub message: String,
}

/// A calendar date validated for shape only: `YYYY-MM-DD`, ten characters,
/// three all-numeric parts. Calendar validity (day <= 31 etc.) is not
/// checked; an attacker guessing from a written date does not need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date {
    year: String,
    month: String,
    day: String,
}

impl Date {
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day(&self) -> &str {
        &self.day
    }
}

impl FromStr for Date {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split('-').collect();
        let shaped = raw.len() == 10
            && parts.len() == 3
            && parts[0].len() == 4
            && parts[1].len() == 2
            && parts[2].len() == 2
            && parts
                .iter()
                .all(|p| p.bytes().all(|b| b.is_ascii_digit()));
        if !shaped {
            return Err(InputError::MalformedDate(raw.to_string()));
        }
        Ok(Date {
            year: parts[0].to_string(),
            month: parts[1].to_string(),
            day: parts[2].to_string(),
        })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// A candidate pin: all digits, length exactly 4 or 6.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pin(String);

impl Pin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pin {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let shaped = matches!(raw.len(), 4 | 6) && raw.bytes().all(|b| b.is_ascii_digit());
        if !shaped {
            return Err(InputError::MalformedPin);
        }
        Ok(Pin(raw.to_string()))
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The holder's personal dates. Any subset of roles may be absent.
#[derive(Debug, Clone, Default)]
pub struct Demographics {
    pub dob: Option<Date>,
    pub spouse_dob: Option<Date>,
    pub anniversary: Option<Date>,
}

impl Demographics {
    /// Parse raw CLI text into dates. Empty strings count as absent,
    /// matching how an unfilled form field arrives.
    pub fn from_raw(
        dob: Option<&str>,
        spouse_dob: Option<&str>,
        anniversary: Option<&str>,
    ) -> Result<Self, InputError> {
        fn parse_opt(raw: Option<&str>) -> Result<Option<Date>, InputError> {
            raw.map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::parse)
                .transpose()
        }
        Ok(Demographics {
            dob: parse_opt(dob)?,
            spouse_dob: parse_opt(spouse_dob)?,
            anniversary: parse_opt(anniversary)?,
        })
    }

    /// Roles in the fixed evaluation order: self, spouse, anniversary.
    pub fn roles(&self) -> [(ReasonCode, Option<&Date>); 3] {
        [
            (ReasonCode::DemographicDobSelf, self.dob.as_ref()),
            (ReasonCode::DemographicDobSpouse, self.spouse_dob.as_ref()),
            (ReasonCode::DemographicAnniversary, self.anniversary.as_ref()),
        ]
    }

    pub fn dates(&self) -> impl Iterator<Item = &Date> + '_ {
        [
            self.dob.as_ref(),
            self.spouse_dob.as_ref(),
            self.anniversary.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    CommonlyUsed,
    DemographicDobSelf,
    DemographicDobSpouse,
    DemographicAnniversary,
}

impl ReasonCode {
    pub fn describe(&self) -> &'static str {
        match self {
            ReasonCode::CommonlyUsed => "commonly used and easy to guess",
            ReasonCode::DemographicDobSelf => {
                "matches a pattern derived from your date of birth"
            }
            ReasonCode::DemographicDobSpouse => {
                "matches a pattern derived from your spouse's date of birth"
            }
            ReasonCode::DemographicAnniversary => {
                "matches a pattern derived from your anniversary date"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strength {
    Strong,
    Weak,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Strong => "STRONG",
            Strength::Weak => "WEAK",
        })
    }
}

/// Verdict for one pin against one demographics record. Derived per call,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub strength: Strength,
    pub reasons: Vec<ReasonCode>,
}

#[derive(Serialize)]
pub struct EvaluationReport {
    pub pin: String,
    pub strength: Strength,
    pub reasons: Vec<ReasonCode>,
}

#[derive(Serialize)]
pub struct SuggestReport {
    pub pin: Option<String>,
    pub status: String,
    pub attempts: u32,
}

#[derive(Serialize)]
pub struct AcceptReport {
    pub status: String,
}

#[derive(Serialize)]
pub struct LedgerStatus {
    pub entries: usize,
    pub path: String,
}
