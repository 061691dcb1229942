use crate::domain::models::{Demographics, Pin};
use crate::services::dictionary::CommonPinSet;
use crate::services::ledger::UsedPinLedger;
use crate::services::variants::date_variants;
use rand::Rng;
use std::collections::HashSet;

/// Hard cap on rejection-sampling draws. A restrictive enough dictionary,
/// ledger, and demographics set can exhaust the whole space, so the loop
/// must be bounded and the caller must handle the no-result outcome.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

const DIGITS: &[u8] = b"0123456789";

#[derive(Debug)]
pub struct SuggestOutcome {
    pub pin: Option<Pin>,
    pub attempts: u32,
}

/// Draw uniformly random digit strings until one clears the dictionary,
/// the ledger, and every demographic variant set, or the attempt bound
/// runs out. Which satisfying pin comes back depends entirely on the rng.
pub fn suggest_pin(
    rng: &mut impl Rng,
    length: usize,
    common: &CommonPinSet,
    used_digests: &HashSet<String>,
    demographics: &Demographics,
    max_attempts: u32,
) -> SuggestOutcome {
    let variant_sets: Vec<HashSet<String>> = demographics.dates().map(date_variants).collect();

    for attempt in 1..=max_attempts {
        let candidate = random_digits(rng, length);
        if common.contains(&candidate) {
            continue;
        }
        if used_digests.contains(&UsedPinLedger::digest(&candidate)) {
            continue;
        }
        if variant_sets.iter().any(|set| set.contains(&candidate)) {
            continue;
        }
        if let Ok(pin) = candidate.parse::<Pin>() {
            return SuggestOutcome {
                pin: Some(pin),
                attempts: attempt,
            };
        }
    }

    log::warn!("no secure pin of length {length} found after {max_attempts} attempts");
    SuggestOutcome {
        pin: None,
        attempts: max_attempts,
    }
}

fn random_digits(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}
