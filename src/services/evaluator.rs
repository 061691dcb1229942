use crate::domain::models::{Demographics, Evaluation, Pin, ReasonCode, Strength};
use crate::services::dictionary::CommonPinSet;
use crate::services::variants::date_variants;

/// Composes the dictionary check and the per-role date-variant checks
/// into one verdict. Pure: same inputs, same verdict.
pub struct PinEvaluator {
    common: CommonPinSet,
}

impl PinEvaluator {
    pub fn new(common: CommonPinSet) -> Self {
        Self { common }
    }

    /// Dictionary check first, then self/spouse/anniversary in that fixed
    /// order. Each role contributes at most one reason, so insertion
    /// order is the reason order. Weak iff any reason matched.
    pub fn evaluate(&self, pin: &Pin, demographics: &Demographics) -> Evaluation {
        let mut reasons = Vec::new();

        if self.common.contains(pin.as_str()) {
            reasons.push(ReasonCode::CommonlyUsed);
        }

        for (code, date) in demographics.roles() {
            if let Some(date) = date {
                if date_variants(date).contains(pin.as_str()) {
                    reasons.push(code);
                }
            }
        }

        let strength = if reasons.is_empty() {
            Strength::Strong
        } else {
            Strength::Weak
        };
        Evaluation { strength, reasons }
    }
}
