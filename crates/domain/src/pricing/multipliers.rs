//! Individual premium multipliers.

use crate::error::PricingError;
use rust_decimal::Decimal;

/// Highest score accepted for risk tolerance and reputation.
pub const MAX_SCORE: u8 = 100;

/// Multiplier for the coverage-to-project-value ratio.
///
/// Tiers are checked in ascending order, first match wins:
///
/// | ratio         | multiplier |
/// |---------------|------------|
/// | < 0.5         | 0.8        |
/// | [0.5, 0.75)   | 0.9        |
/// | [0.75, 1.0]   | 1.0        |
/// | (1.0, 1.25)   | 1.1        |
/// | [1.25, 1.5)   | 1.2        |
/// | >= 1.5        | 1.3        |
///
/// Full coverage (ratio exactly 1.0) is priced neutrally. A strictly
/// left-closed table would read "ratio < 1.0 -> 1.0" and put 1.0 in the 1.1
/// tier; the reference quotes (1000 covered on a 1000 project at 11.77 for one
/// month and 9.42 for one year) require 1.0, so the third tier is closed on
/// both ends. Every other boundary stays left-closed.
pub fn coverage_ratio_multiplier(ratio: Decimal) -> Decimal {
    if ratio < Decimal::new(50, 2) {
        Decimal::new(8, 1)
    } else if ratio < Decimal::new(75, 2) {
        Decimal::new(9, 1)
    } else if ratio <= Decimal::ONE {
        Decimal::ONE
    } else if ratio < Decimal::new(125, 2) {
        Decimal::new(11, 1)
    } else if ratio < Decimal::new(150, 2) {
        Decimal::new(12, 1)
    } else {
        Decimal::new(13, 1)
    }
}

/// Maps a score in `[0, 100]` onto `[1.5, 0.8]`: `1.5 - score / 100 * 0.7`.
fn score_multiplier(field: &'static str, score: u8) -> Result<Decimal, PricingError> {
    if score > MAX_SCORE {
        return Err(PricingError::OutOfRange {
            field,
            value: score,
        });
    }
    let fraction = Decimal::from(score) / Decimal::ONE_HUNDRED;
    Ok(Decimal::new(15, 1) - fraction * Decimal::new(7, 1))
}

/// Higher risk tolerance lowers the premium.
pub fn risk_multiplier(risk_tolerance: u8) -> Result<Decimal, PricingError> {
    score_multiplier("risk_tolerance", risk_tolerance)
}

/// Higher reputation lowers the premium.
pub fn reputation_adjustment(reputation_score: u8) -> Result<Decimal, PricingError> {
    score_multiplier("reputation_score", reputation_score)
}
