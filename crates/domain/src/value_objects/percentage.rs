use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fraction rendered as a percentage (0.25 displays as 25%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction)
    }

    pub fn from_bps(bps: u32) -> Self {
        Self(Decimal::from(bps) / Decimal::from(10000))
    }

    pub fn to_bps(&self) -> u32 {
        self.0
            .checked_mul(Decimal::from(10000))
            .and_then(|bps| bps.to_u32())
            .unwrap_or(0)
    }

    /// The value in percent, e.g. 25 for a fraction of 0.25. Saturates at the
    /// decimal range.
    pub fn as_percent(&self) -> Decimal {
        self.0.checked_mul(Decimal::ONE_HUNDRED).unwrap_or(if self.0.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    }

    /// Percent value bounded to [0, 100] for progress-bar style displays.
    pub fn bar_width(&self) -> Decimal {
        self.as_percent().clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent().round_dp(1).normalize())
    }
}
