//! Presentation of multipliers as cost changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a multiplier moves the premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    NoChange,
}

/// A multiplier rendered as "N% increase" or "N% decrease".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierDescription {
    pub name: String,
    pub value: Decimal,
    /// Absolute change in percent, rounded to one decimal.
    pub change_pct: Decimal,
    pub direction: ChangeDirection,
    /// Whether the UI should present the factor as favourable to the policyholder.
    pub is_positive: bool,
}

impl MultiplierDescription {
    /// The "N% increase" part without the name.
    pub fn change_label(&self) -> String {
        match self.direction {
            ChangeDirection::Increase => format!("{}% increase", self.change_pct),
            ChangeDirection::Decrease => format!("{}% decrease", self.change_pct),
            ChangeDirection::NoChange => "no change".to_string(),
        }
    }
}

impl fmt::Display for MultiplierDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.change_label())
    }
}

/// Describes a multiplier relative to 1.0.
///
/// Values below 1.0 are cost decreases and values above are cost increases.
/// `is_positive` defaults to `value < 1`; pass it explicitly for factors whose
/// favourability does not follow the cost direction.
pub fn describe_multiplier(
    name: &str,
    value: Decimal,
    is_positive: Option<bool>,
) -> MultiplierDescription {
    let delta = value.checked_sub(Decimal::ONE).unwrap_or(Decimal::MIN);
    let direction = if delta.is_zero() {
        ChangeDirection::NoChange
    } else if delta.is_sign_negative() {
        ChangeDirection::Decrease
    } else {
        ChangeDirection::Increase
    };

    MultiplierDescription {
        name: name.to_string(),
        value,
        change_pct: delta
            .abs()
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::MAX)
            .round_dp(1)
            .normalize(),
        direction,
        is_positive: is_positive.unwrap_or(value < Decimal::ONE),
    }
}
