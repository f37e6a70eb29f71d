use crate::enums::ReserveHealth;
use crate::error::SolvencyError;
use crate::value_objects::percentage::Percentage;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pool aggregates as reported by the chain indexer. Amounts are in SOL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMetrics {
    pub total_capital: Decimal,
    /// Fraction of capital held as liquid reserves, normally in `[0, 1]`.
    pub reserve_ratio: Decimal,
    pub expected_liabilities: Decimal,
    /// Claims paid year to date.
    pub claim_payouts: Decimal,
    #[serde(default)]
    pub active_stakers: u64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl PoolMetrics {
    /// Capital held as liquid reserves.
    pub fn available_reserves(&self) -> Result<Decimal, SolvencyError> {
        self.total_capital
            .checked_mul(self.reserve_ratio)
            .ok_or(SolvencyError::Overflow {
                quantity: "available reserves",
            })
    }
}

/// Shares of total capital derived from pool metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationFractions {
    pub available_reserves: Decimal,
    pub liability_coverage_fraction: Decimal,
    pub claim_payout_fraction: Decimal,
}

/// Derived health of a risk pool. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolHealth {
    pub reserve_health: ReserveHealth,
    pub available_reserves: Decimal,
    /// `None` when total capital is zero.
    pub liability_coverage_fraction: Option<Decimal>,
    /// `None` when total capital is zero.
    pub claim_payout_fraction: Option<Decimal>,
    /// Available reserves minus expected liabilities.
    pub reserve_surplus: Decimal,
    pub active_stakers: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PoolHealth {
    /// Whether the fractions could be computed.
    pub fn has_sufficient_data(&self) -> bool {
        self.liability_coverage_fraction.is_some() && self.claim_payout_fraction.is_some()
    }

    /// Reserves cover expected liabilities.
    pub fn covers_liabilities(&self) -> bool {
        self.reserve_surplus >= Decimal::ZERO
    }

    pub fn liability_coverage(&self) -> Option<Percentage> {
        self.liability_coverage_fraction.map(Percentage::from_fraction)
    }

    pub fn claim_payouts(&self) -> Option<Percentage> {
        self.claim_payout_fraction.map(Percentage::from_fraction)
    }

    /// Metrics older than `max_age` at `now`, or never timestamped, are stale.
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        match self.last_updated {
            Some(updated) => now - updated > max_age,
            None => true,
        }
    }
}
