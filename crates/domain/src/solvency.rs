//! Risk-pool solvency model.
//!
//! Relates staked capital, expected liabilities and claim payouts. Every value
//! is derived from the supplied [`PoolMetrics`] on each call; nothing is cached.

use crate::enums::ReserveHealth;
use crate::error::SolvencyError;
use crate::value_objects::pool::{AllocationFractions, PoolHealth, PoolMetrics};
use rust_decimal::Decimal;

/// Classifies a reserve ratio.
///
/// Thresholds are inclusive and checked from the top:
/// `>= 0.5` Excellent, `>= 0.3` Good, `>= 0.2` Fair, otherwise At Risk.
/// Ratios outside `[0, 1]` are classified as given.
pub fn classify_reserve_health(reserve_ratio: Decimal) -> ReserveHealth {
    if reserve_ratio >= Decimal::new(5, 1) {
        ReserveHealth::Excellent
    } else if reserve_ratio >= Decimal::new(3, 1) {
        ReserveHealth::Good
    } else if reserve_ratio >= Decimal::new(2, 1) {
        ReserveHealth::Fair
    } else {
        ReserveHealth::AtRisk
    }
}

/// Computes reserves and the liability and claim shares of total capital.
///
/// # Errors
///
/// * `SolvencyError::DivisionUndefined` if total capital is zero
/// * `SolvencyError::Overflow` if a result exceeds the decimal range
pub fn compute_allocation_fractions(
    metrics: &PoolMetrics,
) -> Result<AllocationFractions, SolvencyError> {
    let liability_coverage_fraction = fraction_of_capital(
        metrics.expected_liabilities,
        metrics.total_capital,
        "liability coverage fraction",
    )?;
    let claim_payout_fraction = fraction_of_capital(
        metrics.claim_payouts,
        metrics.total_capital,
        "claim payout fraction",
    )?;

    Ok(AllocationFractions {
        available_reserves: metrics.available_reserves()?,
        liability_coverage_fraction,
        claim_payout_fraction,
    })
}

/// Derives the full health view of a pool.
///
/// Unlike [`compute_allocation_fractions`], an empty pool is not an error here:
/// the fractions are reported as absent so callers can render an
/// "insufficient data" state.
///
/// # Errors
///
/// * `SolvencyError::Overflow` if reserves, fractions or surplus exceed the
///   decimal range
pub fn assess_pool(metrics: &PoolMetrics) -> Result<PoolHealth, SolvencyError> {
    let available_reserves = metrics.available_reserves()?;
    let fractions = if metrics.total_capital.is_zero() {
        None
    } else {
        Some(compute_allocation_fractions(metrics)?)
    };
    let reserve_surplus = available_reserves
        .checked_sub(metrics.expected_liabilities)
        .ok_or(SolvencyError::Overflow {
            quantity: "reserve surplus",
        })?;

    Ok(PoolHealth {
        reserve_health: classify_reserve_health(metrics.reserve_ratio),
        available_reserves,
        liability_coverage_fraction: fractions.map(|f| f.liability_coverage_fraction),
        claim_payout_fraction: fractions.map(|f| f.claim_payout_fraction),
        reserve_surplus,
        active_stakers: metrics.active_stakers,
        last_updated: metrics.last_updated,
    })
}

fn fraction_of_capital(
    amount: Decimal,
    total_capital: Decimal,
    quantity: &'static str,
) -> Result<Decimal, SolvencyError> {
    if total_capital.is_zero() {
        return Err(SolvencyError::DivisionUndefined { quantity });
    }
    amount
        .checked_div(total_capital)
        .ok_or(SolvencyError::Overflow { quantity })
}
