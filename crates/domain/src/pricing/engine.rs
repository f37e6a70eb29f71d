use crate::enums::CoveragePeriod;
use crate::error::PricingError;
use crate::pricing::config::PricingConfig;
use crate::pricing::multipliers::{
    coverage_ratio_multiplier, reputation_adjustment, risk_multiplier,
};
use crate::value_objects::quote::{PremiumBreakdown, PricingInput, PricingResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Prices a quote.
///
/// # Arguments
///
/// * `input` - Project and policyholder parameters
/// * `config` - Base rate, market volatility, term discounts and risk weights
///
/// # Returns
///
/// * `PricingResult` - Premium rounded half-up to cents, with the factors that produced it
///
/// # Errors
///
/// * `PricingError::InvalidInput` if project value or coverage amount is not positive
/// * `PricingError::OutOfRange` if risk tolerance or reputation exceeds 100
/// * `PricingError::Overflow` if the configured factors push the premium past
///   the decimal range
pub fn compute_premium(
    input: &PricingInput,
    config: &PricingConfig,
) -> Result<PricingResult, PricingError> {
    if input.project_value <= Decimal::ZERO || input.coverage_amount <= Decimal::ZERO {
        return Err(PricingError::InvalidInput);
    }

    let reputation = input
        .reputation_score
        .unwrap_or(config.default_reputation_score);
    let risk_profile = config
        .risk_weights
        .risk_profile(&input.job_type, &input.industry);

    let breakdown = PremiumBreakdown {
        base_rate: config.base_rate,
        coverage_ratio_multiplier: coverage_ratio_multiplier(input.coverage_ratio()),
        period_multiplier: config.period_multipliers.get(input.coverage_period),
        risk_multiplier: risk_multiplier(input.risk_tolerance)?,
        reputation_adjustment: reputation_adjustment(reputation)?,
        market_volatility: config.market_volatility,
        job_industry_adjustment: config
            .apply_risk_adjustment
            .then_some(risk_profile.combined),
    };

    let premium = breakdown
        .product()
        .ok_or(PricingError::Overflow {
            quantity: "premium",
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(PricingResult {
        premium,
        breakdown,
        risk_profile,
    })
}

/// Prices the same quote for every coverage period, shortest term first.
pub fn compute_premium_by_period(
    input: &PricingInput,
    config: &PricingConfig,
) -> Result<Vec<(CoveragePeriod, PricingResult)>, PricingError> {
    CoveragePeriod::ALL
        .into_iter()
        .map(|period| {
            let quote = input.clone().with_period(period);
            compute_premium(&quote, config).map(|result| (period, result))
        })
        .collect()
}
