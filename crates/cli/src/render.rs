//! Table rendering for terminal output.

use gigshield_domain::enums::CoveragePeriod;
use gigshield_domain::value_objects::{Percentage, PoolHealth, PricingResult};
use prettytable::{Table, row};
use rust_decimal::Decimal;

const INSUFFICIENT_DATA: &str = "insufficient data";

pub fn as_percent(fraction: Decimal) -> String {
    Percentage::from_fraction(fraction).to_string()
}

/// One row per factor with its effect on the premium.
pub fn breakdown_table(result: &PricingResult) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Factor", "Multiplier", "Effect"]);
    table.add_row(row!["Base rate", result.breakdown.base_rate, "USDC"]);
    for description in result.describe() {
        table.add_row(row![
            description.name,
            description.value,
            description.change_label()
        ]);
    }
    table
}

pub fn period_table(quotes: &[(CoveragePeriod, PricingResult)]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Period", "Discount", "Premium (USDC)"]);
    for (period, result) in quotes {
        table.add_row(row![
            period,
            result.breakdown.period_multiplier,
            result.premium
        ]);
    }
    table
}

pub fn pool_table(health: &PoolHealth) -> Table {
    let fraction = |value: Option<Decimal>| {
        value
            .map(as_percent)
            .unwrap_or_else(|| INSUFFICIENT_DATA.to_string())
    };

    let mut table = Table::new();
    table.add_row(row!["Reserve health", health.reserve_health]);
    table.add_row(row!["Available reserves", format!("{} SOL", health.available_reserves)]);
    table.add_row(row![
        "Liability coverage",
        fraction(health.liability_coverage_fraction)
    ]);
    table.add_row(row!["Claim payouts", fraction(health.claim_payout_fraction)]);
    table.add_row(row!["Reserve surplus", format!("{} SOL", health.reserve_surplus)]);
    table.add_row(row!["Active stakers", health.active_stakers]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigshield_domain::pricing::{PricingConfig, compute_premium_by_period};
    use gigshield_domain::solvency::assess_pool;
    use gigshield_domain::value_objects::{PoolMetrics, PricingInput};

    #[test]
    fn test_breakdown_table_has_row_per_factor() {
        let input = PricingInput::new(Decimal::from(1000), Decimal::from(800));
        let quotes = compute_premium_by_period(&input, &PricingConfig::default()).unwrap();
        // header + base rate + five multipliers
        assert_eq!(breakdown_table(&quotes[0].1).len(), 7);
        assert_eq!(period_table(&quotes).len(), 5);
    }

    #[test]
    fn test_pool_table_marks_missing_fractions() {
        let health = assess_pool(&PoolMetrics {
            total_capital: Decimal::ZERO,
            reserve_ratio: Decimal::ONE,
            expected_liabilities: Decimal::ZERO,
            claim_payouts: Decimal::ZERO,
            active_stakers: 0,
            last_updated: None,
        })
        .unwrap();
        let rendered = pool_table(&health).to_string();
        assert!(rendered.contains(INSUFFICIENT_DATA));
    }

    #[test]
    fn test_as_percent() {
        assert_eq!(as_percent(Decimal::new(125, 3)), "12.5%");
    }
}
