use crate::enums::CoveragePeriod;
use crate::error::PricingError;
use crate::pricing::risk_weights::RiskWeightTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount applied per policy term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodMultipliers {
    pub one_month: Decimal,
    pub three_months: Decimal,
    pub six_months: Decimal,
    pub one_year: Decimal,
}

impl Default for PeriodMultipliers {
    fn default() -> Self {
        Self {
            one_month: Decimal::ONE,
            three_months: Decimal::new(95, 2), // 5% off
            six_months: Decimal::new(90, 2),   // 10% off
            one_year: Decimal::new(80, 2),     // 20% off
        }
    }
}

impl PeriodMultipliers {
    /// Multiplier for a term. A missing term gets no discount.
    pub fn get(&self, period: Option<CoveragePeriod>) -> Decimal {
        match period {
            Some(CoveragePeriod::OneMonth) => self.one_month,
            Some(CoveragePeriod::ThreeMonths) => self.three_months,
            Some(CoveragePeriod::SixMonths) => self.six_months,
            Some(CoveragePeriod::OneYear) => self.one_year,
            None => Decimal::ONE,
        }
    }
}

/// Externally supplied pricing parameters.
///
/// The default is the reference configuration: a 10 USDC base rate and a
/// 1.05 market volatility factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Base premium in USDC before any multiplier.
    pub base_rate: Decimal,
    /// Macro adjustment supplied from outside the engine.
    pub market_volatility: Decimal,
    /// Reputation used when a quote carries none.
    pub default_reputation_score: u8,
    pub period_multipliers: PeriodMultipliers,
    pub risk_weights: RiskWeightTable,
    /// Multiply the job-type and industry weight into the premium.
    pub apply_risk_adjustment: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_rate: Decimal::TEN,
            market_volatility: Decimal::new(105, 2),
            default_reputation_score: 75,
            period_multipliers: PeriodMultipliers::default(),
            risk_weights: RiskWeightTable::default(),
            apply_risk_adjustment: false,
        }
    }
}

impl PricingConfig {
    #[must_use]
    pub fn with_base_rate(mut self, base_rate: Decimal) -> Self {
        self.base_rate = base_rate;
        self
    }

    #[must_use]
    pub fn with_market_volatility(mut self, market_volatility: Decimal) -> Self {
        self.market_volatility = market_volatility;
        self
    }

    #[must_use]
    pub fn with_risk_adjustment(mut self, apply: bool) -> Self {
        self.apply_risk_adjustment = apply;
        self
    }

    #[must_use]
    pub fn with_risk_weights(mut self, risk_weights: RiskWeightTable) -> Self {
        self.risk_weights = risk_weights;
        self
    }

    /// Checks that every factor is positive and the default score is a valid score.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.base_rate <= Decimal::ZERO {
            return Err(PricingError::InvalidConfig(format!(
                "base_rate must be positive, got {}",
                self.base_rate
            )));
        }
        if self.market_volatility <= Decimal::ZERO {
            return Err(PricingError::InvalidConfig(format!(
                "market_volatility must be positive, got {}",
                self.market_volatility
            )));
        }
        if self.default_reputation_score > 100 {
            return Err(PricingError::InvalidConfig(format!(
                "default_reputation_score must be between 0 and 100, got {}",
                self.default_reputation_score
            )));
        }
        for period in CoveragePeriod::ALL {
            let multiplier = self.period_multipliers.get(Some(period));
            if multiplier <= Decimal::ZERO {
                return Err(PricingError::InvalidConfig(format!(
                    "period multiplier for {period} must be positive, got {multiplier}"
                )));
            }
        }
        self.risk_weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_reference_configuration() {
        let config = PricingConfig::default();
        assert_eq!(config.base_rate, dec!(10));
        assert_eq!(config.market_volatility, dec!(1.05));
        assert_eq!(config.default_reputation_score, 75);
        assert!(!config.apply_risk_adjustment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_period_multipliers() {
        let periods = PeriodMultipliers::default();
        assert_eq!(periods.get(Some(CoveragePeriod::OneMonth)), dec!(1.0));
        assert_eq!(periods.get(Some(CoveragePeriod::ThreeMonths)), dec!(0.95));
        assert_eq!(periods.get(Some(CoveragePeriod::SixMonths)), dec!(0.90));
        assert_eq!(periods.get(Some(CoveragePeriod::OneYear)), dec!(0.80));
        assert_eq!(periods.get(None), dec!(1.0));
    }

    #[test]
    fn test_validate_rejects_non_positive_factors() {
        let config = PricingConfig::default().with_base_rate(Decimal::ZERO);
        assert!(matches!(config.validate(), Err(PricingError::InvalidConfig(_))));

        let config = PricingConfig::default().with_market_volatility(dec!(-1));
        assert!(matches!(config.validate(), Err(PricingError::InvalidConfig(_))));

        let mut config = PricingConfig::default();
        config.period_multipliers.one_year = Decimal::ZERO;
        assert!(matches!(config.validate(), Err(PricingError::InvalidConfig(_))));

        let mut config = PricingConfig::default();
        config.default_reputation_score = 101;
        assert!(matches!(config.validate(), Err(PricingError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: PricingConfig =
            serde_json::from_str(r#"{"base_rate":"12.5","apply_risk_adjustment":true}"#).unwrap();
        assert_eq!(config.base_rate, dec!(12.5));
        assert_eq!(config.market_volatility, dec!(1.05));
        assert!(config.apply_risk_adjustment);
        assert_eq!(config.risk_weights, RiskWeightTable::default());
    }
}
