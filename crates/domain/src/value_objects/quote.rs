use crate::enums::CoveragePeriod;
use crate::pricing::{MultiplierDescription, describe_multiplier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of a single quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    /// Total value of the freelance engagement.
    pub project_value: Decimal,
    /// Maximum payout requested.
    pub coverage_amount: Decimal,
    /// Policy term. `None` prices without a term discount.
    #[serde(default)]
    pub coverage_period: Option<CoveragePeriod>,
    /// Risk appetite in `[0, 100]`, 0 being the most risk-averse.
    pub risk_tolerance: u8,
    /// Trust score in `[0, 100]`. `None` uses the configured default.
    #[serde(default)]
    pub reputation_score: Option<u8>,
    /// Key into the job-type risk weights.
    #[serde(default)]
    pub job_type: String,
    /// Key into the industry risk weights.
    #[serde(default)]
    pub industry: String,
}

impl PricingInput {
    /// Creates an input with a one month term, medium risk tolerance and the
    /// default reputation score.
    #[must_use]
    pub fn new(project_value: Decimal, coverage_amount: Decimal) -> Self {
        Self {
            project_value,
            coverage_amount,
            coverage_period: Some(CoveragePeriod::OneMonth),
            risk_tolerance: 50,
            reputation_score: None,
            job_type: String::new(),
            industry: String::new(),
        }
    }

    #[must_use]
    pub fn with_period(mut self, period: CoveragePeriod) -> Self {
        self.coverage_period = Some(period);
        self
    }

    #[must_use]
    pub fn with_risk_tolerance(mut self, risk_tolerance: u8) -> Self {
        self.risk_tolerance = risk_tolerance;
        self
    }

    #[must_use]
    pub fn with_reputation(mut self, reputation_score: u8) -> Self {
        self.reputation_score = Some(reputation_score);
        self
    }

    #[must_use]
    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Coverage amount relative to project value.
    ///
    /// Only meaningful once both amounts are known to be positive. A ratio too
    /// large to represent saturates.
    pub fn coverage_ratio(&self) -> Decimal {
        self.coverage_amount
            .checked_div(self.project_value)
            .unwrap_or(Decimal::MAX)
    }
}

/// The factors multiplied together to produce a premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub base_rate: Decimal,
    pub coverage_ratio_multiplier: Decimal,
    pub period_multiplier: Decimal,
    pub risk_multiplier: Decimal,
    pub reputation_adjustment: Decimal,
    pub market_volatility: Decimal,
    /// Job-type and industry weight, present only when it was priced in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_industry_adjustment: Option<Decimal>,
}

impl PremiumBreakdown {
    /// Unrounded product of every factor consumed, `None` on overflow.
    pub fn product(&self) -> Option<Decimal> {
        [
            self.coverage_ratio_multiplier,
            self.period_multiplier,
            self.risk_multiplier,
            self.reputation_adjustment,
            self.market_volatility,
        ]
        .into_iter()
        .chain(self.job_industry_adjustment)
        .try_fold(self.base_rate, |acc, factor| acc.checked_mul(factor))
    }
}

/// Job-type and industry risk weights looked up for a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub job_type_multiplier: Decimal,
    pub industry_multiplier: Decimal,
    pub combined: Decimal,
}

/// Outcome of pricing a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Premium in USDC, rounded to cents.
    pub premium: Decimal,
    pub breakdown: PremiumBreakdown,
    /// Advisory unless the configuration prices it in.
    pub risk_profile: RiskProfile,
}

impl PricingResult {
    /// Premium per unit of coverage, `None` for zero coverage or a rate too
    /// large to represent.
    pub fn premium_rate(&self, coverage_amount: Decimal) -> Option<Decimal> {
        self.premium.checked_div(coverage_amount)
    }

    /// Human readable description of every multiplier in the breakdown.
    pub fn describe(&self) -> Vec<MultiplierDescription> {
        let b = &self.breakdown;
        let mut descriptions = vec![
            describe_multiplier("Coverage ratio", b.coverage_ratio_multiplier, None),
            describe_multiplier("Coverage period", b.period_multiplier, None),
            describe_multiplier("Risk tolerance", b.risk_multiplier, None),
            describe_multiplier("Reputation", b.reputation_adjustment, None),
            describe_multiplier("Market volatility", b.market_volatility, None),
        ];
        if let Some(adjustment) = b.job_industry_adjustment {
            descriptions.push(describe_multiplier("Job and industry", adjustment, None));
        }
        descriptions
    }
}
