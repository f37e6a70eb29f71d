use crate::error::PricingError;
use crate::value_objects::quote::RiskProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Risk multipliers keyed by job type and by industry.
///
/// Keys are free-form so new categories can be added through configuration.
/// A key missing from the table is neutral (multiplier 1.0), never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeightTable {
    pub job_types: BTreeMap<String, Decimal>,
    pub industries: BTreeMap<String, Decimal>,
}

impl Default for RiskWeightTable {
    fn default() -> Self {
        let job_types = [
            ("development", Decimal::ONE),
            ("design", Decimal::new(90, 2)),
            ("writing", Decimal::new(80, 2)),
            ("marketing", Decimal::new(110, 2)),
            ("consulting", Decimal::new(120, 2)),
            ("data_analysis", Decimal::new(105, 2)),
            ("video_production", Decimal::new(115, 2)),
            ("translation", Decimal::new(85, 2)),
        ];
        let industries = [
            ("technology", Decimal::ONE),
            ("finance", Decimal::new(130, 2)),
            ("healthcare", Decimal::new(125, 2)),
            ("education", Decimal::new(90, 2)),
            ("ecommerce", Decimal::new(110, 2)),
            ("entertainment", Decimal::new(105, 2)),
            ("real_estate", Decimal::new(115, 2)),
            ("crypto", Decimal::new(150, 2)),
        ];

        Self {
            job_types: job_types
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            industries: industries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

impl RiskWeightTable {
    /// A table with no entries; every lookup is neutral.
    pub fn empty() -> Self {
        Self {
            job_types: BTreeMap::new(),
            industries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_job_type(mut self, key: impl Into<String>, multiplier: Decimal) -> Self {
        self.job_types.insert(key.into(), multiplier);
        self
    }

    #[must_use]
    pub fn with_industry(mut self, key: impl Into<String>, multiplier: Decimal) -> Self {
        self.industries.insert(key.into(), multiplier);
        self
    }

    pub fn job_type_multiplier(&self, job_type: &str) -> Decimal {
        self.job_types.get(job_type).copied().unwrap_or(Decimal::ONE)
    }

    pub fn industry_multiplier(&self, industry: &str) -> Decimal {
        self.industries.get(industry).copied().unwrap_or(Decimal::ONE)
    }

    /// Combined job-type and industry weight for a quote.
    pub fn risk_profile(&self, job_type: &str, industry: &str) -> RiskProfile {
        let job_type_multiplier = self.job_type_multiplier(job_type);
        let industry_multiplier = self.industry_multiplier(industry);
        RiskProfile {
            job_type_multiplier,
            industry_multiplier,
            combined: job_type_multiplier
                .checked_mul(industry_multiplier)
                .unwrap_or(Decimal::MAX),
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let entries = self
            .job_types
            .iter()
            .map(|(k, v)| ("job type", k, v))
            .chain(self.industries.iter().map(|(k, v)| ("industry", k, v)));

        for (kind, key, multiplier) in entries {
            if *multiplier <= Decimal::ZERO {
                return Err(PricingError::InvalidConfig(format!(
                    "{kind} weight for '{key}' must be positive, got {multiplier}"
                )));
            }
        }
        Ok(())
    }
}
