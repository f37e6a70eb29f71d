use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Term of an insurance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl CoveragePeriod {
    /// All periods, shortest first.
    pub const ALL: [CoveragePeriod; 4] = [
        CoveragePeriod::OneMonth,
        CoveragePeriod::ThreeMonths,
        CoveragePeriod::SixMonths,
        CoveragePeriod::OneYear,
    ];

    /// Length of the term in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Short selector label as used by quote forms ("1m", "3m", "6m", "1y").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
        }
    }
}

impl fmt::Display for CoveragePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoveragePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1m" | "1month" | "1_month" | "one_month" => Ok(Self::OneMonth),
            "3m" | "3months" | "3_months" | "three_months" => Ok(Self::ThreeMonths),
            "6m" | "6months" | "6_months" | "six_months" => Ok(Self::SixMonths),
            "1y" | "12m" | "1year" | "1_year" | "one_year" => Ok(Self::OneYear),
            other => Err(format!("unknown coverage period: {other}")),
        }
    }
}

/// Categorical health of a risk pool's reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReserveHealth {
    Excellent,
    Good,
    Fair,
    AtRisk,
}

impl ReserveHealth {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::AtRisk => "At Risk",
        }
    }

    /// Whether policyholders and stakers should be warned.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Fair | Self::AtRisk)
    }
}

impl fmt::Display for ReserveHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_period_parses_short_and_long_forms() {
        assert_eq!("1m".parse::<CoveragePeriod>(), Ok(CoveragePeriod::OneMonth));
        assert_eq!(
            "three_months".parse::<CoveragePeriod>(),
            Ok(CoveragePeriod::ThreeMonths)
        );
        assert_eq!(" 6M ".parse::<CoveragePeriod>(), Ok(CoveragePeriod::SixMonths));
        assert_eq!("12m".parse::<CoveragePeriod>(), Ok(CoveragePeriod::OneYear));
        assert!("2w".parse::<CoveragePeriod>().is_err());
    }

    #[test]
    fn test_coverage_period_serde_uses_snake_case() {
        let json = serde_json::to_string(&CoveragePeriod::OneYear).unwrap();
        assert_eq!(json, "\"one_year\"");
        let back: CoveragePeriod = serde_json::from_str("\"six_months\"").unwrap();
        assert_eq!(back, CoveragePeriod::SixMonths);
    }

    #[test]
    fn test_reserve_health_attention() {
        assert!(!ReserveHealth::Excellent.needs_attention());
        assert!(!ReserveHealth::Good.needs_attention());
        assert!(ReserveHealth::Fair.needs_attention());
        assert!(ReserveHealth::AtRisk.needs_attention());
        assert_eq!(ReserveHealth::AtRisk.to_string(), "At Risk");
    }
}
