use chrono::{DateTime, Utc};
use gigshield_domain::pricing::MultiplierDescription;
use gigshield_domain::value_objects::{PoolHealth, PricingResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// A priced quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub result: PricingResult,
    /// Premium per unit of coverage.
    pub premium_rate: Option<Decimal>,
    pub descriptions: Vec<MultiplierDescription>,
    pub quoted_at: DateTime<Utc>,
}

/// Derived pool health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolHealthResponse {
    #[serde(flatten)]
    pub health: PoolHealth,
    pub reserve_health_label: String,
    pub needs_attention: bool,
    pub sufficient_data: bool,
    pub is_stale: bool,
}
