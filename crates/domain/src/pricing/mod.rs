//! Premium pricing.
//!
//! A premium is the product of a base rate and a chain of independent
//! multipliers, rounded to cents:
//!
//! `premium = base_rate * coverage_ratio * period * risk * reputation * market_volatility`
//!
//! Job-type and industry weights are looked up for every quote but only
//! enter the product when [`PricingConfig::apply_risk_adjustment`] is set.

pub mod config;
pub mod describe;
pub mod engine;
pub mod multipliers;
pub mod risk_weights;

pub use config::{PeriodMultipliers, PricingConfig};
pub use describe::{ChangeDirection, MultiplierDescription, describe_multiplier};
pub use engine::{compute_premium, compute_premium_by_period};
pub use risk_weights::RiskWeightTable;
