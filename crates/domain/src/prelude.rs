//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use gigshield_domain::prelude::*;
//! ```

// Enums
pub use crate::enums::{CoveragePeriod, ReserveHealth};

// Errors
pub use crate::error::{PricingError, SolvencyError};

// Pricing
pub use crate::pricing::{
    MultiplierDescription, PeriodMultipliers, PricingConfig, RiskWeightTable, compute_premium,
    describe_multiplier,
};

// Solvency
pub use crate::solvency::{assess_pool, classify_reserve_health, compute_allocation_fractions};

// Value objects
pub use crate::value_objects::percentage::Percentage;
pub use crate::value_objects::pool::{AllocationFractions, PoolHealth, PoolMetrics};
pub use crate::value_objects::quote::{PremiumBreakdown, PricingInput, PricingResult, RiskProfile};
