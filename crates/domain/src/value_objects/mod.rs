pub mod percentage;
pub mod pool;
pub mod quote;

pub use percentage::Percentage;
pub use pool::{AllocationFractions, PoolHealth, PoolMetrics};
pub use quote::{PremiumBreakdown, PricingInput, PricingResult, RiskProfile};
