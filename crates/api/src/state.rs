use chrono::Duration;
use gigshield_domain::pricing::PricingConfig;
use std::sync::Arc;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingConfig>,
    pub max_metrics_age: Duration,
}

impl AppState {
    pub fn new(pricing: PricingConfig, max_metrics_age: Duration) -> Self {
        Self {
            pricing: Arc::new(pricing),
            max_metrics_age,
        }
    }
}
