//! Request handlers.

use crate::error::ApiError;
use crate::models::{HealthResponse, PoolHealthResponse, QuoteResponse};
use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use gigshield_domain::pricing::{PricingConfig, compute_premium};
use gigshield_domain::solvency::assess_pool;
use gigshield_domain::value_objects::{PoolMetrics, PricingInput};
use tracing::{debug, info, warn};

/// Liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the pricing configuration quotes are computed with.
pub async fn get_pricing_config(State(state): State<AppState>) -> Json<PricingConfig> {
    Json(state.pricing.as_ref().clone())
}

/// Prices a quote.
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<PricingInput>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(input) = payload?;
    debug!(
        project_value = %input.project_value,
        coverage_amount = %input.coverage_amount,
        "Pricing quote"
    );

    let result = compute_premium(&input, &state.pricing).map_err(|e| {
        warn!(error = %e, "Quote rejected");
        ApiError::from(e)
    })?;

    info!(
        premium = %result.premium,
        period = ?input.coverage_period,
        job_type = %input.job_type,
        industry = %input.industry,
        "Quote computed"
    );

    Ok(Json(QuoteResponse {
        premium_rate: result.premium_rate(input.coverage_amount),
        descriptions: result.describe(),
        result,
        quoted_at: Utc::now(),
    }))
}

/// Derives pool health from indexer metrics.
pub async fn assess_pool_health(
    State(state): State<AppState>,
    payload: Result<Json<PoolMetrics>, JsonRejection>,
) -> Result<Json<PoolHealthResponse>, ApiError> {
    let Json(metrics) = payload?;
    let health = assess_pool(&metrics).map_err(|e| {
        warn!(error = %e, "Pool assessment rejected");
        ApiError::from(e)
    })?;
    let is_stale = health.is_stale(Utc::now(), state.max_metrics_age);

    if !health.has_sufficient_data() {
        warn!("Pool has no capital, fractions unavailable");
    }
    info!(
        reserve_health = %health.reserve_health,
        available_reserves = %health.available_reserves,
        is_stale,
        "Pool assessed"
    );

    Ok(Json(PoolHealthResponse {
        reserve_health_label: health.reserve_health.label().to_string(),
        needs_attention: health.reserve_health.needs_attention(),
        sufficient_data: health.has_sufficient_data(),
        is_stale,
        health,
    }))
}
