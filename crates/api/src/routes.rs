//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/pricing/config", get(handlers::get_pricing_config))
        .route("/quotes", post(handlers::create_quote))
        .route("/pools/health", post(handlers::assess_pool_health));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use chrono::Duration;
    use axum::http::{Request, StatusCode, header};
    use gigshield_domain::pricing::PricingConfig;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(PricingConfig::default(), Duration::hours(1)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_quote() {
        let (status, body) = send(post_json(
            "/api/v1/quotes",
            json!({
                "project_value": "1000",
                "coverage_amount": "1000",
                "coverage_period": "one_year",
                "risk_tolerance": 50,
                "reputation_score": 75,
                "job_type": "design",
                "industry": "education"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["premium"], "9.42");
        assert_eq!(body["breakdown"]["period_multiplier"], "0.80");
        assert!(body["breakdown"].get("job_industry_adjustment").is_none());
        assert_eq!(body["descriptions"].as_array().unwrap().len(), 5);
        assert!(body["quoted_at"].is_string());
    }

    #[tokio::test]
    async fn test_quote_rejects_zero_project_value() {
        let (status, body) = send(post_json(
            "/api/v1/quotes",
            json!({"project_value": "0", "coverage_amount": "1000", "risk_tolerance": 50}),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"],
            "Project value and coverage amount must be positive numbers"
        );
        assert_eq!(body["code"], 422);
    }

    #[tokio::test]
    async fn test_quote_rejects_out_of_range_score() {
        let (status, _) = send(post_json(
            "/api/v1/quotes",
            json!({"project_value": "1000", "coverage_amount": "1000", "risk_tolerance": 140}),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_quote_rejects_malformed_body() {
        let (status, body) = send(post_json(
            "/api/v1/quotes",
            json!({"project_value": "1000"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_pool_health() {
        let (status, body) = send(post_json(
            "/api/v1/pools/health",
            json!({
                "total_capital": "1000",
                "reserve_ratio": "0.25",
                "expected_liabilities": "400",
                "claim_payouts": "50",
                "active_stakers": 7
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reserve_health"], "fair");
        assert_eq!(body["reserve_health_label"], "Fair");
        assert_eq!(body["needs_attention"], true);
        assert_eq!(body["sufficient_data"], true);
        assert_eq!(body["is_stale"], true);
    }

    #[tokio::test]
    async fn test_pool_health_with_zero_capital() {
        let (status, body) = send(post_json(
            "/api/v1/pools/health",
            json!({
                "total_capital": "0",
                "reserve_ratio": "0.6",
                "expected_liabilities": "0",
                "claim_payouts": "0",
                "last_updated": chrono::Utc::now().to_rfc3339()
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reserve_health"], "excellent");
        assert!(body["liability_coverage_fraction"].is_null());
        assert_eq!(body["sufficient_data"], false);
        assert_eq!(body["is_stale"], false);
    }

    #[tokio::test]
    async fn test_pool_health_overflow_is_rejected() {
        let (status, body) = send(post_json(
            "/api/v1/pools/health",
            json!({
                "total_capital": "79228162514264337593543950335",
                "reserve_ratio": "2",
                "expected_liabilities": "0",
                "claim_payouts": "0"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "available reserves is too large to represent");
    }

    #[tokio::test]
    async fn test_quote_with_tiny_coverage_omits_rate() {
        let (status, body) = send(post_json(
            "/api/v1/quotes",
            json!({
                "project_value": "1000",
                "coverage_amount": "0.0000000000000000000000000001",
                "risk_tolerance": 50
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["premium_rate"].is_null());
    }

    #[tokio::test]
    async fn test_pricing_config() {
        let request = Request::get("/api/v1/pricing/config")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["base_rate"], "10");
        assert_eq!(body["apply_risk_adjustment"], false);
    }
}
