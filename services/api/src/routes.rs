use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use showroom::workflows::comparison::ComparisonService;
use showroom::workflows::financing::FinancingPlan;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct FinancingQuoteRequest {
    pub(crate) price: f64,
    #[serde(default)]
    pub(crate) down_payment: f64,
    pub(crate) annual_rate_percent: f64,
    pub(crate) term_months: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct FinancingQuoteResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) price: f64,
    pub(crate) down_payment: f64,
    pub(crate) principal: f64,
    pub(crate) annual_rate_percent: f64,
    pub(crate) term_months: u32,
    pub(crate) monthly_payment: f64,
    pub(crate) total_interest: f64,
    pub(crate) total_to_pay: f64,
    pub(crate) total_with_down_payment: f64,
}

pub(crate) fn with_storefront_routes(service: Arc<ComparisonService>) -> axum::Router {
    showroom::workflows::comparison::comparison_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/financing/quote",
            axum::routing::post(financing_quote_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Quote endpoint backing the storefront's live financing calculator.
///
/// Mirrors the calculator's degrade-don't-error contract: malformed or
/// degenerate numbers produce a zero quote with status 200, never a 4xx.
pub(crate) async fn financing_quote_endpoint(
    Json(payload): Json<FinancingQuoteRequest>,
) -> Json<FinancingQuoteResponse> {
    let FinancingQuoteRequest {
        price,
        down_payment,
        annual_rate_percent,
        term_months,
    } = payload;

    let plan = FinancingPlan::for_vehicle(price, down_payment, annual_rate_percent, term_months);

    Json(FinancingQuoteResponse {
        generated_at: Utc::now(),
        price,
        down_payment: plan.down_payment,
        principal: plan.principal,
        annual_rate_percent,
        term_months,
        monthly_payment: plan.quote.monthly_payment,
        total_interest: plan.quote.total_interest,
        total_to_pay: plan.quote.total_to_pay,
        total_with_down_payment: plan.total_with_down_payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn financing_quote_endpoint_returns_amortized_payment() {
        let request = FinancingQuoteRequest {
            price: 25_000.0,
            down_payment: 5_000.0,
            annual_rate_percent: 8.5,
            term_months: 36,
        };

        let Json(body) = financing_quote_endpoint(Json(request)).await;

        assert_eq!(body.principal, 20_000.0);
        assert!((body.monthly_payment - 631.35).abs() < 0.01);
        let reconstructed = body.monthly_payment * 36.0 + body.down_payment;
        assert!((reconstructed - body.total_with_down_payment).abs() < 1e-6);
    }

    #[tokio::test]
    async fn financing_quote_endpoint_degrades_on_zero_term() {
        let request = FinancingQuoteRequest {
            price: 25_000.0,
            down_payment: 0.0,
            annual_rate_percent: 8.5,
            term_months: 0,
        };

        let Json(body) = financing_quote_endpoint(Json(request)).await;

        assert_eq!(body.monthly_payment, 0.0);
        assert_eq!(body.total_to_pay, 0.0);
        assert!(body.total_interest.is_finite());
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
    }
}
