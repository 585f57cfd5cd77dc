use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::service::ComparisonService;
use super::{Category, ComparisonReport, Highlights, VehicleId, VehicleSnapshot};

/// Router builder exposing the vehicle comparison endpoint.
pub fn comparison_router(service: Arc<ComparisonService>) -> Router {
    Router::new()
        .route("/api/v1/vehicles/compare", post(compare_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    pub(crate) vehicles: Vec<VehicleSnapshot>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) winner: Option<VehicleId>,
    pub(crate) rankings: Vec<RankedVehicleView>,
}

/// One ranked row of the response, flattened for storefront rendering.
#[derive(Debug, Serialize)]
pub(crate) struct RankedVehicleView {
    pub(crate) rank: usize,
    pub(crate) vehicle: VehicleSnapshot,
    pub(crate) score: f64,
    pub(crate) best_categories: Vec<Category>,
    pub(crate) highlights: Highlights,
}

impl CompareResponse {
    pub(crate) fn from_report(report: ComparisonReport, generated_at: DateTime<Utc>) -> Self {
        let winner = report.winner().map(|entry| entry.vehicle.id.clone());
        let rankings = report
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RankedVehicleView {
                rank: index + 1,
                vehicle: entry.vehicle,
                score: entry.score,
                best_categories: entry.best_categories,
                highlights: entry.highlights,
            })
            .collect();

        Self {
            generated_at,
            winner,
            rankings,
        }
    }
}

pub(crate) async fn compare_handler(
    State(service): State<Arc<ComparisonService>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response {
    match service.compare(request.vehicles) {
        Ok(report) => {
            let body = CompareResponse::from_report(report, Utc::now());
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparisonLimits;
    use crate::workflows::comparison::domain::{FuelType, Transmission};
    use tower::ServiceExt;

    fn vehicle(id: &str, price: f64, year: i32) -> VehicleSnapshot {
        VehicleSnapshot {
            id: VehicleId(id.to_string()),
            label: format!("{year} {id}"),
            price,
            mileage: 12_000.0,
            year,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            engine: None,
            location: None,
            rating: 4.0,
            stock: Some(3),
        }
    }

    fn service() -> Arc<ComparisonService> {
        Arc::new(ComparisonService::standard(ComparisonLimits::default()))
    }

    async fn read_json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn compare_handler_ranks_and_names_a_winner() {
        let request = CompareRequest {
            vehicles: vec![vehicle("value", 18_000.0, 2024), vehicle("flagship", 32_000.0, 2022)],
        };

        let response = compare_handler(State(service()), axum::Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(
            payload.get("winner").and_then(serde_json::Value::as_str),
            Some("value")
        );
        let rankings = payload
            .get("rankings")
            .and_then(serde_json::Value::as_array)
            .expect("rankings present");
        assert_eq!(rankings.len(), 2);
        assert_eq!(
            rankings[0].get("rank").and_then(serde_json::Value::as_u64),
            Some(1)
        );
    }

    #[tokio::test]
    async fn compare_handler_rejects_undersized_sets() {
        let request = CompareRequest {
            vehicles: vec![vehicle("solo", 18_000.0, 2024)],
        };

        let response = compare_handler(State(service()), axum::Json(request)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = read_json_body(response).await;
        assert!(payload
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .contains("at least"));
    }

    #[tokio::test]
    async fn compare_route_accepts_json_payloads() {
        let router = comparison_router(service());
        let body = serde_json::to_vec(&json!({
            "vehicles": [
                {
                    "id": "veh-a",
                    "label": "2024 Aurora GT",
                    "price": 21_500,
                    "year": 2024,
                    "fuel_type": "hybrid",
                    "transmission": "automatic"
                },
                {
                    "id": "veh-b",
                    "label": "2022 Meridian LX",
                    "price": 26_900,
                    "mileage": 28_000,
                    "year": 2022,
                    "fuel_type": "gasoline",
                    "transmission": "cvt"
                }
            ]
        }))
        .expect("payload serializes");

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/vehicles/compare")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert!(payload.get("generated_at").is_some());
        assert_eq!(
            payload.get("winner").and_then(serde_json::Value::as_str),
            Some("veh-a")
        );
    }
}
