use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use super::domain::DecisionRequest;
use super::evaluator::{DecisionEngine, EngineError};

/// Router exposing the legacy evaluation contract.
pub fn decision_router(engine: Arc<DecisionEngine>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/dss/evaluar", post(evaluate_handler))
        .with_state(engine)
}

pub(crate) async fn health_handler() -> &'static str {
    "Backend DSS funcionando correctamente"
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<DecisionEngine>>,
    Json(request): Json<DecisionRequest>,
) -> Response {
    match engine.evaluate(&request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(EngineError::Validation(validation)) => {
            let payload = json!({
                "error": "BAD_REQUEST",
                "mensaje": validation.to_string(),
                "errores": validation.violations,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "decision evaluation failed");
            let payload = json!({
                "error": "INTERNAL_ERROR",
                "mensaje": "Ocurrió un error interno en el backend.",
                "detalle": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::{Alternative, Criterion};

    fn sample_request(mode: &str) -> DecisionRequest {
        DecisionRequest {
            mode: Some(mode.to_string()),
            alpha: None,
            alternatives: vec![
                Alternative {
                    name: "plan_a".to_string(),
                    values: [("costo".to_string(), Some(100.0))].into_iter().collect(),
                },
                Alternative {
                    name: "plan_b".to_string(),
                    values: [("costo".to_string(), Some(80.0))].into_iter().collect(),
                },
            ],
            criteria: vec![Criterion {
                name: "costo".to_string(),
                weight: Some(1.0),
                kind: "costo".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn evaluate_handler_returns_ranking_for_valid_requests() {
        let engine = Arc::new(DecisionEngine::new());

        let response = evaluate_handler(
            State(engine),
            axum::Json(sample_request("maximin")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn evaluate_handler_maps_validation_failures_to_bad_request() {
        let engine = Arc::new(DecisionEngine::new());
        let mut request = sample_request("maximin");
        request.criteria.clear();

        let response = evaluate_handler(State(engine), axum::Json(request)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_handler_reports_the_legacy_banner() {
        assert_eq!(health_handler().await, "Backend DSS funcionando correctamente");
    }
}
