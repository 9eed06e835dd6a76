use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::CasePayload;
use super::policy::{PolicyConfig, PolicyError, PolicyStore};
use super::screening::ScreeningProvider;
use super::service::{EthicsService, EthicsServiceError};
use super::EvaluationError;

/// Router builder exposing the screening engine, the policy document, and
/// direct watchlist search.
pub fn ethics_router<S, P>(service: Arc<EthicsService<S, P>>) -> Router
where
    S: ScreeningProvider + 'static,
    P: PolicyStore + 'static,
{
    Router::new()
        .route("/api/v1/ethics/evaluate", post(evaluate_handler::<S, P>))
        .route(
            "/api/v1/policy",
            get(read_policy_handler::<S, P>).put(replace_policy_handler::<S, P>),
        )
        .route(
            "/api/v1/screening/search",
            get(screening_search_handler::<S, P>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<S, P>(
    State(service): State<Arc<EthicsService<S, P>>>,
    axum::Json(payload): axum::Json<CasePayload>,
) -> Response
where
    S: ScreeningProvider + 'static,
    P: PolicyStore + 'static,
{
    match service.evaluate(&payload).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(EthicsServiceError::Evaluation(EvaluationError::Policy(error)))
        | Err(EthicsServiceError::Policy(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn read_policy_handler<S, P>(
    State(service): State<Arc<EthicsService<S, P>>>,
) -> Response
where
    S: ScreeningProvider + 'static,
    P: PolicyStore + 'static,
{
    match service.policy() {
        Ok(policy) => (StatusCode::OK, axum::Json(policy)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn replace_policy_handler<S, P>(
    State(service): State<Arc<EthicsService<S, P>>>,
    axum::Json(policy): axum::Json<PolicyConfig>,
) -> Response
where
    S: ScreeningProvider + 'static,
    P: PolicyStore + 'static,
{
    match service.update_policy(policy) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "status": "updated" }))).into_response(),
        Err(error @ PolicyError::InvertedThresholds { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScreeningQuery {
    pub(crate) name: String,
}

pub(crate) async fn screening_search_handler<S, P>(
    State(service): State<Arc<EthicsService<S, P>>>,
    Query(query): Query<ScreeningQuery>,
) -> Response
where
    S: ScreeningProvider + 'static,
    P: PolicyStore + 'static,
{
    match service.screen(&query.name).await {
        Ok(hit) => (StatusCode::OK, axum::Json(hit)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
