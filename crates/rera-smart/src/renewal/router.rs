use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::advisory::GenerativeClient;
use super::domain::UnitProfile;
use super::intake::RenewalSubmission;
use super::service::RenewalAssessmentService;

/// Router builder exposing HTTP endpoints for assessment and estimation.
pub fn renewal_router<C>(service: Arc<RenewalAssessmentService<C>>) -> Router
where
    C: GenerativeClient + 'static,
{
    Router::new()
        .route("/api/v1/renewal/assessments", post(assess_handler::<C>))
        .route("/api/v1/renewal/estimates", post(estimate_handler::<C>))
        .with_state(service)
}

/// Assessment request body: the submission fields inline plus a flag asking
/// for the advisory pass.
#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(flatten)]
    submission: RenewalSubmission,
    #[serde(default)]
    include_advice: bool,
}

pub(crate) async fn assess_handler<C>(
    State(service): State<Arc<RenewalAssessmentService<C>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    C: GenerativeClient + 'static,
{
    let view = service
        .assess(&request.submission, request.include_advice)
        .await;
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn estimate_handler<C>(
    State(service): State<Arc<RenewalAssessmentService<C>>>,
    axum::Json(unit): axum::Json<UnitProfile>,
) -> Response
where
    C: GenerativeClient + 'static,
{
    let estimated_rent = service.estimate_market_rent(&unit).await;
    let payload = json!({ "estimated_rent": estimated_rent });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
