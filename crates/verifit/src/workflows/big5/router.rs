use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::chart::{Point, RadarChart};
use super::domain::AssessmentId;
use super::repository::{AssessmentRepository, RepositoryError, ResultPublisher};
use super::scoring::ScoringError;
use super::service::{AssessmentService, AssessmentServiceError};

// Default canvas geometry mirrored by the web client.
const CHART_CENTER: Point = Point { x: 160.0, y: 160.0 };
const CHART_RADIUS: f64 = 120.0;

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: u16,
    pub(crate) score: u8,
}

/// Router builder exposing the assessment workflow over HTTP.
pub fn assessment_router<R, P>(service: Arc<AssessmentService<R, P>>) -> Router
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(start_handler::<R, P>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/answers",
            post(answer_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/result",
            post(finalize_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/chart",
            get(chart_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/reset",
            post(reset_handler::<R, P>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    match service.start() {
        Ok(record) => {
            let view = record.status_view(service.bank().len());
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view(service.bank().len());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(assessment_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.record_answer(&id, request.question_id, request.score) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn finalize_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.finalize(&id) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn chart_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            // An unscored assessment still gets the axes/rings frame; the
            // data polygon is simply absent.
            let scores = record
                .result
                .as_ref()
                .map(|result| result.domain_scores())
                .unwrap_or_default();
            let chart = RadarChart::layout(&scores, CHART_CENTER, CHART_RADIUS);
            (StatusCode::OK, axum::Json(chart)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.reset(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Session(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Scoring(ScoringError::IncompleteResponseSet { .. }) => {
            StatusCode::CONFLICT
        }
        AssessmentServiceError::AlreadyScored => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
