use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use verifit::error::AppError;
use verifit::workflows::big5::{
    assessment_router, AnswerSheetImporter, AssessmentRepository, AssessmentService, QuestionBank,
    ResultPublisher, ScoringConfig, ScoringEngine, ScoringError, TestResult,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerSheetScoreRequest {
    /// Raw CSV export with `Question` and `Answer` columns.
    pub(crate) answer_sheet_csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerSheetScoreResponse {
    pub(crate) answered: usize,
    pub(crate) expected: usize,
    pub(crate) result: TestResult,
}

pub(crate) fn with_assessment_routes<R, P>(
    service: Arc<AssessmentService<R, P>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/answer-sheets/score",
            axum::routing::post(answer_sheet_score_endpoint),
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

/// Stateless scoring for legacy answer-sheet exports. The sheet never touches
/// the repository; clients that want a persisted session use the assessment
/// routes instead.
pub(crate) async fn answer_sheet_score_endpoint(
    Json(payload): Json<AnswerSheetScoreRequest>,
) -> axum::response::Response {
    let bank = QuestionBank::global();
    let reader = Cursor::new(payload.answer_sheet_csv.into_bytes());
    let sheet = match AnswerSheetImporter::sheet_from_reader(reader, bank) {
        Ok(sheet) => sheet,
        Err(err) => return AppError::from(err).into_response(),
    };

    let (answered, expected) = sheet.progress(bank);
    let engine = ScoringEngine::new(ScoringConfig::default());
    match engine.score(&sheet, bank) {
        Ok(result) => Json(AnswerSheetScoreResponse {
            answered,
            expected,
            result,
        })
        .into_response(),
        Err(err @ ScoringError::IncompleteResponseSet { .. }) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}
