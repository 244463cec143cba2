use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::big5::import::AnswerSheetImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Import(AnswerSheetImportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Import(err) => write!(f, "answer sheet import error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Import(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Import(err) => import_response(err),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Import failures are client errors; row-scoped ones echo the offending row
/// so a caller can point at the line in their export.
fn import_response(err: AnswerSheetImportError) -> Response {
    let row = match &err {
        AnswerSheetImportError::UnrecognizedAnswer { row, .. }
        | AnswerSheetImportError::Rejected { row, .. } => Some(*row),
        AnswerSheetImportError::Io(_) | AnswerSheetImportError::Csv(_) => None,
    };

    let mut body = json!({ "error": err.to_string() });
    if let Some(row) = row {
        body["row"] = json!(row);
    }
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AnswerSheetImportError> for AppError {
    fn from(value: AnswerSheetImportError) -> Self {
        Self::Import(value)
    }
}
