use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, AssessmentStatus};
use super::scoring::TestResult;
use super::session::ResponseSheet;

/// Repository record for one assessment: the live sheet, the workflow
/// status, and the cached result once scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub sheet: ResponseSheet,
    pub status: AssessmentStatus,
    pub result: Option<TestResult>,
    pub started_at: DateTime<Utc>,
    pub scored_at: Option<DateTime<Utc>>,
}

impl AssessmentRecord {
    pub fn status_view(&self, total_questions: usize) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.assessment_id.clone(),
            status: self.status.label(),
            answered: self.sheet.answered(),
            expected: total_questions,
            scores: self.result.as_ref().map(|result| {
                result
                    .domain_scores()
                    .into_iter()
                    .map(|(domain, score)| DomainScoreView {
                        domain: domain.name(),
                        score,
                        band: result
                            .trait_report(domain)
                            .map(|report| report.band.label())
                            .unwrap_or("neutral"),
                    })
                    .collect()
            }),
        }
    }
}

/// Sanitized status representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub status: &'static str,
    pub answered: usize,
    pub expected: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<DomainScoreView>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainScoreView {
    pub domain: &'static str,
    pub score: u8,
    pub band: &'static str,
}

/// Storage abstraction so the service facade can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Completed-result payload delivered to the platform backend (the external
/// persistence collaborator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub assessment_id: AssessmentId,
    pub result: TestResult,
}

/// Outbound hook carrying finished results to persistence or notification
/// adapters.
pub trait ResultPublisher: Send + Sync {
    fn publish(&self, envelope: ResultEnvelope) -> Result<(), PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("result transport unavailable: {0}")]
    Transport(String),
}
