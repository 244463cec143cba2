use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::bank::QuestionBank;
use super::domain::{AssessmentId, AssessmentStatus};
use super::repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, PublishError, RepositoryError,
    ResultEnvelope, ResultPublisher,
};
use super::scoring::{ScoringConfig, ScoringEngine, ScoringError, TestResult};
use super::session::{ResponseSheet, SessionError};

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("bfi-{id:06}"))
}

/// Service facade composing the question bank, scoring engine, repository,
/// and result publisher.
pub struct AssessmentService<R, P> {
    bank: &'static QuestionBank,
    engine: ScoringEngine,
    repository: Arc<R>,
    publisher: Arc<P>,
}

impl<R, P> AssessmentService<R, P>
where
    R: AssessmentRepository + 'static,
    P: ResultPublisher + 'static,
{
    pub fn new(repository: Arc<R>, publisher: Arc<P>, config: ScoringConfig) -> Self {
        Self {
            bank: QuestionBank::global(),
            engine: ScoringEngine::new(config),
            repository,
            publisher,
        }
    }

    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    /// Open a fresh assessment session.
    pub fn start(&self) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            sheet: ResponseSheet::new(),
            status: AssessmentStatus::InProgress,
            result: None,
            started_at: Utc::now(),
            scored_at: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Record (or replace) one answer. Rejected once the sheet is scored;
    /// a retake must go through `reset`.
    pub fn record_answer(
        &self,
        assessment_id: &AssessmentId,
        question_id: u16,
        raw_score: u8,
    ) -> Result<AssessmentStatusView, AssessmentServiceError> {
        let mut record = self.fetch(assessment_id)?;

        if record.status == AssessmentStatus::Scored {
            return Err(AssessmentServiceError::AlreadyScored);
        }

        record.sheet.record(self.bank, question_id, raw_score)?;
        record.status = record.sheet.status(self.bank);
        let view = record.status_view(self.bank.len());
        self.repository.update(record)?;

        Ok(view)
    }

    /// Score a completed sheet. Runs the engine exactly once per completion:
    /// later calls return the cached result, and the first success publishes
    /// the payload to the backend collaborator.
    pub fn finalize(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<TestResult, AssessmentServiceError> {
        let mut record = self.fetch(assessment_id)?;

        if let Some(result) = &record.result {
            return Ok(result.clone());
        }

        let result = self.engine.score(&record.sheet, self.bank)?;

        record.status = AssessmentStatus::Scored;
        record.result = Some(result.clone());
        record.scored_at = Some(Utc::now());
        self.repository.update(record)?;

        self.publisher.publish(ResultEnvelope {
            assessment_id: assessment_id.clone(),
            result: result.clone(),
        })?;

        info!(assessment_id = %assessment_id.0, "assessment scored and published");

        Ok(result)
    }

    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.fetch(assessment_id)
    }

    /// Clear all state for a retake. Idempotent.
    pub fn reset(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentStatusView, AssessmentServiceError> {
        let mut record = self.fetch(assessment_id)?;

        record.sheet.reset();
        record.status = AssessmentStatus::InProgress;
        record.result = None;
        record.scored_at = None;
        let view = record.status_view(self.bank.len());
        self.repository.update(record)?;

        Ok(view)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("assessment already scored; reset to retake")]
    AlreadyScored,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
