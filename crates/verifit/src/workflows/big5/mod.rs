//! Big Five assessment workflow: inventory, response collection, scoring,
//! interpretation, and chart geometry, plus the service facade and HTTP
//! router that expose them to the platform.

pub mod bank;
pub mod chart;
pub mod domain;
pub mod import;
pub mod interpretation;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use bank::{QuestionBank, INVENTORY_SIZE, ITEMS_PER_DOMAIN, ITEMS_PER_FACET};
pub use chart::{AxisArm, Point, RadarChart, ScoreMarker};
pub use domain::{
    AssessmentId, AssessmentStatus, Choice, Polarity, Question, Response, TraitDomain, CHOICES,
    FACETS_PER_DOMAIN,
};
pub use import::{AnswerSheetImportError, AnswerSheetImporter};
pub use interpretation::{interpretation_for, InterpretationError};
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, DomainScoreView, PublishError,
    RepositoryError, ResultEnvelope, ResultPublisher,
};
pub use router::assessment_router;
pub use scoring::{
    Band, ScoringAnomaly, ScoringConfig, ScoringEngine, ScoringError, TestResult, TraitReport,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{ResponseSheet, SessionError};
