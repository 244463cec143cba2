use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::big5::bank::QuestionBank;
use crate::workflows::big5::domain::{AssessmentId, Polarity, TraitDomain};
use crate::workflows::big5::repository::{
    AssessmentRecord, AssessmentRepository, PublishError, RepositoryError, ResultEnvelope,
    ResultPublisher,
};
use crate::workflows::big5::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::big5::service::AssessmentService;
use crate::workflows::big5::session::ResponseSheet;

pub(super) fn bank() -> &'static QuestionBank {
    QuestionBank::global()
}

/// Engine with reverse-key inversion on (the default configuration).
pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

/// Engine pinning the legacy behavior: raw scores summed regardless of
/// keying.
pub(super) fn raw_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig {
        invert_reverse_keyed: false,
    })
}

/// Every question answered with the same raw score.
pub(super) fn uniform_sheet(raw: u8) -> ResponseSheet {
    let mut sheet = ResponseSheet::new();
    for question in bank().questions() {
        sheet.record(bank(), question.id, raw).expect("valid answer");
    }
    sheet
}

/// Direct-keyed items answered `direct`, reverse-keyed items `reverse`.
pub(super) fn keyed_sheet(direct: u8, reverse: u8) -> ResponseSheet {
    let mut sheet = ResponseSheet::new();
    for question in bank().questions() {
        let raw = match question.polarity {
            Polarity::Direct => direct,
            Polarity::Reverse => reverse,
        };
        sheet.record(bank(), question.id, raw).expect("valid answer");
    }
    sheet
}

/// Complete sheet answering `target` items so the first `first_half` of its
/// 24 items score `low_raw` and the rest `high_raw`; every other domain gets
/// a flat 3.
pub(super) fn split_domain_sheet(
    target: TraitDomain,
    first_half: usize,
    low_raw: u8,
    high_raw: u8,
) -> ResponseSheet {
    let mut sheet = ResponseSheet::new();
    let mut seen = 0usize;
    for question in bank().questions() {
        let raw = if question.domain == target {
            let raw = if seen < first_half { low_raw } else { high_raw };
            seen += 1;
            raw
        } else {
            3
        };
        sheet.record(bank(), question.id, raw).expect("valid answer");
    }
    sheet
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryPublisher>,
    Arc<MemoryRepository>,
    Arc<MemoryPublisher>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let publisher = Arc::new(MemoryPublisher::default());
    let service = AssessmentService::new(
        repository.clone(),
        publisher.clone(),
        ScoringConfig::default(),
    );
    (service, repository, publisher)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryPublisher {
    envelopes: Arc<Mutex<Vec<ResultEnvelope>>>,
}

impl MemoryPublisher {
    pub(super) fn envelopes(&self) -> Vec<ResultEnvelope> {
        self.envelopes.lock().expect("publisher mutex poisoned").clone()
    }
}

impl ResultPublisher for MemoryPublisher {
    fn publish(&self, envelope: ResultEnvelope) -> Result<(), PublishError> {
        self.envelopes
            .lock()
            .expect("publisher mutex poisoned")
            .push(envelope);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
