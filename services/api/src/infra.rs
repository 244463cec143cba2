use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use verifit::workflows::big5::{
    AssessmentId, AssessmentRecord, AssessmentRepository, PublishError, RepositoryError,
    ResultEnvelope, ResultPublisher,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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
        if guard.contains_key(&record.assessment_id) {
            guard.insert(record.assessment_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResultPublisher {
    envelopes: Arc<Mutex<Vec<ResultEnvelope>>>,
}

impl ResultPublisher for InMemoryResultPublisher {
    fn publish(&self, envelope: ResultEnvelope) -> Result<(), PublishError> {
        let mut guard = self.envelopes.lock().expect("publisher mutex poisoned");
        guard.push(envelope);
        Ok(())
    }
}

impl InMemoryResultPublisher {
    pub(crate) fn envelopes(&self) -> Vec<ResultEnvelope> {
        self.envelopes.lock().expect("publisher mutex poisoned").clone()
    }
}
