use std::sync::Arc;

use super::common::{bank, build_service, MemoryPublisher, UnavailableRepository};
use crate::workflows::big5::domain::AssessmentStatus;
use crate::workflows::big5::repository::RepositoryError;
use crate::workflows::big5::scoring::{Band, ScoringConfig, ScoringError};
use crate::workflows::big5::service::{AssessmentService, AssessmentServiceError};
use crate::workflows::big5::session::SessionError;

#[test]
fn start_opens_an_empty_in_progress_session() {
    let (service, _, _) = build_service();
    let record = service.start().expect("session opened");

    assert_eq!(record.status, AssessmentStatus::InProgress);
    assert_eq!(record.sheet.answered(), 0);
    assert!(record.result.is_none());
    assert!(record.scored_at.is_none());

    let fetched = service.get(&record.assessment_id).expect("fetched");
    assert_eq!(fetched.assessment_id, record.assessment_id);
}

#[test]
fn answers_advance_progress_and_replace_on_revisit() {
    let (service, _, _) = build_service();
    let record = service.start().expect("session opened");
    let id = record.assessment_id;

    let view = service.record_answer(&id, 1, 4).expect("answer recorded");
    assert_eq!(view.answered, 1);
    assert_eq!(view.expected, 120);
    assert_eq!(view.status, "in_progress");

    let view = service.record_answer(&id, 1, 2).expect("answer replaced");
    assert_eq!(view.answered, 1);

    let stored = service.get(&id).expect("fetched");
    assert_eq!(stored.sheet.response(1).expect("answered").raw_score, 2);
}

#[test]
fn invalid_answers_surface_session_errors() {
    let (service, _, _) = build_service();
    let id = service.start().expect("session opened").assessment_id;

    match service.record_answer(&id, 999, 3) {
        Err(AssessmentServiceError::Session(SessionError::UnknownQuestion(999))) => {}
        other => panic!("expected unknown-question rejection, got {other:?}"),
    }

    match service.record_answer(&id, 1, 9) {
        Err(AssessmentServiceError::Session(SessionError::InvalidScore { .. })) => {}
        other => panic!("expected invalid-score rejection, got {other:?}"),
    }
}

#[test]
fn finalize_rejects_an_incomplete_sheet() {
    let (service, _, publisher) = build_service();
    let id = service.start().expect("session opened").assessment_id;
    service.record_answer(&id, 1, 3).expect("answer recorded");

    match service.finalize(&id) {
        Err(AssessmentServiceError::Scoring(ScoringError::IncompleteResponseSet {
            answered,
            expected,
        })) => {
            assert_eq!(answered, 1);
            assert_eq!(expected, 120);
        }
        other => panic!("expected incomplete-set rejection, got {other:?}"),
    }
    assert!(publisher.envelopes().is_empty());
}

fn answer_everything(
    service: &AssessmentService<super::common::MemoryRepository, MemoryPublisher>,
    id: &crate::workflows::big5::domain::AssessmentId,
    raw: u8,
) {
    for question in bank().questions() {
        service
            .record_answer(id, question.id, raw)
            .expect("answer recorded");
    }
}

#[test]
fn completing_the_sheet_then_finalizing_scores_and_publishes_once() {
    let (service, _, publisher) = build_service();
    let id = service.start().expect("session opened").assessment_id;

    answer_everything(&service, &id, 3);
    let record = service.get(&id).expect("fetched");
    assert_eq!(record.status, AssessmentStatus::Completed);

    let result = service.finalize(&id).expect("scored");
    assert_eq!(result.traits.len(), 5);
    assert!(result
        .traits
        .values()
        .all(|report| report.score == 60 && report.band == Band::Neutral));

    let record = service.get(&id).expect("fetched");
    assert_eq!(record.status, AssessmentStatus::Scored);
    assert!(record.scored_at.is_some());

    // Scoring runs exactly once; a second finalize returns the cached
    // artifact without publishing again.
    let again = service.finalize(&id).expect("cached");
    assert_eq!(again, result);

    let envelopes = publisher.envelopes();
    assert_eq!(envelopes.len(), 1);
    assert_eq!(envelopes[0].assessment_id, id);
    assert_eq!(envelopes[0].result, result);
}

#[test]
fn answering_after_scoring_requires_a_reset() {
    let (service, _, _) = build_service();
    let id = service.start().expect("session opened").assessment_id;
    answer_everything(&service, &id, 4);
    service.finalize(&id).expect("scored");

    match service.record_answer(&id, 1, 5) {
        Err(AssessmentServiceError::AlreadyScored) => {}
        other => panic!("expected already-scored rejection, got {other:?}"),
    }
}

#[test]
fn reset_discards_answers_and_results_for_a_retake() {
    let (service, _, _) = build_service();
    let id = service.start().expect("session opened").assessment_id;
    answer_everything(&service, &id, 5);
    service.finalize(&id).expect("scored");

    let view = service.reset(&id).expect("reset");
    assert_eq!(view.answered, 0);
    assert_eq!(view.status, "in_progress");
    assert!(view.scores.is_none());

    let record = service.get(&id).expect("fetched");
    assert!(record.result.is_none());
    assert!(record.scored_at.is_none());
    assert!(record.sheet.response(1).is_none());

    // The session is usable again after the retake.
    service.record_answer(&id, 1, 2).expect("answer recorded");
}

#[test]
fn unknown_assessments_report_not_found() {
    let (service, _, _) = build_service();
    let missing = crate::workflows::big5::domain::AssessmentId("bfi-missing".to_string());

    match service.get(&missing) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[test]
fn repository_outages_propagate() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryPublisher::default()),
        ScoringConfig::default(),
    );

    match service.start() {
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}
