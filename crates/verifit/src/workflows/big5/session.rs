use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;
use super::domain::{AssessmentStatus, Response};

/// Validation errors raised while collecting responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("question {0} is not part of the inventory")]
    UnknownQuestion(u16),
    #[error("score {score} for question {question_id} is outside the 1..=5 choice range")]
    InvalidScore { question_id: u16, score: u8 },
}

/// The respondent's working answer sheet: at most one live response per
/// question, replaceable until the sheet is scored.
///
/// Answers may arrive in any order; sequential presentation is a client
/// concern driven by `Question::order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSheet {
    answers: BTreeMap<u16, u8>,
}

impl ResponseSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the response for one question.
    pub fn record(
        &mut self,
        bank: &QuestionBank,
        question_id: u16,
        raw_score: u8,
    ) -> Result<(), SessionError> {
        if !bank.contains(question_id) {
            return Err(SessionError::UnknownQuestion(question_id));
        }
        if !(1..=5).contains(&raw_score) {
            return Err(SessionError::InvalidScore {
                question_id,
                score: raw_score,
            });
        }

        self.answers.insert(question_id, raw_score);
        Ok(())
    }

    /// `(answered, total)` counts for progress display.
    pub fn progress(&self, bank: &QuestionBank) -> (usize, usize) {
        (self.answers.len(), bank.len())
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.answers.len() == bank.len()
    }

    pub fn status(&self, bank: &QuestionBank) -> AssessmentStatus {
        if self.is_complete(bank) {
            AssessmentStatus::Completed
        } else {
            AssessmentStatus::InProgress
        }
    }

    pub fn response(&self, question_id: u16) -> Option<Response> {
        self.answers.get(&question_id).map(|raw_score| Response {
            question_id,
            raw_score: *raw_score,
        })
    }

    pub fn responses(&self) -> impl Iterator<Item = Response> + '_ {
        self.answers.iter().map(|(question_id, raw_score)| Response {
            question_id: *question_id,
            raw_score: *raw_score,
        })
    }

    /// Clear every response. Idempotent.
    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
