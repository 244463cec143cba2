//! Answer-sheet import adapter.
//!
//! Legacy clients exported in-progress tests as loose CSV (`Question`,
//! `Answer`) where the answer column holds either a numeric score or a
//! choice label in whatever casing the UI produced. This module normalizes
//! those shapes into canonical responses at the boundary so the collector
//! and scoring engine only ever see validated data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::bank::QuestionBank;
use super::domain::CHOICES;
use super::session::{ResponseSheet, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum AnswerSheetImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed answer sheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unrecognized answer '{answer}'")]
    UnrecognizedAnswer { row: usize, answer: String },
    #[error("row {row}: {source}")]
    Rejected { row: usize, source: SessionError },
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question")]
    question_id: u16,
    #[serde(rename = "Answer")]
    answer: String,
}

/// Builds a validated `ResponseSheet` from exported answer-sheet CSV.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn sheet_from_path<P: AsRef<Path>>(
        path: P,
        bank: &QuestionBank,
    ) -> Result<ResponseSheet, AnswerSheetImportError> {
        let file = File::open(path)?;
        Self::sheet_from_reader(file, bank)
    }

    pub fn sheet_from_reader<R: Read>(
        reader: R,
        bank: &QuestionBank,
    ) -> Result<ResponseSheet, AnswerSheetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut sheet = ResponseSheet::new();

        for (index, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            // Header occupies line 1.
            let row = index + 2;
            let parsed = record?;
            let score = normalize_answer(&parsed.answer).ok_or_else(|| {
                AnswerSheetImportError::UnrecognizedAnswer {
                    row,
                    answer: parsed.answer.clone(),
                }
            })?;

            sheet
                .record(bank, parsed.question_id, score)
                .map_err(|source| AnswerSheetImportError::Rejected { row, source })?;
        }

        Ok(sheet)
    }
}

/// Accepts a bare score digit or any choice label, case-insensitively.
fn normalize_answer(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if let Ok(score) = trimmed.parse::<u8>() {
        return Some(score);
    }

    CHOICES
        .iter()
        .find(|choice| choice.label.eq_ignore_ascii_case(trimmed))
        .map(|choice| choice.score)
}
