use std::collections::BTreeMap;

use super::super::bank::QuestionBank;
use super::super::domain::{Polarity, TraitDomain};
use super::super::session::ResponseSheet;
use super::config::ScoringConfig;
use super::ScoringError;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FacetTally {
    pub(crate) sum: u32,
    pub(crate) count: u32,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct DomainTally {
    pub(crate) sum: u32,
    pub(crate) count: u32,
    pub(crate) facets: BTreeMap<u8, FacetTally>,
}

/// Single pass over the sheet accumulating per-domain and per-facet sums.
///
/// Requires a complete sheet; partial input must never produce a
/// plausible-looking result.
pub(crate) fn tally_responses(
    sheet: &ResponseSheet,
    bank: &QuestionBank,
    config: &ScoringConfig,
) -> Result<BTreeMap<TraitDomain, DomainTally>, ScoringError> {
    let (answered, expected) = sheet.progress(bank);
    if answered != expected {
        return Err(ScoringError::IncompleteResponseSet { answered, expected });
    }

    let mut tallies: BTreeMap<TraitDomain, DomainTally> = TraitDomain::ALL
        .iter()
        .map(|domain| (*domain, DomainTally::default()))
        .collect();

    for response in sheet.responses() {
        let question = bank
            .question(response.question_id)
            .ok_or(ScoringError::UnknownQuestion(response.question_id))?;

        let score = effective_score(response.raw_score, question.polarity, config);

        let tally = tallies.entry(question.domain).or_default();
        tally.sum += u32::from(score);
        tally.count += 1;

        let facet = tally.facets.entry(question.facet).or_default();
        facet.sum += u32::from(score);
        facet.count += 1;
    }

    Ok(tallies)
}

fn effective_score(raw: u8, polarity: Polarity, config: &ScoringConfig) -> u8 {
    match polarity {
        Polarity::Reverse if config.invert_reverse_keyed => 6 - raw,
        _ => raw,
    }
}
