mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::Band;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::bank::QuestionBank;
use super::domain::{TraitDomain, FACETS_PER_DOMAIN};
use super::interpretation::{interpretation_for, InterpretationError};
use super::session::ResponseSheet;
use policy::{band_for_tally, normalized_score};

/// Errors raised while turning a response sheet into a test result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("incomplete response set: {answered} of {expected} questions answered")]
    IncompleteResponseSet { answered: usize, expected: usize },
    #[error("response references unknown question id {0}")]
    UnknownQuestion(u16),
    #[error(transparent)]
    Interpretation(#[from] InterpretationError),
}

/// Division guards that fired during scoring. Any entry here means the
/// question bank violated its own invariants; the score defaulted to 0 and
/// the band to neutral so the result must not be mistaken for a legitimately
/// low measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScoringAnomaly {
    EmptyDomain { domain: TraitDomain },
    EmptyFacet { domain: TraitDomain, facet: u8 },
}

/// Per-domain slice of the finished artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitReport {
    pub domain: TraitDomain,
    pub sum: u32,
    pub count: u32,
    /// Normalized 0..=100 display score.
    pub score: u8,
    pub band: Band,
    /// Facet number -> normalized 0..=100 facet score.
    pub facets: BTreeMap<u8, u8>,
    pub interpretation: String,
}

/// The finished test artifact: deterministic for identical input, shaped for
/// the backend persistence payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub traits: BTreeMap<TraitDomain, TraitReport>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub anomalies: Vec<ScoringAnomaly>,
}

impl TestResult {
    pub fn trait_report(&self, domain: TraitDomain) -> Option<&TraitReport> {
        self.traits.get(&domain)
    }

    /// `(domain, normalized score)` pairs in canonical order, the chart
    /// renderer's input shape.
    pub fn domain_scores(&self) -> Vec<(TraitDomain, u8)> {
        TraitDomain::ALL
            .iter()
            .filter_map(|domain| {
                self.traits
                    .get(domain)
                    .map(|report| (*domain, report.score))
            })
            .collect()
    }
}

/// Stateless engine applying the scoring configuration to a complete sheet.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        sheet: &ResponseSheet,
        bank: &QuestionBank,
    ) -> Result<TestResult, ScoringError> {
        let tallies = rules::tally_responses(sheet, bank, &self.config)?;

        let mut traits = BTreeMap::new();
        let mut anomalies = Vec::new();

        for (domain, tally) in tallies {
            if tally.count == 0 {
                warn!(domain = domain.name(), "no responses tallied for domain");
                anomalies.push(ScoringAnomaly::EmptyDomain { domain });
            }

            let band = band_for_tally(tally.sum, tally.count);
            let score = normalized_score(tally.sum, tally.count);

            let mut facets = BTreeMap::new();
            for facet in 1..=FACETS_PER_DOMAIN {
                match tally.facets.get(&facet) {
                    Some(facet_tally) if facet_tally.count > 0 => {
                        facets.insert(facet, normalized_score(facet_tally.sum, facet_tally.count));
                    }
                    _ => {
                        warn!(
                            domain = domain.name(),
                            facet, "no responses tallied for facet"
                        );
                        anomalies.push(ScoringAnomaly::EmptyFacet { domain, facet });
                        facets.insert(facet, 0);
                    }
                }
            }

            let interpretation = interpretation_for(domain, band)?.to_string();

            traits.insert(
                domain,
                TraitReport {
                    domain,
                    sum: tally.sum,
                    count: tally.count,
                    score,
                    band,
                    facets,
                    interpretation,
                },
            );
        }

        Ok(TestResult { traits, anomalies })
    }
}
