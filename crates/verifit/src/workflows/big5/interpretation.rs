//! Narrative interpretation table keyed by (domain, band).
//!
//! The table is total over all 15 combinations; a miss means the domain enum
//! or banding drifted from the authored copy and must fail loudly rather
//! than render an empty string.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::domain::TraitDomain;
use super::scoring::Band;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpretationError {
    #[error("no interpretation authored for {domain:?}/{band:?}")]
    UnknownInterpretation { domain: TraitDomain, band: Band },
}

const ENTRIES: [(TraitDomain, Band, &str); 15] = [
    (
        TraitDomain::Openness,
        Band::High,
        "Curious and imaginative. Candidates in this range gravitate toward novel problems, \
         varied work, and unconventional approaches.",
    ),
    (
        TraitDomain::Openness,
        Band::Neutral,
        "Balances curiosity with practicality. Comfortable with new ideas when they serve a \
         clear purpose, without chasing novelty for its own sake.",
    ),
    (
        TraitDomain::Openness,
        Band::Low,
        "Practical and conventional. Prefers familiar methods, concrete tasks, and clearly \
         defined expectations over experimentation.",
    ),
    (
        TraitDomain::Conscientiousness,
        Band::High,
        "Organized and dependable. Plans ahead, follows through on commitments, and holds \
         work to a high standard.",
    ),
    (
        TraitDomain::Conscientiousness,
        Band::Neutral,
        "Reasonably reliable while staying flexible. Keeps important obligations on track \
         without rigid structure.",
    ),
    (
        TraitDomain::Conscientiousness,
        Band::Low,
        "Spontaneous and flexible. Works best with loose structure and may deprioritize \
         planning, order, and deadlines.",
    ),
    (
        TraitDomain::Extraversion,
        Band::High,
        "Outgoing and energetic. Draws energy from people, speaks up readily, and is \
         comfortable taking the lead in groups.",
    ),
    (
        TraitDomain::Extraversion,
        Band::Neutral,
        "Ambiverted. Engages comfortably with groups when needed and works equally well \
         independently.",
    ),
    (
        TraitDomain::Extraversion,
        Band::Low,
        "Reserved and independent. Prefers quiet settings and small groups, and tends to \
         think before speaking.",
    ),
    (
        TraitDomain::Agreeableness,
        Band::High,
        "Cooperative and considerate. Builds trust easily, accommodates others, and invests \
         in keeping relationships smooth.",
    ),
    (
        TraitDomain::Agreeableness,
        Band::Neutral,
        "Weighs cooperation against candor. Gets along with others while still pushing back \
         when it matters.",
    ),
    (
        TraitDomain::Agreeableness,
        Band::Low,
        "Direct and competitive. Challenges ideas openly, negotiates hard, and prioritizes \
         results over harmony.",
    ),
    (
        TraitDomain::Neuroticism,
        Band::High,
        "Emotionally reactive. Feels stress keenly and may need predictable environments and \
         recovery time after setbacks.",
    ),
    (
        TraitDomain::Neuroticism,
        Band::Neutral,
        "Typical emotional resilience. Experiences normal ups and downs without being easily \
         derailed by them.",
    ),
    (
        TraitDomain::Neuroticism,
        Band::Low,
        "Calm and even-keeled. Stays composed under pressure and recovers quickly from \
         stressful events.",
    ),
];

static TABLE: Lazy<BTreeMap<(TraitDomain, Band), &'static str>> =
    Lazy::new(|| ENTRIES.iter().map(|(d, b, text)| ((*d, *b), *text)).collect());

/// Fixed narrative for a (domain, band) pair.
pub fn interpretation_for(
    domain: TraitDomain,
    band: Band,
) -> Result<&'static str, InterpretationError> {
    TABLE
        .get(&(domain, band))
        .copied()
        .ok_or(InterpretationError::UnknownInterpretation { domain, band })
}
