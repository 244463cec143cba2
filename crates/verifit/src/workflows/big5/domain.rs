use serde::{Deserialize, Serialize};

/// Identifier wrapper for assessment sessions handed out by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Number of facets measured inside every trait domain.
pub const FACETS_PER_DOMAIN: u8 = 6;

/// The five top-level trait domains of the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TraitDomain {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl TraitDomain {
    /// Canonical presentation order used when interleaving prompts.
    pub const ALL: [TraitDomain; 5] = [
        TraitDomain::Openness,
        TraitDomain::Conscientiousness,
        TraitDomain::Extraversion,
        TraitDomain::Agreeableness,
        TraitDomain::Neuroticism,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TraitDomain::Openness => "Openness",
            TraitDomain::Conscientiousness => "Conscientiousness",
            TraitDomain::Extraversion => "Extraversion",
            TraitDomain::Agreeableness => "Agreeableness",
            TraitDomain::Neuroticism => "Neuroticism",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            TraitDomain::Openness => "O",
            TraitDomain::Conscientiousness => "C",
            TraitDomain::Extraversion => "E",
            TraitDomain::Agreeableness => "A",
            TraitDomain::Neuroticism => "N",
        }
    }

    /// Display color used by chart consumers, one per axis.
    pub const fn display_color(self) -> &'static str {
        match self {
            TraitDomain::Openness => "#7c5cff",
            TraitDomain::Conscientiousness => "#2f9e8f",
            TraitDomain::Extraversion => "#f2a33c",
            TraitDomain::Agreeableness => "#4c8bf5",
            TraitDomain::Neuroticism => "#e25563",
        }
    }

    /// Facet display name within this domain, numbered 1..=6.
    pub const fn facet_name(self, facet: u8) -> &'static str {
        match self {
            TraitDomain::Openness => match facet {
                1 => "Imagination",
                2 => "Artistic Interests",
                3 => "Emotionality",
                4 => "Adventurousness",
                5 => "Intellect",
                _ => "Liberalism",
            },
            TraitDomain::Conscientiousness => match facet {
                1 => "Self-Efficacy",
                2 => "Orderliness",
                3 => "Dutifulness",
                4 => "Achievement-Striving",
                5 => "Self-Discipline",
                _ => "Cautiousness",
            },
            TraitDomain::Extraversion => match facet {
                1 => "Friendliness",
                2 => "Gregariousness",
                3 => "Assertiveness",
                4 => "Activity Level",
                5 => "Excitement-Seeking",
                _ => "Cheerfulness",
            },
            TraitDomain::Agreeableness => match facet {
                1 => "Trust",
                2 => "Morality",
                3 => "Altruism",
                4 => "Cooperation",
                5 => "Modesty",
                _ => "Sympathy",
            },
            TraitDomain::Neuroticism => match facet {
                1 => "Anxiety",
                2 => "Anger",
                3 => "Depression",
                4 => "Self-Consciousness",
                5 => "Immoderation",
                _ => "Vulnerability",
            },
        }
    }
}

/// Whether an item's raw score counts as-is or is inverted before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Direct,
    Reverse,
}

/// One ordinal answer level shared by every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub score: u8,
    pub label: &'static str,
}

/// The fixed five-point choice set, scores 1..=5.
pub const CHOICES: [Choice; 5] = [
    Choice {
        score: 1,
        label: "Very Inaccurate",
    },
    Choice {
        score: 2,
        label: "Moderately Inaccurate",
    },
    Choice {
        score: 3,
        label: "Neither Accurate Nor Inaccurate",
    },
    Choice {
        score: 4,
        label: "Moderately Accurate",
    },
    Choice {
        score: 5,
        label: "Very Accurate",
    },
];

/// One inventory item. Defined once at startup by the question bank and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u16,
    pub text: &'static str,
    pub domain: TraitDomain,
    pub facet: u8,
    pub polarity: Polarity,
    /// Global presentation index, 1..=120. Used only for sequential display.
    pub order: u16,
}

impl Question {
    pub fn choices(&self) -> &'static [Choice; 5] {
        &CHOICES
    }
}

/// A respondent's live selection for exactly one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: u16,
    pub raw_score: u8,
}

/// High level status tracked across the assessment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    InProgress,
    Completed,
    Scored,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::InProgress => "in_progress",
            AssessmentStatus::Completed => "completed",
            AssessmentStatus::Scored => "scored",
        }
    }
}
