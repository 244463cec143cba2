//! The fixed 120-item inventory behind the assessment.
//!
//! Items are authored domain by domain, four per facet, in facet order. The
//! global presentation order interleaves domains (O, C, E, A, N) per facet
//! round so consecutive prompts never probe the same trait twice. Bank
//! invariants (120 items, 24 per domain, 4 per facet, unique order indexes)
//! are correctness preconditions pinned by tests rather than runtime checks.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::domain::{
    Polarity::{self, Direct, Reverse},
    Question, TraitDomain, FACETS_PER_DOMAIN,
};

/// Total number of inventory items.
pub const INVENTORY_SIZE: usize = 120;
/// Items measuring each trait domain.
pub const ITEMS_PER_DOMAIN: usize = 24;
/// Items measuring each (domain, facet) pair.
pub const ITEMS_PER_FACET: usize = 4;

type ItemDef = (&'static str, Polarity);

const OPENNESS: [ItemDef; ITEMS_PER_DOMAIN] = [
    // Imagination
    ("I have a vivid imagination.", Direct),
    ("I enjoy wild flights of fantasy.", Direct),
    ("I seldom daydream.", Reverse),
    ("I rarely lose myself in thought.", Reverse),
    // Artistic Interests
    ("I believe in the importance of art.", Direct),
    ("I see beauty in things that others might not notice.", Direct),
    ("I do not like poetry.", Reverse),
    (
        "I seldom notice the emotional aspects of paintings and pictures.",
        Reverse,
    ),
    // Emotionality
    ("I experience my emotions intensely.", Direct),
    ("I feel others' emotions.", Direct),
    ("I rarely notice my emotional reactions.", Reverse),
    ("I don't understand people who get emotional.", Reverse),
    // Adventurousness
    ("I prefer variety to routine.", Direct),
    ("I like to visit new places.", Direct),
    ("I dislike changes.", Reverse),
    ("I am attached to conventional ways.", Reverse),
    // Intellect
    ("I love to read challenging material.", Direct),
    ("I enjoy thinking about things.", Direct),
    ("I avoid philosophical discussions.", Reverse),
    ("I have difficulty understanding abstract ideas.", Reverse),
    // Liberalism
    ("I believe that there is no absolute right and wrong.", Direct),
    ("I challenge established ways of doing things.", Direct),
    (
        "I think traditions deserve respect simply because they are traditions.",
        Reverse,
    ),
    ("I prefer to follow the rules as they are written.", Reverse),
];

const CONSCIENTIOUSNESS: [ItemDef; ITEMS_PER_DOMAIN] = [
    // Self-Efficacy
    ("I complete tasks successfully.", Direct),
    ("I excel in what I do.", Direct),
    ("I misjudge situations.", Reverse),
    ("I often don't see the consequences of things.", Reverse),
    // Orderliness
    ("I like order.", Direct),
    ("I like to tidy up.", Direct),
    ("I leave my belongings around.", Reverse),
    ("I leave a mess in my room.", Reverse),
    // Dutifulness
    ("I keep my promises.", Direct),
    ("I tell the truth.", Direct),
    ("I break rules.", Reverse),
    ("I get others to do my duties.", Reverse),
    // Achievement-Striving
    ("I go straight for the goal.", Direct),
    ("I work hard.", Direct),
    ("I do just enough work to get by.", Reverse),
    ("I put little time and effort into my work.", Reverse),
    // Self-Discipline
    ("I get chores done right away.", Direct),
    ("I am always prepared.", Direct),
    ("I waste my time.", Reverse),
    ("I have difficulty starting tasks.", Reverse),
    // Cautiousness
    ("I choose my words with care.", Direct),
    ("I think before I act.", Direct),
    ("I rush into things.", Reverse),
    ("I make rash decisions.", Reverse),
];

const EXTRAVERSION: [ItemDef; ITEMS_PER_DOMAIN] = [
    // Friendliness
    ("I make friends easily.", Direct),
    ("I feel comfortable around people.", Direct),
    ("I am hard to get to know.", Reverse),
    ("I often feel uncomfortable around others.", Reverse),
    // Gregariousness
    ("I love large parties.", Direct),
    ("I enjoy being part of a group.", Direct),
    ("I prefer to be alone.", Reverse),
    ("I avoid crowds.", Reverse),
    // Assertiveness
    ("I take charge.", Direct),
    ("I try to lead others.", Direct),
    ("I wait for others to lead the way.", Reverse),
    ("I keep in the background.", Reverse),
    // Activity Level
    ("I am always busy.", Direct),
    ("I am always on the go.", Direct),
    ("I like to take it easy.", Reverse),
    ("I react slowly.", Reverse),
    // Excitement-Seeking
    ("I love excitement.", Direct),
    ("I seek adventure.", Direct),
    ("I dislike loud music.", Reverse),
    ("I would never go hang gliding or bungee jumping.", Reverse),
    // Cheerfulness
    ("I radiate joy.", Direct),
    ("I have a lot of fun.", Direct),
    ("I am seldom amused.", Reverse),
    ("I rarely joke around.", Reverse),
];

const AGREEABLENESS: [ItemDef; ITEMS_PER_DOMAIN] = [
    // Trust
    ("I trust others.", Direct),
    ("I believe that others have good intentions.", Direct),
    ("I distrust people.", Reverse),
    ("I suspect hidden motives in others.", Reverse),
    // Morality
    ("I stick to the rules.", Direct),
    ("I value being straightforward with people.", Direct),
    ("I use flattery to get ahead.", Reverse),
    ("I take advantage of others.", Reverse),
    // Altruism
    ("I make people feel welcome.", Direct),
    ("I go out of my way to help others.", Direct),
    ("I look down on others.", Reverse),
    ("I am indifferent to the feelings of others.", Reverse),
    // Cooperation
    ("I am easy to satisfy.", Direct),
    ("I hate to seem pushy.", Direct),
    ("I love a good fight.", Reverse),
    ("I yell at people.", Reverse),
    // Modesty
    ("I dislike being the center of attention.", Direct),
    ("I dislike talking about myself.", Direct),
    ("I believe that I am better than others.", Reverse),
    ("I boast about my virtues.", Reverse),
    // Sympathy
    ("I sympathize with those who are worse off than me.", Direct),
    ("I feel concern for others in need.", Direct),
    ("I am not interested in other people's problems.", Reverse),
    ("I believe people should fend for themselves.", Reverse),
];

const NEUROTICISM: [ItemDef; ITEMS_PER_DOMAIN] = [
    // Anxiety
    ("I worry about things.", Direct),
    ("I fear for the worst.", Direct),
    ("I am relaxed most of the time.", Reverse),
    ("I am not easily bothered by things.", Reverse),
    // Anger
    ("I get angry easily.", Direct),
    ("I am often in a bad mood.", Direct),
    ("I rarely get irritated.", Reverse),
    ("I keep my cool.", Reverse),
    // Depression
    ("I often feel blue.", Direct),
    ("I am often down in the dumps.", Direct),
    ("I feel comfortable with myself.", Reverse),
    ("I am very pleased with myself.", Reverse),
    // Self-Consciousness
    ("I am easily intimidated.", Direct),
    ("I am afraid that I will do the wrong thing.", Direct),
    ("I am comfortable in unfamiliar situations.", Reverse),
    ("I am not embarrassed easily.", Reverse),
    // Immoderation
    ("I go on binges.", Direct),
    ("I have difficulty resisting temptation.", Direct),
    ("I easily resist temptations.", Reverse),
    ("I rarely overindulge.", Reverse),
    // Vulnerability
    ("I panic easily.", Direct),
    ("I become overwhelmed by events.", Direct),
    ("I remain calm under pressure.", Reverse),
    ("I can handle complex problems.", Reverse),
];

const fn domain_items(domain: TraitDomain) -> &'static [ItemDef; ITEMS_PER_DOMAIN] {
    match domain {
        TraitDomain::Openness => &OPENNESS,
        TraitDomain::Conscientiousness => &CONSCIENTIOUSNESS,
        TraitDomain::Extraversion => &EXTRAVERSION,
        TraitDomain::Agreeableness => &AGREEABLENESS,
        TraitDomain::Neuroticism => &NEUROTICISM,
    }
}

static BANK: Lazy<QuestionBank> = Lazy::new(QuestionBank::build);

/// The complete, order-stable item catalog.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: BTreeMap<u16, usize>,
}

impl QuestionBank {
    /// Shared process-wide bank instance.
    pub fn global() -> &'static QuestionBank {
        &BANK
    }

    fn build() -> Self {
        let mut questions = Vec::with_capacity(INVENTORY_SIZE);

        for (domain_index, domain) in TraitDomain::ALL.iter().copied().enumerate() {
            let items = domain_items(domain);
            for (item_index, (text, polarity)) in items.iter().enumerate() {
                let facet = (item_index / ITEMS_PER_FACET) as u8 + 1;
                let round = item_index % ITEMS_PER_FACET;
                let id = (domain_index * ITEMS_PER_DOMAIN + item_index) as u16 + 1;
                // Presentation slot: round-robin over domains inside each
                // facet round, facets ascending, rounds outermost.
                let order = (round * TraitDomain::ALL.len() * FACETS_PER_DOMAIN as usize
                    + (facet as usize - 1) * TraitDomain::ALL.len()
                    + domain_index) as u16
                    + 1;

                questions.push(Question {
                    id,
                    text,
                    domain,
                    facet,
                    polarity: *polarity,
                    order,
                });
            }
        }

        let by_id = questions
            .iter()
            .enumerate()
            .map(|(index, question)| (question.id, index))
            .collect();

        Self { questions, by_id }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All items in authoring order (domain-major).
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// All items sorted by their global presentation index.
    pub fn by_display_order(&self) -> Vec<&Question> {
        let mut ordered: Vec<&Question> = self.questions.iter().collect();
        ordered.sort_by_key(|question| question.order);
        ordered
    }

    pub fn question(&self, id: u16) -> Option<&Question> {
        self.by_id.get(&id).map(|index| &self.questions[*index])
    }

    pub fn contains(&self, id: u16) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Items restricted to one domain, authoring order.
    pub fn domain_questions(&self, domain: TraitDomain) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.domain == domain)
    }
}
