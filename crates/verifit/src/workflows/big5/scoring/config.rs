use serde::{Deserialize, Serialize};

/// Scoring dials. Reverse-keyed inversion is configurable because the
/// legacy frontend tagged items but summed raw scores regardless; standard
/// psychometric practice inverts, so that is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub invert_reverse_keyed: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            invert_reverse_keyed: true,
        }
    }
}
