use serde::{Deserialize, Serialize};

/// Categorical classification derived from a domain's average raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Neutral,
    High,
}

impl Band {
    pub const fn label(self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Neutral => "neutral",
            Band::High => "high",
        }
    }
}

const LOW_CEILING: f64 = 2.5;
const HIGH_FLOOR: f64 = 3.5;

/// Band for a domain or facet tally. Thresholds apply to the raw average,
/// not the normalized score; exact boundary values classify as neutral. A
/// zero count also classifies neutral: the guarded 0 score must not read as
/// a confidently low measurement.
pub(crate) fn band_for_tally(sum: u32, count: u32) -> Band {
    if count == 0 {
        return Band::Neutral;
    }

    let average = f64::from(sum) / f64::from(count);
    if average < LOW_CEILING {
        Band::Low
    } else if average > HIGH_FLOOR {
        Band::High
    } else {
        Band::Neutral
    }
}

/// Rescale a 1..=5 average onto 0..=100, rounding half away from zero.
/// A zero count yields 0; the caller records the anomaly.
pub(crate) fn normalized_score(sum: u32, count: u32) -> u8 {
    if count == 0 {
        return 0;
    }

    let average = f64::from(sum) / f64::from(count);
    (average * 20.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_averages_classify_neutral() {
        // 60/24 = 2.5 and 84/24 = 3.5 sit exactly on the thresholds.
        assert_eq!(band_for_tally(60, 24), Band::Neutral);
        assert_eq!(band_for_tally(84, 24), Band::Neutral);
        assert_eq!(band_for_tally(59, 24), Band::Low);
        assert_eq!(band_for_tally(85, 24), Band::High);
    }

    #[test]
    fn zero_count_tallies_classify_neutral_not_low() {
        assert_eq!(band_for_tally(0, 0), Band::Neutral);
        assert_eq!(normalized_score(0, 0), 0);
    }
}
