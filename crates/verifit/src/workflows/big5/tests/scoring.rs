use super::common::{
    bank, engine, keyed_sheet, raw_engine, split_domain_sheet, uniform_sheet,
};
use crate::workflows::big5::domain::TraitDomain;
use crate::workflows::big5::scoring::{Band, ScoringError};
use crate::workflows::big5::session::ResponseSheet;

#[test]
fn scoring_rejects_an_incomplete_sheet() {
    let mut sheet = ResponseSheet::new();
    sheet.record(bank(), 1, 3).expect("valid answer");

    match raw_engine().score(&sheet, bank()) {
        Err(ScoringError::IncompleteResponseSet { answered, expected }) => {
            assert_eq!(answered, 1);
            assert_eq!(expected, 120);
        }
        other => panic!("expected incomplete-set rejection, got {other:?}"),
    }
}

#[test]
fn all_fives_raw_scores_saturate_every_domain() {
    let result = raw_engine()
        .score(&uniform_sheet(5), bank())
        .expect("complete sheet");

    for domain in TraitDomain::ALL {
        let report = result.trait_report(domain).expect("report present");
        assert_eq!(report.sum, 120);
        assert_eq!(report.count, 24);
        assert_eq!(report.score, 100);
        assert_eq!(report.band, Band::High);
    }
    assert!(result.anomalies.is_empty());
}

#[test]
fn all_ones_raw_scores_floor_every_domain() {
    let result = raw_engine()
        .score(&uniform_sheet(1), bank())
        .expect("complete sheet");

    for domain in TraitDomain::ALL {
        let report = result.trait_report(domain).expect("report present");
        assert_eq!(report.sum, 24);
        assert_eq!(report.score, 20);
        assert_eq!(report.band, Band::Low);
    }
}

#[test]
fn all_threes_land_in_the_neutral_band() {
    let result = raw_engine()
        .score(&uniform_sheet(3), bank())
        .expect("complete sheet");

    for domain in TraitDomain::ALL {
        let report = result.trait_report(domain).expect("report present");
        assert_eq!(report.score, 60);
        assert_eq!(report.band, Band::Neutral);
        for facet in 1..=6u8 {
            assert_eq!(report.facets.get(&facet), Some(&60));
        }
    }
}

#[test]
fn average_exactly_two_point_five_is_neutral() {
    // 12 twos + 12 threes = 60 over 24 responses.
    let sheet = split_domain_sheet(TraitDomain::Extraversion, 12, 2, 3);
    let result = raw_engine().score(&sheet, bank()).expect("complete sheet");

    let report = result
        .trait_report(TraitDomain::Extraversion)
        .expect("report present");
    assert_eq!(report.sum, 60);
    assert_eq!(report.band, Band::Neutral);
    assert_eq!(report.score, 50);
}

#[test]
fn average_exactly_three_point_five_is_neutral() {
    // 12 threes + 12 fours = 84 over 24 responses.
    let sheet = split_domain_sheet(TraitDomain::Agreeableness, 12, 3, 4);
    let result = raw_engine().score(&sheet, bank()).expect("complete sheet");

    let report = result
        .trait_report(TraitDomain::Agreeableness)
        .expect("report present");
    assert_eq!(report.band, Band::Neutral);
    assert_eq!(report.score, 70);
}

#[test]
fn averages_just_past_the_boundaries_leave_neutral() {
    // 13 twos + 11 threes = 59, average ~2.458 -> low.
    let below = split_domain_sheet(TraitDomain::Openness, 13, 2, 3);
    let result = raw_engine().score(&below, bank()).expect("complete sheet");
    assert_eq!(
        result
            .trait_report(TraitDomain::Openness)
            .expect("report present")
            .band,
        Band::Low
    );

    // 11 threes + 13 fours = 85, average ~3.542 -> high.
    let above = split_domain_sheet(TraitDomain::Openness, 11, 3, 4);
    let result = raw_engine().score(&above, bank()).expect("complete sheet");
    assert_eq!(
        result
            .trait_report(TraitDomain::Openness)
            .expect("report present")
            .band,
        Band::High
    );
}

#[test]
fn normalized_score_rounds_half_away_from_zero() {
    // 15 twos + 9 threes = 57; 57/24 * 20 = 47.5, which rounds up to 48.
    let sheet = split_domain_sheet(TraitDomain::Neuroticism, 15, 2, 3);
    let result = raw_engine().score(&sheet, bank()).expect("complete sheet");

    let report = result
        .trait_report(TraitDomain::Neuroticism)
        .expect("report present");
    assert_eq!(report.sum, 57);
    assert_eq!(report.score, 48);
}

#[test]
fn banding_follows_the_raw_average_not_the_normalized_score() {
    // Band thresholds live on the 1..=5 scale; scaling by 20 must not move
    // them. Average 2.5 -> neutral even though the normalized score is 50.
    let sheet = split_domain_sheet(TraitDomain::Conscientiousness, 12, 2, 3);
    let result = raw_engine().score(&sheet, bank()).expect("complete sheet");

    let report = result
        .trait_report(TraitDomain::Conscientiousness)
        .expect("report present");
    assert!(report.score < 60);
    assert_eq!(report.band, Band::Neutral);
}

#[test]
fn scoring_is_deterministic_for_identical_input() {
    let sheet = keyed_sheet(4, 2);
    let first = engine().score(&sheet, bank()).expect("complete sheet");
    let second = engine().score(&sheet, bank()).expect("complete sheet");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializable"),
        serde_json::to_string(&second).expect("serializable")
    );
}

#[test]
fn reverse_keyed_items_are_inverted_by_default() {
    // Answering with the keying (5 on direct, 1 on reverse) should read as a
    // uniformly maximal trait expression once inversion is applied.
    let sheet = keyed_sheet(5, 1);
    let result = engine().score(&sheet, bank()).expect("complete sheet");

    for domain in TraitDomain::ALL {
        let report = result.trait_report(domain).expect("report present");
        assert_eq!(report.sum, 120);
        assert_eq!(report.score, 100);
        assert_eq!(report.band, Band::High);
    }
}

#[test]
fn legacy_raw_summing_is_preserved_behind_the_config() {
    // Each domain carries 12 direct and 12 reverse items, so the same sheet
    // sums to 12*5 + 12*1 = 72 (average 3.0) when inversion is disabled.
    let sheet = keyed_sheet(5, 1);
    let result = raw_engine().score(&sheet, bank()).expect("complete sheet");

    for domain in TraitDomain::ALL {
        let report = result.trait_report(domain).expect("report present");
        assert_eq!(report.sum, 72);
        assert_eq!(report.score, 60);
        assert_eq!(report.band, Band::Neutral);
    }
}

#[test]
fn uniform_threes_score_identically_under_both_configs() {
    // 6 - 3 == 3: inversion is invisible at the midpoint.
    let sheet = uniform_sheet(3);
    let inverted = engine().score(&sheet, bank()).expect("complete sheet");
    let raw = raw_engine().score(&sheet, bank()).expect("complete sheet");
    assert_eq!(inverted, raw);
}

#[test]
fn every_report_carries_a_narrative_interpretation() {
    let result = engine()
        .score(&uniform_sheet(3), bank())
        .expect("complete sheet");

    for domain in TraitDomain::ALL {
        let report = result.trait_report(domain).expect("report present");
        assert!(!report.interpretation.is_empty());
    }
}

#[test]
fn domain_scores_come_back_in_canonical_order() {
    let result = raw_engine()
        .score(&uniform_sheet(2), bank())
        .expect("complete sheet");

    let scores = result.domain_scores();
    assert_eq!(scores.len(), 5);
    let domains: Vec<TraitDomain> = scores.iter().map(|(domain, _)| *domain).collect();
    assert_eq!(domains, TraitDomain::ALL.to_vec());
    assert!(scores.iter().all(|(_, score)| *score == 40));
}
