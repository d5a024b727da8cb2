use super::*;
use crate::model::evidence::Tier;
use crate::model::signpost::{Direction, Observation};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scores(pairs: &[(IndexMetric, f64)]) -> BTreeMap<IndexMetric, f64> {
    pairs.iter().copied().collect()
}

fn evidence(pairs: &[(Category, EvidenceCounts)]) -> BTreeMap<Category, EvidenceCounts> {
    pairs.iter().copied().collect()
}

#[test]
fn test_no_evidence_is_full_band() {
    let bands = compute_confidence_bands(
        &scores(&[(IndexMetric::Capabilities, 0.5)]),
        &evidence(&[(Category::Capabilities, EvidenceCounts::default())]),
        DEFAULT_CONFIDENCE_WIDTH,
    )
    .unwrap();
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[&IndexMetric::Capabilities], ConfidenceBand::FULL);
}

#[test]
fn test_missing_evidence_entry_is_full_band() {
    let bands = compute_confidence_bands(
        &scores(&[(IndexMetric::Security, 0.2)]),
        &BTreeMap::new(),
        0.05,
    )
    .unwrap();
    assert_eq!(bands[&IndexMetric::Security], ConfidenceBand::FULL);
}

#[test]
fn test_top_tier_evidence_keeps_base_width() {
    let bands = compute_confidence_bands(
        &scores(&[(IndexMetric::Inputs, 0.5)]),
        &evidence(&[(Category::Inputs, EvidenceCounts::new(2, 0, 0, 0))]),
        0.1,
    )
    .unwrap();
    let band = bands[&IndexMetric::Inputs];
    assert!(approx(band.lower, 0.4));
    assert!(approx(band.upper, 0.6));
}

#[test]
fn test_weak_evidence_widens_band() {
    let counts = EvidenceCounts::new(0, 0, 3, 0);
    let band = category_band(0.5, &counts, 0.1);
    assert!(approx(band.lower, 0.5 - 0.1 / 0.3));
    assert!(approx(band.upper, 0.5 + 0.1 / 0.3));
}

#[test]
fn test_half_width_capped() {
    let counts = EvidenceCounts::new(0, 0, 0, 5);
    assert_eq!(adjusted_half_width(&counts, 0.1), Some(MAX_HALF_WIDTH));
    assert_eq!(adjusted_half_width(&EvidenceCounts::default(), 0.1), None);
    let band = category_band(0.5, &counts, 0.1);
    assert_eq!(band, ConfidenceBand::FULL);
}

#[test]
fn test_derived_metrics_use_flat_width() {
    let bands = compute_confidence_bands(
        &scores(&[(IndexMetric::Overall, 0.48), (IndexMetric::SafetyMargin, -0.4)]),
        &BTreeMap::new(),
        0.1,
    )
    .unwrap();
    let overall = bands[&IndexMetric::Overall];
    assert!(approx(overall.lower, 0.38));
    assert!(approx(overall.upper, 0.58));
    let margin = bands[&IndexMetric::SafetyMargin];
    assert_eq!(margin.lower, 0.0);
    assert_eq!(margin.upper, 0.0);
    assert!(margin.lower <= margin.upper);
}

#[test]
fn test_bands_clamped_to_unit_interval() {
    let counts = EvidenceCounts::new(1, 1, 1, 1);
    let low = category_band(0.02, &counts, 0.1);
    let high = category_band(0.98, &counts, 0.1);
    assert_eq!(low.lower, 0.0);
    assert_eq!(high.upper, 1.0);
}

#[test]
fn test_invalid_width_rejected() {
    let s = scores(&[(IndexMetric::Overall, 0.5)]);
    assert!(compute_confidence_bands(&s, &BTreeMap::new(), -0.1).is_err());
    assert!(compute_confidence_bands(&s, &BTreeMap::new(), f64::NAN).is_err());
}

#[test]
fn test_width_shrinks_with_better_tiers() {
    let worse = EvidenceCounts::new(1, 1, 4, 4);
    let better = EvidenceCounts::new(4, 4, 1, 1);
    let w_worse = category_band(0.5, &worse, 0.1).width();
    let w_better = category_band(0.5, &better, 0.1).width();
    assert!(w_better < w_worse);
}

#[test]
fn test_tally_evidence_skips_retracted() {
    let signposts = vec![
        Signpost {
            code: "osworld_50".to_string(),
            category: Category::Agents,
            direction: Direction::Increasing,
            baseline: 10.0,
            target: 50.0,
            first_class: true,
            observations: vec![
                Observation {
                    value: 22.0,
                    tier: Tier::A,
                    retracted: false,
                },
                Observation {
                    value: 25.0,
                    tier: Tier::C,
                    retracted: false,
                },
                Observation {
                    value: 40.0,
                    tier: Tier::B,
                    retracted: true,
                },
            ],
        },
    ];
    let tally = tally_evidence(&signposts);
    assert_eq!(tally.len(), 4);
    assert_eq!(tally[&Category::Agents], EvidenceCounts::new(1, 0, 1, 0));
    assert_eq!(tally[&Category::Security].total(), 0);
}
