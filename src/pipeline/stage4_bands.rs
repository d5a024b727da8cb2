use std::collections::BTreeMap;

use crate::error::{Result, ScoringError, ensure_finite};
use crate::model::category::{Category, IndexMetric, category_order};
use crate::model::evidence::{ConfidenceBand, EvidenceCounts};
use crate::model::signpost::Signpost;

pub const DEFAULT_CONFIDENCE_WIDTH: f64 = 0.1;
/// Half-width ceiling so a band stays informative under the weakest evidence.
pub const MAX_HALF_WIDTH: f64 = 0.5;

pub fn compute_confidence_bands(
    scores: &BTreeMap<IndexMetric, f64>,
    evidence: &BTreeMap<Category, EvidenceCounts>,
    confidence_width: f64,
) -> Result<BTreeMap<IndexMetric, ConfidenceBand>> {
    let width = ensure_finite("confidence_width", confidence_width)?;
    if width < 0.0 {
        return Err(ScoringError::InvalidArgument(format!(
            "confidence_width must be nonnegative, got {width}"
        )));
    }

    let mut bands = BTreeMap::new();
    for (&metric, &score) in scores {
        let band = match metric.category() {
            // Derived metrics carry no evidence of their own.
            None => ConfidenceBand::around(score, width),
            Some(category) => {
                let counts = evidence.get(&category).copied().unwrap_or_default();
                category_band(score, &counts, width)
            }
        };
        bands.insert(metric, band);
    }
    Ok(bands)
}

pub fn category_band(score: f64, counts: &EvidenceCounts, confidence_width: f64) -> ConfidenceBand {
    match adjusted_half_width(counts, confidence_width) {
        Some(half_width) => ConfidenceBand::around(score, half_width),
        None => ConfidenceBand::FULL,
    }
}

/// Base width scaled by evidence quality, capped; `None` with no evidence.
pub fn adjusted_half_width(counts: &EvidenceCounts, confidence_width: f64) -> Option<f64> {
    let quality = counts.quality_score()?;
    let widened = if quality > 0.0 {
        confidence_width / quality
    } else {
        1.0
    };
    Some(widened.min(MAX_HALF_WIDTH))
}

/// Non-retracted observations per tier, grouped by their signpost's category.
pub fn tally_evidence(signposts: &[Signpost]) -> BTreeMap<Category, EvidenceCounts> {
    let mut out: BTreeMap<Category, EvidenceCounts> = category_order()
        .iter()
        .map(|&c| (c, EvidenceCounts::default()))
        .collect();
    for signpost in signposts {
        let counts = out.entry(signpost.category).or_default();
        for observation in signpost.live_observations() {
            counts.record(observation.tier);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_bands.rs"]
mod tests;
