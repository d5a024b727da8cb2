use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::category::{Category, category_order};
use crate::model::evidence::EvidenceCounts;
use crate::model::presets::{PresetWeights, preset_order};
use crate::model::scores::CategoryScores;
use crate::model::snapshot::{IndexSnapshot, InsufficientData};
use crate::pipeline::stage3_index::compute_index_from_categories;
use crate::pipeline::stage4_bands::compute_confidence_bands;

pub const CUSTOM_LABEL: &str = "custom";

/// Smallest overall-index move between consecutive snapshots worth flagging.
pub const SIGNIFICANT_DELTA: f64 = 0.02;

pub fn build_snapshot(
    label: &str,
    weights: PresetWeights,
    scores: &CategoryScores,
    evidence: &BTreeMap<Category, EvidenceCounts>,
    confidence_width: f64,
) -> Result<IndexSnapshot> {
    let metrics = compute_index_from_categories(scores, &weights);
    let confidence_bands = compute_confidence_bands(&metrics.scores(), evidence, confidence_width)?;

    let evidence_counts: BTreeMap<Category, EvidenceCounts> = category_order()
        .iter()
        .map(|&c| (c, evidence.get(&c).copied().unwrap_or_default()))
        .collect();

    tracing::debug!(
        preset = label,
        overall = metrics.overall,
        safety_margin = metrics.safety_margin,
        "index snapshot computed"
    );
    if metrics.safety_alarm() {
        tracing::warn!(
            preset = label,
            safety_margin = metrics.safety_margin,
            "capabilities are outpacing security readiness"
        );
    }

    Ok(IndexSnapshot {
        preset: label.to_string(),
        weights,
        metrics,
        confidence_bands,
        evidence_counts,
        insufficient: InsufficientData::from_scores(scores),
    })
}

/// One snapshot per named preset, in preset declaration order.
pub fn build_preset_snapshots(
    scores: &CategoryScores,
    evidence: &BTreeMap<Category, EvidenceCounts>,
    confidence_width: f64,
) -> Result<Vec<IndexSnapshot>> {
    preset_order()
        .iter()
        .map(|&preset| {
            build_snapshot(
                preset.slug(),
                preset.weights(),
                scores,
                evidence,
                confidence_width,
            )
        })
        .collect()
}

/// Overall-index change from `prev` to `curr` when it reaches
/// [`SIGNIFICANT_DELTA`] in either direction. Snapshots of different presets
/// are never compared.
pub fn significant_change(prev: &IndexSnapshot, curr: &IndexSnapshot) -> Option<f64> {
    if prev.preset != curr.preset {
        return None;
    }
    let delta = curr.metrics.overall - prev.metrics.overall;
    (delta.abs() >= SIGNIFICANT_DELTA).then_some(delta)
}

/// Pairs each current snapshot with the previous one of the same preset and
/// keeps the significant moves, in `current` order.
pub fn significant_changes<'a>(
    previous: &[IndexSnapshot],
    current: &'a [IndexSnapshot],
) -> Vec<(&'a str, f64)> {
    current
        .iter()
        .filter_map(|curr| {
            let prev = previous.iter().find(|p| p.preset == curr.preset)?;
            let delta = significant_change(prev, curr)?;
            tracing::info!(
                preset = %curr.preset,
                from = prev.metrics.overall,
                to = curr.metrics.overall,
                delta,
                "significant index change"
            );
            Some((curr.preset.as_str(), delta))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_snapshot.rs"]
mod tests;
