use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::category::{Category, IndexMetric, category_order};
use crate::model::evidence::{ConfidenceBand, EvidenceCounts};
use crate::model::presets::PresetWeights;
use crate::model::scores::{CategoryScores, IndexMetrics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientData {
    /// Set when inputs or security has no progress at all.
    pub overall: bool,
    pub categories: BTreeMap<Category, bool>,
}

impl InsufficientData {
    pub fn from_scores(scores: &CategoryScores) -> Self {
        let categories = category_order()
            .iter()
            .map(|&c| (c, scores.get(c) == 0.0))
            .collect();
        Self {
            overall: scores.inputs == 0.0 || scores.security == 0.0,
            categories,
        }
    }

    pub fn any(&self) -> bool {
        self.overall || self.categories.values().any(|&v| v)
    }
}

/// Everything the dashboard shows for one preset at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub preset: String,
    pub weights: PresetWeights,
    pub metrics: IndexMetrics,
    pub confidence_bands: BTreeMap<IndexMetric, ConfidenceBand>,
    pub evidence_counts: BTreeMap<Category, EvidenceCounts>,
    pub insufficient: InsufficientData,
}

impl IndexSnapshot {
    pub fn band(&self, metric: IndexMetric) -> ConfidenceBand {
        self.confidence_bands
            .get(&metric)
            .copied()
            .unwrap_or(ConfidenceBand::FULL)
    }
}
