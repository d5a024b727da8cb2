use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::category::{Category, IndexMetric, category_order};

/// Clamp into `[0, 1]`; NaN maps to `0.0`.
pub fn clip01(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Per-category scores. Absent categories read as no progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScores {
    pub capabilities: f64,
    pub agents: f64,
    pub inputs: f64,
    pub security: f64,
}

impl CategoryScores {
    pub fn new(capabilities: f64, agents: f64, inputs: f64, security: f64) -> Self {
        Self {
            capabilities,
            agents,
            inputs,
            security,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Capabilities => self.capabilities,
            Category::Agents => self.agents,
            Category::Inputs => self.inputs,
            Category::Security => self.security,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        match category {
            Category::Capabilities => self.capabilities = value,
            Category::Agents => self.agents = value,
            Category::Inputs => self.inputs = value,
            Category::Security => self.security = value,
        }
    }

    pub fn from_partial(values: &BTreeMap<Category, f64>) -> Self {
        let mut out = Self::default();
        for (&category, &value) in values {
            out.set(category, value);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexMetrics {
    pub capabilities: f64,
    pub agents: f64,
    pub inputs: f64,
    pub security: f64,
    pub overall: f64,
    pub safety_margin: f64,
}

impl IndexMetrics {
    pub fn categories(&self) -> CategoryScores {
        CategoryScores::new(self.capabilities, self.agents, self.inputs, self.security)
    }

    pub fn get(&self, metric: IndexMetric) -> f64 {
        match metric {
            IndexMetric::Overall => self.overall,
            IndexMetric::SafetyMargin => self.safety_margin,
            IndexMetric::Capabilities => self.capabilities,
            IndexMetric::Agents => self.agents,
            IndexMetric::Inputs => self.inputs,
            IndexMetric::Security => self.security,
        }
    }

    /// All six values keyed by metric, the shape the band estimator takes.
    pub fn scores(&self) -> BTreeMap<IndexMetric, f64> {
        let mut out = BTreeMap::new();
        for &category in category_order() {
            out.insert(IndexMetric::from(category), self.categories().get(category));
        }
        out.insert(IndexMetric::Overall, self.overall);
        out.insert(IndexMetric::SafetyMargin, self.safety_margin);
        out
    }

    /// Capability is outrunning security readiness.
    pub fn safety_alarm(&self) -> bool {
        self.safety_margin < 0.0
    }
}
