use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Capabilities,
    Agents,
    Inputs,
    Security,
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::Capabilities,
        Category::Agents,
        Category::Inputs,
        Category::Security,
    ]
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Capabilities => "capabilities",
            Category::Agents => "agents",
            Category::Inputs => "inputs",
            Category::Security => "security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every value the index reports. Confidence bands are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMetric {
    Capabilities,
    Agents,
    Inputs,
    Security,
    Overall,
    SafetyMargin,
}

pub fn metric_order() -> &'static [IndexMetric] {
    &[
        IndexMetric::Overall,
        IndexMetric::Capabilities,
        IndexMetric::Agents,
        IndexMetric::Inputs,
        IndexMetric::Security,
        IndexMetric::SafetyMargin,
    ]
}

impl IndexMetric {
    /// The base category behind this metric, `None` for derived metrics.
    pub fn category(self) -> Option<Category> {
        match self {
            IndexMetric::Capabilities => Some(Category::Capabilities),
            IndexMetric::Agents => Some(Category::Agents),
            IndexMetric::Inputs => Some(Category::Inputs),
            IndexMetric::Security => Some(Category::Security),
            IndexMetric::Overall | IndexMetric::SafetyMargin => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexMetric::Capabilities => "capabilities",
            IndexMetric::Agents => "agents",
            IndexMetric::Inputs => "inputs",
            IndexMetric::Security => "security",
            IndexMetric::Overall => "overall",
            IndexMetric::SafetyMargin => "safety_margin",
        }
    }
}

impl From<Category> for IndexMetric {
    fn from(value: Category) -> Self {
        match value {
            Category::Capabilities => IndexMetric::Capabilities,
            Category::Agents => IndexMetric::Agents,
            Category::Inputs => IndexMetric::Inputs,
            Category::Security => IndexMetric::Security,
        }
    }
}

impl fmt::Display for IndexMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
