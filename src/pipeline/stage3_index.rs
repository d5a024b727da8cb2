use crate::model::presets::PresetWeights;
use crate::model::scores::{CategoryScores, IndexMetrics};

/// Harmonic mean of capabilities and inputs.
///
/// Either dimension at zero blocks the index entirely, so the result is `0.0`
/// rather than a division by zero.
pub fn compute_overall(capabilities: f64, inputs: f64) -> f64 {
    if capabilities == 0.0 || inputs == 0.0 {
        return 0.0;
    }
    2.0 / (1.0 / capabilities + 1.0 / inputs)
}

/// Negative when capability is ahead of security readiness.
pub fn compute_safety_margin(security: f64, capabilities: f64) -> f64 {
    security - capabilities
}

/// Capabilities and agents folded into one figure, weighted by their own
/// preset weights only.
pub fn effective_capability(scores: &CategoryScores, weights: &PresetWeights) -> f64 {
    let cap_weight = weights.capabilities();
    let agent_weight = weights.agents();
    let denom = cap_weight + agent_weight;
    if denom > 0.0 {
        (scores.capabilities * cap_weight + scores.agents * agent_weight) / denom
    } else {
        0.0
    }
}

pub fn compute_index_from_categories(
    scores: &CategoryScores,
    weights: &PresetWeights,
) -> IndexMetrics {
    let combined = effective_capability(scores, weights);
    IndexMetrics {
        capabilities: scores.capabilities,
        agents: scores.agents,
        inputs: scores.inputs,
        security: scores.security,
        overall: compute_overall(combined, scores.inputs),
        safety_margin: compute_safety_margin(scores.security, combined),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_index.rs"]
mod tests;
