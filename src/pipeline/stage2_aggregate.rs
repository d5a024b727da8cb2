use crate::error::{Result, ScoringError, ensure_finite};
use crate::model::category::{Category, category_order};
use crate::model::scores::CategoryScores;
use crate::model::signpost::Signpost;

/// Weighted arithmetic mean of signpost progress within one category.
///
/// Signposts inside a category substitute for each other, so a plain mean is
/// used here; the bottleneck behaviour lives in the cross-category index.
pub fn aggregate_category(progresses: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    if progresses.is_empty() {
        return Ok(0.0);
    }

    if let Some(w) = weights {
        if w.len() != progresses.len() {
            return Err(ScoringError::ShapeMismatch {
                progresses: progresses.len(),
                weights: w.len(),
            });
        }
    }

    let weights: Vec<f64> = match weights {
        Some(w) => w.iter().map(|&x| checked_weight(x)).collect::<Result<_>>()?,
        None => vec![1.0; progresses.len()],
    };
    for &progress in progresses {
        ensure_finite("progress", progress)?;
    }
    // Weights are relative; scaling by the largest keeps the sums finite.
    let max_weight = weights.iter().copied().fold(0.0, f64::max);
    if max_weight == 0.0 {
        return Ok(0.0);
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (&progress, &weight) in progresses.iter().zip(&weights) {
        let weight = weight / max_weight;
        weighted_sum += progress * weight;
        total_weight += weight;
    }
    Ok(weighted_sum / total_weight)
}

fn checked_weight(weight: f64) -> Result<f64> {
    let weight = ensure_finite("weight", weight)?;
    if weight < 0.0 {
        return Err(ScoringError::InvalidArgument(format!(
            "weight must be nonnegative, got {weight}"
        )));
    }
    Ok(weight)
}

pub fn score_category(signposts: &[Signpost], category: Category) -> Result<f64> {
    let mut progresses = Vec::new();
    let mut weights = Vec::new();
    for signpost in signposts.iter().filter(|s| s.category == category) {
        let progress = signpost.progress()?;
        tracing::trace!(
            code = %signpost.code,
            %category,
            progress,
            "signpost progress"
        );
        progresses.push(progress);
        weights.push(signpost.weight());
    }
    aggregate_category(&progresses, Some(&weights))
}

pub fn score_categories(signposts: &[Signpost]) -> Result<CategoryScores> {
    let mut scores = CategoryScores::default();
    for &category in category_order() {
        scores.set(category, score_category(signposts, category)?);
    }
    Ok(scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
