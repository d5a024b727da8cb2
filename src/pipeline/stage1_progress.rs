use crate::error::{Result, ensure_finite};
use crate::model::scores::clip01;
use crate::model::signpost::Direction;

/// Normalize one observed value onto the `[0, 1]` baseline→target scale.
///
/// When `target == baseline` the scale has no length; progress is then `1.0`
/// if the observation already satisfies the target comparison and `0.0`
/// otherwise.
pub fn compute_progress(
    observed: f64,
    baseline: f64,
    target: f64,
    direction: Direction,
) -> Result<f64> {
    let observed = ensure_finite("observed", observed)?;
    let baseline = ensure_finite("baseline", baseline)?;
    let target = ensure_finite("target", target)?;

    let progress = match direction {
        Direction::Increasing => {
            if target == baseline {
                binary(observed >= target)
            } else {
                clip01(ratio(observed, baseline, target, baseline))
            }
        }
        Direction::Decreasing => {
            if target == baseline {
                binary(observed <= target)
            } else {
                clip01(ratio(baseline, observed, baseline, target))
            }
        }
    };
    Ok(progress)
}

/// Same as [`compute_progress`] with the direction given as text (`>=`, `<=`).
pub fn compute_progress_str(
    observed: f64,
    baseline: f64,
    target: f64,
    direction: &str,
) -> Result<f64> {
    compute_progress(observed, baseline, target, direction.parse()?)
}

/// `(a - b) / (c - d)` for finite operands. Differences that overflow are
/// taken on halved operands, which share the same quotient.
fn ratio(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let num = a - b;
    let den = c - d;
    if num.is_finite() && den.is_finite() {
        num / den
    } else {
        (a / 2.0 - b / 2.0) / (c / 2.0 - d / 2.0)
    }
}

fn binary(satisfied: bool) -> f64 {
    if satisfied { 1.0 } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_progress.rs"]
mod tests;
