use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("shape mismatch: {progresses} progress values but {weights} weights")]
    ShapeMismatch { progresses: usize, weights: usize },
}

pub type Result<T> = std::result::Result<T, ScoringError>;

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
