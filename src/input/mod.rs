use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::presets::PresetWeights;
use crate::model::signpost::Signpost;
use crate::model::snapshot::IndexSnapshot;

/// Snapshot of signposts and their observations handed over by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default)]
    pub signposts: Vec<Signpost>,
    /// Custom weights; when present they replace the named presets.
    #[serde(default)]
    pub weights: Option<PresetWeights>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_input(path: &Path) -> Result<ScoringInput, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    let input = parse_input(&raw)?;

    tracing::info!(
        path = %path.display(),
        signposts = input.signposts.len(),
        custom_weights = input.weights.is_some(),
        "loaded scoring input"
    );
    Ok(input)
}

pub fn parse_input(raw: &str) -> Result<ScoringInput, InputError> {
    let input: ScoringInput = serde_json::from_str(raw)?;
    validate_input(&input)?;
    Ok(input)
}

#[derive(Deserialize)]
struct SnapshotDocument {
    snapshots: Vec<IndexSnapshot>,
}

/// Snapshots from an earlier `snapshot.json`, used as the comparison base.
pub fn load_snapshots(path: &Path) -> Result<Vec<IndexSnapshot>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    let doc: SnapshotDocument = serde_json::from_str(&raw)?;
    Ok(doc.snapshots)
}

fn validate_input(input: &ScoringInput) -> Result<(), InputError> {
    let mut seen = BTreeSet::new();
    for signpost in &input.signposts {
        if signpost.code.trim().is_empty() {
            return Err(InputError::InvalidInput(
                "signpost code must not be empty".to_string(),
            ));
        }
        if !seen.insert(signpost.code.as_str()) {
            return Err(InputError::InvalidInput(format!(
                "duplicate signpost code: {}",
                signpost.code
            )));
        }
        if signpost.baseline == signpost.target {
            tracing::warn!(
                code = %signpost.code,
                "baseline equals target; progress will be all-or-nothing"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
