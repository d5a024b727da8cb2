use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::model::category::Category;
use crate::model::evidence::Tier;
use crate::pipeline::stage1_progress::compute_progress;

/// Which way a metric has to move to reach its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Direction {
    /// Higher is better (`>=`).
    Increasing,
    /// Lower is better (`<=`).
    Decreasing,
}

impl Direction {
    pub fn as_operator(self) -> &'static str {
        match self {
            Direction::Increasing => ">=",
            Direction::Decreasing => "<=",
        }
    }
}

impl FromStr for Direction {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            ">=" => Ok(Direction::Increasing),
            "<=" => Ok(Direction::Decreasing),
            other => match other.to_ascii_lowercase().as_str() {
                "increasing" => Ok(Direction::Increasing),
                "decreasing" => Ok(Direction::Decreasing),
                _ => Err(ScoringError::InvalidArgument(format!(
                    "invalid direction: {other:?} (use '>=' or '<=')"
                ))),
            },
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Direction> for &'static str {
    fn from(value: Direction) -> Self {
        value.as_operator()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_operator())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricObservation {
    pub observed: f64,
    pub baseline: f64,
    pub target: f64,
    pub direction: Direction,
}

impl MetricObservation {
    pub fn progress(&self) -> Result<f64> {
        compute_progress(self.observed, self.baseline, self.target, self.direction)
    }
}

/// One reported reading for a signpost, tagged with its source tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub value: f64,
    pub tier: Tier,
    #[serde(default)]
    pub retracted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signpost {
    pub code: String,
    pub category: Category,
    pub direction: Direction,
    pub baseline: f64,
    pub target: f64,
    #[serde(default)]
    pub first_class: bool,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl Signpost {
    /// Highest non-retracted A/B reading, or the baseline when there is none.
    pub fn current_value(&self) -> f64 {
        self.observations
            .iter()
            .filter(|o| !o.retracted && o.tier.is_corroborating())
            .map(|o| o.value)
            .fold(None, |acc: Option<f64>, v| match acc {
                Some(best) if best >= v => Some(best),
                _ => Some(v),
            })
            .unwrap_or(self.baseline)
    }

    pub fn observation(&self) -> MetricObservation {
        MetricObservation {
            observed: self.current_value(),
            baseline: self.baseline,
            target: self.target,
            direction: self.direction,
        }
    }

    pub fn progress(&self) -> Result<f64> {
        self.observation().progress()
    }

    /// First-class signposts count double inside their category.
    pub fn weight(&self) -> f64 {
        if self.first_class { 2.0 } else { 1.0 }
    }

    pub fn live_observations(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter().filter(|o| !o.retracted)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/signpost.rs"]
mod tests;
