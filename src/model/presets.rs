use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError, ensure_finite};

/// Relative emphasis of each category. Need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct PresetWeights {
    capabilities: f64,
    agents: f64,
    inputs: f64,
    security: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawWeights {
    #[serde(default)]
    capabilities: f64,
    #[serde(default)]
    agents: f64,
    #[serde(default)]
    inputs: f64,
    #[serde(default)]
    security: f64,
}

impl TryFrom<RawWeights> for PresetWeights {
    type Error = ScoringError;

    fn try_from(raw: RawWeights) -> Result<Self> {
        PresetWeights::new(raw.capabilities, raw.agents, raw.inputs, raw.security)
    }
}

impl PresetWeights {
    /// Validated constructor: every weight finite and nonnegative, not all zero.
    pub fn new(capabilities: f64, agents: f64, inputs: f64, security: f64) -> Result<Self> {
        for (name, value) in [
            ("capabilities", capabilities),
            ("agents", agents),
            ("inputs", inputs),
            ("security", security),
        ] {
            ensure_finite(name, value)?;
            if value < 0.0 {
                return Err(ScoringError::InvalidArgument(format!(
                    "weight for {name} must be nonnegative, got {value}"
                )));
            }
        }
        let weights = Self {
            capabilities,
            agents,
            inputs,
            security,
        };
        if weights.sum() == 0.0 {
            return Err(ScoringError::InvalidArgument(
                "preset weights must not all be zero".to_string(),
            ));
        }
        Ok(weights)
    }

    const fn fixed(capabilities: f64, agents: f64, inputs: f64, security: f64) -> Self {
        Self {
            capabilities,
            agents,
            inputs,
            security,
        }
    }

    pub fn capabilities(&self) -> f64 {
        self.capabilities
    }

    pub fn agents(&self) -> f64 {
        self.agents
    }

    pub fn inputs(&self) -> f64 {
        self.inputs
    }

    pub fn security(&self) -> f64 {
        self.security
    }

    pub fn sum(&self) -> f64 {
        self.capabilities + self.agents + self.inputs + self.security
    }
}

/// Named weighting configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Equal,
    Aschenbrenner,
    /// Near-term scenario weighting.
    Ai2027,
    Cotra,
}

const EQUAL: PresetWeights = PresetWeights::fixed(0.25, 0.25, 0.25, 0.25);
const ASCHENBRENNER: PresetWeights = PresetWeights::fixed(0.2, 0.3, 0.4, 0.1);
const AI2027: PresetWeights = PresetWeights::fixed(0.3, 0.35, 0.25, 0.1);
const COTRA: PresetWeights = PresetWeights::fixed(0.25, 0.25, 0.35, 0.15);

pub fn preset_order() -> &'static [Preset] {
    &[
        Preset::Equal,
        Preset::Aschenbrenner,
        Preset::Ai2027,
        Preset::Cotra,
    ]
}

impl Preset {
    pub fn weights(self) -> PresetWeights {
        match self {
            Preset::Equal => EQUAL,
            Preset::Aschenbrenner => ASCHENBRENNER,
            Preset::Ai2027 => AI2027,
            Preset::Cotra => COTRA,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Preset::Equal => "equal",
            Preset::Aschenbrenner => "aschenbrenner",
            Preset::Ai2027 => "ai2027",
            Preset::Cotra => "cotra",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Equal => "Equal emphasis on every category",
            Preset::Aschenbrenner => "Effective compute, unhobbling and security posture",
            Preset::Ai2027 => "Timeline-aligned near-term scenario",
            Preset::Cotra => "Compute-centric biological anchors view",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Preset {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        preset_order()
            .iter()
            .copied()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| ScoringError::InvalidArgument(format!("unknown preset: {s}")))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/presets.rs"]
mod tests;
