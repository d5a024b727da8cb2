use serde::{Deserialize, Serialize};

use crate::model::scores::clip01;

/// Credibility tier of a supporting observation, `A` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
    D,
}

pub fn tier_order() -> &'static [Tier] {
    &[Tier::A, Tier::B, Tier::C, Tier::D]
}

impl Tier {
    pub fn quality_weight(self) -> f64 {
        match self {
            Tier::A => 1.0,
            Tier::B => 0.8,
            Tier::C => 0.3,
            Tier::D => 0.1,
        }
    }

    /// A and B readings are trusted enough to move a signpost's value.
    pub fn is_corroborating(self) -> bool {
        matches!(self, Tier::A | Tier::B)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceCounts {
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "C")]
    pub c: u32,
    #[serde(rename = "D")]
    pub d: u32,
}

impl EvidenceCounts {
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::A => self.a,
            Tier::B => self.b,
            Tier::C => self.c,
            Tier::D => self.d,
        }
    }

    pub fn record(&mut self, tier: Tier) {
        let slot = match tier {
            Tier::A => &mut self.a,
            Tier::B => &mut self.b,
            Tier::C => &mut self.c,
            Tier::D => &mut self.d,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        tier_order().iter().map(|&t| u64::from(self.get(t))).sum()
    }

    /// Evidence-weighted average of the tier weights; `None` with no evidence.
    pub fn quality_score(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = tier_order()
            .iter()
            .map(|&t| f64::from(self.get(t)) * t.quality_weight())
            .sum();
        Some(weighted / total as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceBand {
    pub const FULL: ConfidenceBand = ConfidenceBand {
        lower: 0.0,
        upper: 1.0,
    };

    /// `[score - half_width, score + half_width]` with both ends held in `[0, 1]`.
    pub fn around(score: f64, half_width: f64) -> Self {
        Self {
            lower: clip01(score - half_width),
            upper: clip01(score + half_width),
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
