//! Scoring engine for the signpost proximity index.
//!
//! Observed metric values are normalized into signpost progress, averaged into
//! category scores, and combined into an overall index (harmonic mean of
//! effective capability and inputs) plus a safety margin. Confidence bands are
//! derived separately from per-tier evidence counts. Every function here is
//! pure and safe to call from any thread.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{Result, ScoringError};
pub use model::category::{Category, IndexMetric};
pub use model::evidence::{ConfidenceBand, EvidenceCounts, Tier};
pub use model::presets::{Preset, PresetWeights};
pub use model::scores::{CategoryScores, IndexMetrics};
pub use model::signpost::{Direction, MetricObservation, Observation, Signpost};
pub use model::snapshot::{IndexSnapshot, InsufficientData};
pub use pipeline::stage1_progress::compute_progress;
pub use pipeline::stage2_aggregate::{aggregate_category, score_categories, score_category};
pub use pipeline::stage3_index::{
    compute_index_from_categories, compute_overall, compute_safety_margin,
};
pub use pipeline::stage4_bands::{
    DEFAULT_CONFIDENCE_WIDTH, compute_confidence_bands, tally_evidence,
};
pub use pipeline::stage5_snapshot::{
    SIGNIFICANT_DELTA, build_preset_snapshots, build_snapshot, significant_change,
};
