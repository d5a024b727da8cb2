pub mod json;
pub mod text;

use crate::model::evidence::ConfidenceBand;

#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub input_path: String,
    pub n_signposts: usize,
    pub confidence_width: f64,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_band(band: &ConfidenceBand) -> String {
    format!(
        "[{}, {}]",
        format_f64_6(band.lower),
        format_f64_6(band.upper)
    )
}
