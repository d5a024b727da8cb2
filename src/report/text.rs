use crate::model::category::{IndexMetric, category_order, metric_order};
use crate::model::presets::Preset;
use crate::model::snapshot::IndexSnapshot;
use crate::report::{ReportMeta, format_band, format_f64_6};

pub fn render_report_text(meta: &ReportMeta, snapshots: &[IndexSnapshot]) -> String {
    let mut out = String::new();

    out.push_str("Signpost Proximity Index Report\n");
    out.push_str("===============================\n\n");
    out.push_str(&format!("Tool: {} {}\n", meta.tool_name, meta.tool_version));
    out.push_str(&format!("Input: {}\n", meta.input_path));
    out.push_str(&format!("Signposts: {}\n", meta.n_signposts));
    out.push_str(&format!(
        "Base confidence width: {}\n\n",
        format_f64_6(meta.confidence_width)
    ));

    for (i, snapshot) in snapshots.iter().enumerate() {
        out.push_str(&format!("{}. Preset: {}\n", i + 1, snapshot.preset));
        if let Ok(preset) = snapshot.preset.parse::<Preset>() {
            out.push_str(&format!("About: {}\n", preset.description()));
        }
        out.push_str(&format!(
            "Weights: capabilities={}, agents={}, inputs={}, security={}\n",
            format_f64_6(snapshot.weights.capabilities()),
            format_f64_6(snapshot.weights.agents()),
            format_f64_6(snapshot.weights.inputs()),
            format_f64_6(snapshot.weights.security())
        ));
        for &metric in metric_order() {
            out.push_str(&format!(
                "  {:<14} {}  band {}\n",
                metric.as_str(),
                format_f64_6(snapshot.metrics.get(metric)),
                format_band(&snapshot.band(metric))
            ));
        }
        out.push_str(&format!(
            "Conclusion: {}\n",
            margin_statement(snapshot.metrics.safety_margin)
        ));
        let thin = thin_evidence(snapshot);
        if !thin.is_empty() {
            out.push_str(&format!("No evidence yet for: {}\n", thin.join(", ")));
        }
        if snapshot.insufficient.overall {
            out.push_str("Note: inputs or security has no progress; overall index is not yet meaningful.\n");
        }
        out.push('\n');
    }

    out
}

fn margin_statement(margin: f64) -> &'static str {
    if margin < 0.0 {
        "capabilities are outpacing security readiness"
    } else if margin == 0.0 {
        "security readiness is level with capabilities"
    } else {
        "security readiness is ahead of capabilities"
    }
}

fn thin_evidence(snapshot: &IndexSnapshot) -> Vec<&'static str> {
    category_order()
        .iter()
        .filter(|&&c| {
            snapshot
                .evidence_counts
                .get(&c)
                .map(|e| e.total() == 0)
                .unwrap_or(true)
        })
        .map(|&c| IndexMetric::from(c).as_str())
        .collect()
}
