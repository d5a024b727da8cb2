use serde::Serialize;

use crate::model::snapshot::IndexSnapshot;
use crate::report::ReportMeta;

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
    input: &'a str,
    n_signposts: usize,
    confidence_width: f64,
}

#[derive(Debug, Serialize)]
struct SnapshotDocument<'a> {
    tool: ToolMeta<'a>,
    snapshots: &'a [IndexSnapshot],
}

pub fn render_snapshots_json(
    meta: &ReportMeta,
    snapshots: &[IndexSnapshot],
) -> serde_json::Result<String> {
    let doc = SnapshotDocument {
        tool: ToolMeta {
            name: &meta.tool_name,
            version: &meta.tool_version,
            input: &meta.input_path,
            n_signposts: meta.n_signposts,
            confidence_width: meta.confidence_width,
        },
        snapshots,
    };
    serde_json::to_string_pretty(&doc)
}
