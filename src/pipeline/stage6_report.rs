use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::snapshot::IndexSnapshot;
use crate::report::ReportMeta;
use crate::report::json::render_snapshots_json;
use crate::report::text::render_report_text;

pub const SNAPSHOT_FILE: &str = "snapshot.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub snapshot_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn write_reports(
    meta: &ReportMeta,
    snapshots: &[IndexSnapshot],
    out_dir: &Path,
) -> Result<WrittenReports, ReportError> {
    fs::create_dir_all(out_dir)?;

    let snapshot_path = out_dir.join(SNAPSHOT_FILE);
    let json = render_snapshots_json(meta, snapshots)?;
    write_text(&snapshot_path, &json)?;

    let report_path = out_dir.join(REPORT_FILE);
    let report = render_report_text(meta, snapshots);
    write_text(&report_path, &report)?;

    tracing::info!(
        snapshot = %snapshot_path.display(),
        report = %report_path.display(),
        "reports written"
    );

    Ok(WrittenReports {
        snapshot_path,
        report_path,
    })
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
