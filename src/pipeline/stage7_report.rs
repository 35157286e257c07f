use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::report::ReportPayload;
use crate::report::json::render_json;
use crate::report::text::render_report_text;

/// Writes `triage.json` and `report.txt` into `out_dir`.
pub fn write_reports(payload: &ReportPayload<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let json = render_json(payload).map_err(std::io::Error::other)?;
    let json_path = out_dir.join("triage.json");
    write_text(&json_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(payload))?;

    info!(out = %out_dir.display(), "reports written");
    Ok(())
}

pub fn print_json(payload: &ReportPayload<'_>) -> std::io::Result<()> {
    let json = render_json(payload).map_err(std::io::Error::other)?;
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(json.as_bytes())?;
    lock.write_all(b"\n")?;
    lock.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
