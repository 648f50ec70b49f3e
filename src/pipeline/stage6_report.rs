use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::report::{AnalysisReport, render_table_tsv};

pub const JSON_FILE: &str = "analysis.json";
pub const TEXT_FILE: &str = "report.txt";
pub const TABLE_FILE: &str = "key_values.tsv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Full,
    Summary,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(
    report: &AnalysisReport,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.display().to_string(),
        source,
    })?;

    let mut written = Vec::new();

    let json_path = out_dir.join(JSON_FILE);
    write_text(&json_path, &render_report_json(report)?)?;
    written.push(json_path);

    if mode == ReportMode::Summary {
        return Ok(written);
    }

    let text_path = out_dir.join(TEXT_FILE);
    write_text(&text_path, &render_report_text(report))?;
    written.push(text_path);

    let table_path = out_dir.join(TABLE_FILE);
    write_text(&table_path, &render_table_tsv(&report.key_values))?;
    written.push(table_path);

    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
