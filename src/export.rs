//! Writing reports to disk.
//!
//! File names follow `<stem>_<YYYYMMDD_HHMMSS>_<table>.<ext>` in the output directory.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use log::info;
use serde::Serialize;

use crate::Report;
use crate::error::Result;
use crate::page::{render_page, render_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
pub enum ExportFormat {
    /// Single self-contained HTML page
    #[default]
    Html,
    /// Full report as pretty-printed JSON
    Json,
    /// Comma-separated tables
    Csv,
    /// Tab-separated tables
    Tsv,
    /// Plain-text summary
    Txt,
}

/// Prefix cells that a spreadsheet would evaluate as a formula. Plain numbers pass through.
/// # Example
/// ```
/// use text_profile::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)"), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("cat"), "cat");
/// ```
pub fn csv_safe_cell(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) && cell.parse::<f64>().is_err() {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Write `report` in `format` into `out_dir`. Returns the written paths.
pub fn export_report(report: &Report, format: ExportFormat, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let stem = file_stem(&report.source);
    let target = |table: &str, ext: &str| out_dir.join(format!("{stem}_{stamp}_{table}.{ext}"));

    let written = match format {
        ExportFormat::Html => {
            let path = target("report", "html");
            fs::write(&path, render_page(report))?;
            vec![path]
        }
        ExportFormat::Json => {
            let path = target("report", "json");
            fs::write(&path, serde_json::to_string_pretty(report)?)?;
            vec![path]
        }
        ExportFormat::Txt => {
            let path = target("summary", "txt");
            fs::write(&path, render_summary(report))?;
            vec![path]
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let (delimiter, ext) = if format == ExportFormat::Csv {
                (b',', "csv")
            } else {
                (b'\t', "tsv")
            };
            let stats = vec![
                ("Word Count".to_string(), report.stats.word_count.to_string()),
                (
                    "Vocabulary Size".to_string(),
                    report.stats.vocabulary_size.to_string(),
                ),
            ];
            let pos: Vec<(String, String)> = report
                .pos
                .iter()
                .map(|(category, count)| (category.to_string(), count.to_string()))
                .collect();
            let wordfreq: Vec<(String, String)> = report
                .frequencies
                .iter()
                .map(|(word, count)| (word.clone(), count.to_string()))
                .collect();
            let sentiment = vec![
                (
                    "Polarity".to_string(),
                    format!("{:.3}", report.sentiment.polarity),
                ),
                (
                    "Subjectivity".to_string(),
                    format!("{:.3}", report.sentiment.subjectivity),
                ),
                ("Label".to_string(), report.sentiment.label.to_string()),
            ];

            let tables = [
                ("stats", ["Metric", "Value"], stats),
                ("pos", ["POS", "Count"], pos),
                ("wordfreq", ["item", "count"], wordfreq),
                ("sentiment", ["Metric", "Value"], sentiment),
            ];
            let mut paths = Vec::with_capacity(tables.len());
            for (table, header, rows) in tables {
                let path = target(table, ext);
                write_table(&path, delimiter, header, &rows)?;
                paths.push(path);
            }
            paths
        }
    };

    for path in &written {
        info!("Exported {}", path.display());
    }
    Ok(written)
}

fn write_table(path: &Path, delimiter: u8, header: [&str; 2], rows: &[(String, String)]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    writer.write_record(header)?;
    for (key, value) in rows {
        writer.write_record([csv_safe_cell(key).as_ref(), csv_safe_cell(value).as_ref()])?;
    }
    writer.flush()?;
    Ok(())
}

// Stem of the source file name, reduced to characters safe in a file name.
fn file_stem(source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cleaned: String = stem
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned
    }
}
