//! Output formatting and persistence for analysis reports.
//!
//! Supports pretty-printing, JSON serialization, and per-summary CSV export.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::AnalysisReport;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &AnalysisReport) {
    debug!("{:#?}", report);
}

/// Writes a report to stdout as pretty-printed JSON.
pub fn print_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report to a file as pretty-printed JSON.
pub fn write_json(path: &Path, report: &AnalysisReport) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(report)?)?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

/// Exports the three summary tables as CSV files under `dir`, one file per
/// chart consumed by the rendering layer.
pub fn write_summary_csvs(dir: &Path, report: &AnalysisReport) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_rows(&dir.join("frequencia_sintomas.csv"), &report.symptom_frequency)?;
    write_rows(
        &dir.join("internacoes_por_faixa_etaria.csv"),
        &report.hospitalization_by_age,
    )?;
    write_rows(&dir.join("rendimento_por_febre.csv"), &report.income_by_fever)?;
    Ok(())
}

fn write_rows<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "Summary CSV written");
    Ok(())
}
