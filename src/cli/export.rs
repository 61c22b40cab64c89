//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV of expenses
    Csv,
    /// CSV of calendar events
    EventsCsv,
    /// JSON (everything)
    Json,
    /// YAML (everything, human-readable)
    Yaml,
}

/// Handle the export command
///
/// Writes to `output` when given, otherwise to stdout.
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> TrackerResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer, pretty)?;
            writer.flush()?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer, pretty)?;
            writer.flush()?;
        }
    }

    tracing::info!(?format, "export written");
    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => {
            csv::export_expenses_csv(storage, writer)?;
        }
        ExportFormat::EventsCsv => {
            csv::export_events_csv(storage, writer)?;
        }
        ExportFormat::Json => {
            json::export_full_json(storage, writer, pretty)?;
            writeln!(writer)?;
        }
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer)?,
    }
    Ok(())
}
