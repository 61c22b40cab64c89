//! YAML export functionality
//!
//! Same content as the JSON export, for human reading.

use std::io::Write;

use super::export_error;
use super::json::FullExport;
use crate::error::TrackerResult;
use crate::storage::Storage;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# fintrack export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(export_error)?;

    Ok(())
}
