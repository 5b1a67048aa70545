//! JSON export functionality.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error_handling::ExportError;

use super::types::ExportData;

/// Renders `data` as JSON indented by two spaces.
pub fn to_pretty_json(data: &ExportData<'_>) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Creates (or truncates) `path` and writes `data` as indented JSON.
pub fn export_json(path: &Path, data: &ExportData<'_>) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}
