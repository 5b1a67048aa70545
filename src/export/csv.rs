//! CSV export functionality.
//!
//! One row per record value, plus a placeholder row for each record type that
//! returned nothing.

use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::CSV_HEADER;
use crate::error_handling::ExportError;

use super::types::ExportData;

/// Writes `data` as CSV to `writer`.
///
/// # Returns
///
/// The number of data rows written (header excluded).
pub fn write_csv<W: Write>(writer: W, data: &ExportData<'_>) -> Result<usize, ExportError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    let rows = data.rows();
    for row in &rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Creates (or truncates) `path` and writes `data` as CSV.
pub fn export_csv(path: &Path, data: &ExportData<'_>) -> Result<usize, ExportError> {
    let file = File::create(path)?;
    write_csv(file, data)
}
