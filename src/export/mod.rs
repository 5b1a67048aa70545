//! Export functionality for query results.
//!
//! This module provides the JSON and CSV sinks, output file name resolution,
//! and [`save`], which reports write failures instead of propagating them.

mod csv;
mod json;
mod row;
mod types;

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::initialization::DiagnosticLog;

pub use self::csv::{export_csv, write_csv};
pub use json::{export_json, to_pretty_json};
pub use row::{bundle_rows, push_domain_rows, ExportRow};
pub use types::{resolve_output_path, ExportData, ExportFormat};

/// Writes `data` to `path` in `format`.
///
/// A failed write is logged as a warning and reported on `out`; it never
/// propagates. Only a failure to write the message itself is returned.
///
/// # Returns
///
/// `Ok(true)` if the file was written.
pub fn save<W: Write>(
    format: ExportFormat,
    path: &Path,
    data: &ExportData<'_>,
    log: &DiagnosticLog,
    out: &mut W,
) -> io::Result<bool> {
    let result = match format {
        ExportFormat::Json => export_json(path, data),
        ExportFormat::Csv => export_csv(path, data).map(|_| ()),
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) => {
            log.warn(format_args!(
                "Failed to save {} to {}: {e}",
                format.label(),
                path.display()
            ));
            writeln!(
                out,
                "{}",
                format!("Error saving {} file: {e}", format.label()).red()
            )?;
            Ok(false)
        }
    }
}
