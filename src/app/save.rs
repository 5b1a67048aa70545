//! The save offer shown after a preview.

use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;

use super::Session;
use crate::dns::RecordLookup;
use crate::export::{resolve_output_path, save, ExportData, ExportFormat};

/// Asks whether and where to save `data`, then writes it.
///
/// # Returns
///
/// The path written to, or `None` if the user skipped saving or the write
/// failed (the failure has already been reported).
pub fn offer_save<L, R, W>(
    session: &mut Session<'_, L, R, W>,
    data: &ExportData<'_>,
) -> Result<Option<String>>
where
    L: RecordLookup + ?Sized,
    R: BufRead,
    W: Write,
{
    let answer = session
        .console
        .prompt("\nSave results? Enter 'json', 'csv', or press Enter to skip: ")?;
    let format = match ExportFormat::from_str(&answer) {
        Ok(format) => format,
        Err(_) => {
            writeln!(session.console.out(), "Results not saved.")?;
            return Ok(None);
        }
    };

    let default_name = data.default_file_name(format);
    let input = session
        .console
        .prompt(&format!("Enter filename (default: {default_name}): "))?;
    let file_name = resolve_output_path(format, &input, &default_name);

    let saved = save(
        format,
        Path::new(&file_name),
        data,
        session.log,
        session.console.out(),
    )?;
    if !saved {
        return Ok(None);
    }
    writeln!(session.console.out(), "Results saved to {file_name}")?;
    Ok(Some(file_name))
}
