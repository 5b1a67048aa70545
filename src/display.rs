//! Console presentation of results.
//!
//! Text view per domain, an aligned table of the flattened rows, and the JSON
//! preview. Nothing here mutates the results.

use std::io::{self, Write};

use colored::Colorize;

use crate::export::{to_pretty_json, ExportData, ExportRow};
use crate::models::RecordSet;

const TABLE_HEADERS: [&str; 3] = ["Domain", "Record Type", "Record"];

/// Prints one domain's results, one value per line.
pub fn write_text_view<W: Write>(out: &mut W, domain: &str, records: &RecordSet) -> io::Result<()> {
    writeln!(out, "\n{}", format!("Results for {domain}:").bold())?;
    for (record_type, values) in records.iter() {
        writeln!(out, "\n{record_type} Records:")?;
        if values.is_empty() {
            writeln!(out, "  No records found.")?;
        } else {
            for value in values {
                writeln!(out, "  - {value}")?;
            }
        }
    }
    Ok(())
}

/// Renders rows as a left-aligned table with a header line.
pub fn render_table(rows: &[ExportRow]) -> String {
    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, field) in widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(field.chars().count());
        }
    }

    let mut table = String::new();
    push_table_line(&mut table, &widths, TABLE_HEADERS);
    let rule = widths.map(|w| "-".repeat(w));
    push_table_line(&mut table, &widths, [&rule[0], &rule[1], &rule[2]]);
    for row in rows {
        push_table_line(&mut table, &widths, row.fields());
    }
    table
}

fn push_table_line(table: &mut String, widths: &[usize; 3], fields: [&str; 3]) {
    let line = fields
        .iter()
        .zip(widths)
        .map(|(field, &width)| format!("{field:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(line.trim_end());
    table.push('\n');
}

/// Prints the tabular preview.
pub fn write_table_preview<W: Write>(out: &mut W, data: &ExportData<'_>) -> io::Result<()> {
    writeln!(out, "\n{}", "CSV Preview:".bold())?;
    write!(out, "{}", render_table(&data.rows()))
}

/// Prints the JSON preview, in the same layout the JSON sink writes.
pub fn write_json_preview<W: Write>(out: &mut W, data: &ExportData<'_>) -> io::Result<()> {
    let json = to_pretty_json(data).map_err(io::Error::other)?;
    writeln!(out, "\n{}", "JSON Preview:".bold())?;
    writeln!(out, "{json}")
}
