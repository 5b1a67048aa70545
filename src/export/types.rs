//! Export types and options.

use serde::ser::{Serialize, Serializer};
use strum_macros::{Display, EnumString};

use crate::config::{BATCH_OUTPUT_STEM, DOMAIN_OUTPUT_SUFFIX};
use crate::models::{RecordSet, ResultBundle};

use super::row::{bundle_rows, push_domain_rows, ExportRow};

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    /// Indented JSON object
    Json,
    /// Flat `domain,record type,record info` rows
    Csv,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Upper-case name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

/// What a sink writes.
///
/// Batch mode exports the whole bundle keyed by domain. Interactive mode exports
/// one domain; its JSON is the bare record set, while its CSV rows still carry
/// the domain column.
#[derive(Debug, Clone, Copy)]
pub enum ExportData<'a> {
    /// Every domain of a batch run.
    Bundle(&'a ResultBundle),
    /// A single domain from interactive mode.
    Domain {
        /// Queried domain
        domain: &'a str,
        /// Its filtered results
        records: &'a RecordSet,
    },
}

impl ExportData<'_> {
    /// Flattened rows for the table preview and the CSV sink.
    pub fn rows(&self) -> Vec<ExportRow> {
        match self {
            ExportData::Bundle(bundle) => bundle_rows(bundle),
            ExportData::Domain { domain, records } => {
                let mut rows = Vec::new();
                push_domain_rows(&mut rows, domain, records);
                rows
            }
        }
    }

    /// Default output file name for `format`.
    pub fn default_file_name(&self, format: ExportFormat) -> String {
        match self {
            ExportData::Bundle(_) => format!("{BATCH_OUTPUT_STEM}.{}", format.extension()),
            ExportData::Domain { domain, .. } => {
                format!("{domain}{DOMAIN_OUTPUT_SUFFIX}.{}", format.extension())
            }
        }
    }
}

impl Serialize for ExportData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExportData::Bundle(bundle) => bundle.serialize(serializer),
            ExportData::Domain { records, .. } => records.serialize(serializer),
        }
    }
}

/// Resolves the file name the user typed for `format`.
///
/// Blank input gives `default_name`. A name already ending in `.<ext>`
/// (any case) is kept; otherwise `.<ext>` is appended.
pub fn resolve_output_path(format: ExportFormat, input: &str, default_name: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return default_name.to_string();
    }
    let extension = format!(".{}", format.extension());
    if input.to_lowercase().ends_with(&extension) {
        input.to_string()
    } else {
        format!("{input}{extension}")
    }
}
