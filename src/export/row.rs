//! Shared export row building logic.
//!
//! Flattens results into (domain, record type, value) rows. The tabular preview
//! and the CSV sink both use these rows, so what is previewed is what is saved.

use crate::config::NO_RECORDS_PLACEHOLDER;
use crate::models::{RecordSet, ResultBundle};

/// A single flattened row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// Queried domain
    pub domain: String,
    /// Record type tag
    pub record_type: String,
    /// Record value, or the "No records found" placeholder
    pub value: String,
}

impl ExportRow {
    /// Row fields in column order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.domain, &self.record_type, &self.value]
    }
}

/// Appends the rows of one domain's record set to `rows`.
///
/// A type with N values yields N rows; a type with none yields one
/// placeholder row.
pub fn push_domain_rows(rows: &mut Vec<ExportRow>, domain: &str, records: &RecordSet) {
    for (record_type, values) in records.iter() {
        if values.is_empty() {
            rows.push(ExportRow {
                domain: domain.to_string(),
                record_type: record_type.to_string(),
                value: NO_RECORDS_PLACEHOLDER.to_string(),
            });
        } else {
            rows.extend(values.iter().map(|value| ExportRow {
                domain: domain.to_string(),
                record_type: record_type.to_string(),
                value: value.clone(),
            }));
        }
    }
}

/// Flattens a whole bundle, domains in query order.
pub fn bundle_rows(bundle: &ResultBundle) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    for (domain, records) in bundle.iter() {
        push_domain_rows(&mut rows, domain, records);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordType;

    #[test]
    fn test_type_without_values_yields_single_placeholder_row() {
        let records: RecordSet = vec![(RecordType::new("MX"), Vec::new())]
            .into_iter()
            .collect();
        let mut rows = Vec::new();
        push_domain_rows(&mut rows, "example.com", &records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields(), ["example.com", "MX", "No records found"]);
    }

    #[test]
    fn test_type_with_n_values_yields_n_rows() {
        let records: RecordSet = vec![(
            RecordType::new("A"),
            vec!["192.0.2.1".to_string(), "192.0.2.2".to_string(), "192.0.2.3".to_string()],
        )]
        .into_iter()
        .collect();
        let mut rows = Vec::new();
        push_domain_rows(&mut rows, "example.com", &records);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.record_type == "A"));
        assert_eq!(rows[2].value, "192.0.2.3");
    }

    #[test]
    fn test_bundle_rows_keep_domain_order() {
        let mut bundle = ResultBundle::new();
        bundle.insert(
            "b.example",
            vec![(RecordType::new("A"), vec!["192.0.2.9".to_string()])]
                .into_iter()
                .collect(),
        );
        bundle.insert(
            "a.example",
            vec![(RecordType::new("TXT"), Vec::new())].into_iter().collect(),
        );

        let domains: Vec<String> = bundle_rows(&bundle).into_iter().map(|r| r.domain).collect();
        assert_eq!(domains, vec!["b.example", "a.example"]);
    }
}
