//! Batch mode: an explicit domain list, processed once.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::{offer_save, Session};
use crate::config::default_record_types;
use crate::display::{write_json_preview, write_table_preview, write_text_view};
use crate::dns::{resolve, RecordLookup};
use crate::export::ExportData;
use crate::models::{join_record_types, RecordType, ResultBundle};
use crate::selection::prompt_record_types;

/// Queries every domain, then previews and offers to save the combined bundle.
///
/// With `explicit_types` every requested type is kept, empty or not. Without
/// it the defaults are queried and the user picks among the types that
/// returned data; a domain with no data at all is skipped.
///
/// # Returns
///
/// The combined bundle (empty if every domain was skipped).
pub fn run_batch<L, R, W>(
    session: &mut Session<'_, L, R, W>,
    domains: &[String],
    explicit_types: Option<&[RecordType]>,
) -> Result<ResultBundle>
where
    L: RecordLookup + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut bundle = ResultBundle::new();
    if domains.is_empty() {
        writeln!(session.console.out(), "No valid domains provided. Exiting.")?;
        return Ok(bundle);
    }

    let default_types = default_record_types();
    let record_types = explicit_types.unwrap_or(default_types.as_slice());

    for domain in domains {
        writeln!(
            session.console.out(),
            "\nQuerying {domain} for records: {}",
            join_record_types(record_types)
        )?;
        let results = resolve(session.resolver, domain, record_types, session.log);

        let filtered = if explicit_types.is_some() {
            results
        } else {
            let available = results.types_with_records();
            if available.is_empty() {
                writeln!(session.console.out(), "No DNS records found for {domain}.")?;
                continue;
            }
            let chosen = prompt_record_types(session.console, &available)?;
            results.select(&chosen)
        };

        write_text_view(session.console.out(), domain, &filtered)?;
        bundle.insert(domain.as_str(), filtered);
    }

    if bundle.is_empty() {
        writeln!(session.console.out(), "No results to save. Exiting.")?;
        return Ok(bundle);
    }

    let data = ExportData::Bundle(&bundle);
    write_table_preview(session.console.out(), &data)?;
    write_json_preview(session.console.out(), &data)?;
    offer_save(session, &data)?;

    Ok(bundle)
}
