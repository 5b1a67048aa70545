//! Interactive mode: one domain at a time until a blank line.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::{offer_save, Session};
use crate::config::default_record_types;
use crate::display::{write_json_preview, write_table_preview, write_text_view};
use crate::dns::{resolve, RecordLookup};
use crate::export::ExportData;
use crate::selection::prompt_record_types;

/// Prompts for domains until a blank line or end of input.
///
/// Each domain is queried for the default types, narrowed by the user,
/// previewed, and offered for saving on its own.
///
/// # Returns
///
/// The number of domains that produced results.
pub fn run_interactive<L, R, W>(session: &mut Session<'_, L, R, W>) -> Result<usize>
where
    L: RecordLookup + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(
        session.console.out(),
        "No domains specified. Entering interactive mode."
    )?;
    let record_types = default_record_types();
    let mut shown = 0;

    loop {
        let domain = session
            .console
            .prompt("Enter a domain (or press Enter to exit): ")?;
        if domain.is_empty() {
            writeln!(session.console.out(), "Exiting interactive mode.")?;
            break;
        }

        writeln!(session.console.out(), "\nQuerying DNS records for {domain}...\n")?;
        let results = resolve(session.resolver, &domain, &record_types, session.log);

        let available = results.types_with_records();
        if available.is_empty() {
            writeln!(session.console.out(), "No DNS records found for this domain.\n")?;
            continue;
        }

        let chosen = prompt_record_types(session.console, &available)?;
        let filtered = results.select(&chosen);

        write_text_view(session.console.out(), &domain, &filtered)?;
        let data = ExportData::Domain {
            domain: &domain,
            records: &filtered,
        };
        write_table_preview(session.console.out(), &data)?;
        write_json_preview(session.console.out(), &data)?;
        offer_save(session, &data)?;
        writeln!(session.console.out())?;
        shown += 1;
    }

    Ok(shown)
}
