//! Configuration constants.
//!
//! Defaults for record types, output file names, and the diagnostic log.

/// Record types queried when `--records` is not given, and in interactive mode.
pub const DEFAULT_RECORD_TYPES: [&str; 4] = ["A", "CNAME", "AAAA", "TXT"];

/// Stem of the default output file name in batch mode (`dns_results.<ext>`).
pub const BATCH_OUTPUT_STEM: &str = "dns_results";

/// Suffix of the default output file name in interactive mode
/// (`<domain>_dns_results.<ext>`).
pub const DOMAIN_OUTPUT_SUFFIX: &str = "_dns_results";

/// File name of the diagnostic log, placed next to the executable by default.
pub const LOG_FILE_NAME: &str = "dns_tool_errors.log";

/// Placeholder written for a record type that returned no values.
pub const NO_RECORDS_PLACEHOLDER: &str = "No records found";

/// Header row of the CSV sink.
pub const CSV_HEADER: [&str; 3] = ["domain", "record type", "record info"];
