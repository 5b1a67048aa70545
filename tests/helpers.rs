// Shared test helpers: a table-driven resolver stub, in-memory consoles, and
// scratch diagnostic logs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use dns_query_tool::app::Console;
use dns_query_tool::dns::{LookupOutcome, RecordLookup};
use dns_query_tool::initialization::DiagnosticLog;
use dns_query_tool::RecordType;
use log::LevelFilter;
use tempfile::TempDir;

/// Console reading from a fixed script and writing into memory.
#[allow(dead_code)] // Used by other test files
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Resolver stub answering from a table. Unlisted pairs answer `Empty`.
#[derive(Default)]
pub struct StubResolver {
    answers: HashMap<(String, String), LookupOutcome>,
    queries: RefCell<Vec<String>>,
}

#[allow(dead_code)] // Used by other test files
impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `domain`/`record_type` with the given values.
    pub fn found(self, domain: &str, record_type: &str, values: &[&str]) -> Self {
        self.answer(
            domain,
            record_type,
            LookupOutcome::Found(values.iter().map(|v| v.to_string()).collect()),
        )
    }

    /// Answers `domain`/`record_type` with a resolver fault.
    pub fn fault(self, domain: &str, record_type: &str, message: &str) -> Self {
        self.answer(domain, record_type, LookupOutcome::Fault(message.to_string()))
    }

    pub fn answer(mut self, domain: &str, record_type: &str, outcome: LookupOutcome) -> Self {
        self.answers
            .insert((domain.to_string(), record_type.to_string()), outcome);
        self
    }

    /// Queries received so far, as `domain/TYPE`.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl RecordLookup for StubResolver {
    fn lookup(&self, domain: &str, record_type: &RecordType) -> LookupOutcome {
        self.queries
            .borrow_mut()
            .push(format!("{domain}/{record_type}"));
        self.answers
            .get(&(domain.to_string(), record_type.to_string()))
            .cloned()
            .unwrap_or(LookupOutcome::Empty)
    }
}

/// Console fed with `script`, one answer per line.
#[allow(dead_code)] // Used by other test files
pub fn scripted_console(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Everything written to the console so far.
#[allow(dead_code)] // Used by other test files
pub fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

/// Opens a warn-level diagnostic log inside `dir`.
#[allow(dead_code)] // Used by other test files
pub fn scratch_log(dir: &TempDir) -> (DiagnosticLog, PathBuf) {
    let path = dir.path().join("dns_tool_errors.log");
    let log = DiagnosticLog::open(&path, LevelFilter::Warn).expect("Failed to open test log");
    (log, path)
}

/// Lines of a log file (empty if it was never written).
#[allow(dead_code)] // Used by other test files
pub fn log_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
