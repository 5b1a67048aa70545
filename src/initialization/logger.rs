//! Diagnostic log initialization.
//!
//! The diagnostic log is an append-only text file, one line per entry:
//! `2026-10-17 09:30:12,481 - WARN - message`. It is an explicit value owned by
//! `main` and lent to the components that report problems; no global logger is
//! installed.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Target, WriteStyle};
use log::{Level, LevelFilter, Log, Record};

use crate::config::LOG_FILE_NAME;
use crate::error_handling::InitializationError;

const LOG_TARGET: &str = "dns_query_tool";

/// Append-only sink for warnings and errors.
pub struct DiagnosticLog {
    logger: env_logger::Logger,
    path: Option<PathBuf>,
}

impl DiagnosticLog {
    /// Opens (or creates) the log file at `path` in append mode.
    ///
    /// `RUST_LOG` is read first; `level` overrides it.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::LoggerSetupError` if the file cannot be opened.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self, InitializationError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| InitializationError::LoggerSetupError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            logger: build_logger(level, Target::Pipe(Box::new(file))),
            path: Some(path.to_path_buf()),
        })
    }

    /// Builds a log that writes to standard error.
    ///
    /// Used when the log file cannot be opened.
    pub fn stderr(level: LevelFilter) -> Self {
        Self {
            logger: build_logger(level, Target::Stderr),
            path: None,
        }
    }

    /// Writes a warning entry.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args);
    }

    /// Writes an error entry.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    /// Writes an informational entry (hidden at the default `warn` level).
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    /// Flushes and closes the log.
    pub fn close(self) {
        self.logger.flush();
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        self.logger.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(LOG_TARGET)
                .build(),
        );
    }
}

impl fmt::Debug for DiagnosticLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticLog")
            .field("path", &self.path)
            .field("level", &self.logger.filter())
            .finish()
    }
}

/// Default log location: `dns_tool_errors.log` next to the executable, or in the
/// working directory when the executable path is unknown.
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Opens the diagnostic log, falling back to standard error if the file cannot
/// be opened.
pub fn init_diagnostic_log(path: Option<&Path>, level: LevelFilter) -> DiagnosticLog {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    match DiagnosticLog::open(&path, level) {
        Ok(log) => log,
        Err(e) => {
            let log = DiagnosticLog::stderr(level);
            log.warn(format_args!("{e}; logging to stderr"));
            log
        }
    }
}

fn build_logger(level: LevelFilter, target: Target) -> env_logger::Logger {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.write_style(WriteStyle::Never);
    builder.target(target);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.level(),
            record.args()
        )
    });
    builder.build()
}
