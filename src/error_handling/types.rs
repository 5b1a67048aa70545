//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// The diagnostic log file could not be opened for appending.
    #[error("Logger initialization error: cannot open {path}: {source}")]
    LoggerSetupError {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(#[from] std::io::Error),

    /// Error installing the Ctrl-C handler.
    #[error("Interrupt handler initialization error: {0}")]
    InterruptHandlerError(#[from] ctrlc::Error),
}

/// Error types for writing results to a file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
