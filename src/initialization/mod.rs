//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Diagnostic log
//! - DNS resolver
//! - Interrupt (Ctrl-C) handler
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

// Re-export public API
pub use logger::{default_log_path, init_diagnostic_log, DiagnosticLog};
pub use resolver::init_resolver;

use crate::error_handling::InitializationError;

/// Installs the Ctrl-C handler.
///
/// An interrupt prints a short notice and exits with status 0 instead of
/// leaving the process mid-prompt.
///
/// # Errors
///
/// Returns `InitializationError::InterruptHandlerError` if a handler is already
/// installed or the signal cannot be hooked.
pub fn init_interrupt_handler() -> Result<(), InitializationError> {
    ctrlc::set_handler(|| {
        println!("\nProcess interrupted by user. Exiting.");
        std::process::exit(0);
    })?;
    Ok(())
}
