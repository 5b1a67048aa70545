//! Main application flows.
//!
//! This module provides the console wrapper, the batch and interactive
//! orchestration, and the save offer shared by both.

mod batch;
mod console;
mod interactive;
mod save;

use std::io::{BufRead, Write};

use crate::dns::RecordLookup;
use crate::initialization::DiagnosticLog;

// Re-export public API
pub use batch::run_batch;
pub use console::Console;
pub use interactive::run_interactive;
pub use save::offer_save;

/// Everything a flow needs: the lookup backend, the console, and the log.
pub struct Session<'a, L: ?Sized, R, W> {
    /// DNS lookup backend
    pub resolver: &'a L,
    /// Prompt and output console
    pub console: &'a mut Console<R, W>,
    /// Diagnostic log for faults
    pub log: &'a DiagnosticLog,
}

impl<'a, L, R, W> Session<'a, L, R, W>
where
    L: RecordLookup + ?Sized,
    R: BufRead,
    W: Write,
{
    /// Bundles the collaborators of one run.
    pub fn new(resolver: &'a L, console: &'a mut Console<R, W>, log: &'a DiagnosticLog) -> Self {
        Self {
            resolver,
            console,
            log,
        }
    }
}
