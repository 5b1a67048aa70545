//! Record type selection.
//!
//! [`select_record_types`] is the pure selection rule; [`prompt_record_types`]
//! wraps it with the console exchange.

use std::io::{self, BufRead, Write};

use crate::app::Console;
use crate::models::{join_record_types, RecordType};

/// Outcome of applying a user's selection to the available types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen types, never empty when `available` is not.
    pub chosen: Vec<RecordType>,
    /// True when the input named something but nothing valid, and every
    /// available type was selected instead.
    pub fell_back: bool,
}

/// Applies the raw selection `input` to `available`.
///
/// - Blank input selects everything.
/// - Otherwise comma-separated tokens are trimmed and uppercased; tokens that
///   name an available type are kept in the order typed, first occurrence only.
/// - If no token is valid, everything is selected and `fell_back` is set.
pub fn select_record_types(available: &[RecordType], input: &str) -> Selection {
    if input.trim().is_empty() {
        return Selection {
            chosen: available.to_vec(),
            fell_back: false,
        };
    }

    let mut chosen: Vec<RecordType> = Vec::new();
    for token in input.split(',').map(RecordType::new) {
        if available.contains(&token) && !chosen.contains(&token) {
            chosen.push(token);
        }
    }

    if chosen.is_empty() {
        Selection {
            chosen: available.to_vec(),
            fell_back: true,
        }
    } else {
        Selection {
            chosen,
            fell_back: false,
        }
    }
}

/// Shows the available types, reads a selection, and applies it.
pub fn prompt_record_types<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    available: &[RecordType],
) -> io::Result<Vec<RecordType>> {
    writeln!(
        console.out(),
        "Record types found: {}",
        join_record_types(available)
    )?;
    let input =
        console.prompt("Enter record types to display separated by comma (default: all): ")?;

    let selection = select_record_types(available, &input);
    if selection.fell_back {
        writeln!(console.out(), "No valid record types selected, showing all.\n")?;
    }
    Ok(selection.chosen)
}
