//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and confirmations.

use std::io::{BufRead, Write};

use crate::io_utils::read_stdin_line;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Ask a yes/no question; anything but `y`/`yes` (or EOF) counts as no.
pub fn confirm(out: &mut dyn Write, stdin: &mut dyn BufRead, question: &str) -> std::io::Result<bool> {
    write!(out, "{} [y/N]: ", question)?;
    out.flush()?;
    let answer = read_stdin_line(stdin).unwrap_or_default();
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}
