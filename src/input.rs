//! Newline-delimited integer input.
//!
//! The demo driver reads its array from a line-oriented text source where
//! each line holds exactly one integer literal. File order is preserved.
//! There is no format flexibility: blank lines, comments, and alternative
//! delimiters are all malformed and abort the parse with the offending
//! line's number and text.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that occur while loading an integer sequence.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: not an integer: {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse newline-delimited integers from in-memory text, preserving order.
///
/// Empty input yields an empty sequence. The first malformed line aborts the
/// parse; nothing is recovered or skipped.
pub fn parse_integers(source: &str) -> Result<Vec<i64>, InputError> {
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| {
            raw.trim().parse::<i64>().map_err(|_| InputError::MalformedLine {
                line: idx + 1,
                text: raw.to_string(),
            })
        })
        .collect()
}

/// Read and parse an integer sequence from a file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_integers(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    let source = fs::read_to_string(path.as_ref())?;
    let seq = parse_integers(&source)?;
    tracing::debug!(count = seq.len(), "loaded integer sequence");
    Ok(seq)
}
