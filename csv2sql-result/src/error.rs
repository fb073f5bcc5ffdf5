use std::io;
use thiserror::Error;

/// Unified error type for all csv2sql operations.
///
/// Each variant corresponds to a distinct failure class in the pipeline. An
/// error is fatal to the file being processed, not to the whole batch; the
/// batch layer collects per-file errors and surfaces them in its summary.
///
/// # Error Handling Strategy
///
/// Errors propagate upward with the `?` operator. At the CLI boundary they
/// are rendered as user-facing messages and folded into the process exit
/// status. Internal code can match on specific variants for fine-grained
/// handling.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a source file or writing an artifact.
    ///
    /// Wraps the standard library error, which carries the detail
    /// (permission denied, disk full, file not found, and so on).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV content could not be tokenized.
    ///
    /// Raised by the decoder when the `csv` crate rejects the input. The
    /// file that triggered it produces no artifact; other files in the
    /// batch are unaffected.
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// Invalid user input or API parameter.
    ///
    /// Covers malformed glob patterns, unusable destination paths, and
    /// source files without a derivable table name. These abort the batch
    /// before any per-file work starts, since there is nothing sensible to
    /// continue with.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// Should never occur during normal operation; the message describes
    /// the invariant that was violated.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create a [`Error::CsvParse`] from any displayable error.
    ///
    /// Convenience for adapting the `csv` crate's error type at the decoder
    /// boundary while preserving its message.
    #[inline]
    pub fn csv_parse<E: std::fmt::Display>(err: E) -> Self {
        Error::CsvParse(err.to_string())
    }
}
