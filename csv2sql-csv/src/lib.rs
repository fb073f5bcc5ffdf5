//! CSV decoding for the csv2sql pipeline.
//!
//! Thin adapter over the `csv` crate: raw text in, ordered rows of string
//! cells out. No cell normalization happens here — trimming, literal
//! inference, and row-length validation all belong to the generator
//! downstream. Quoting and escaping follow RFC 4180 as implemented by the
//! `csv` crate.

pub mod reader;

pub use reader::{CsvDecoder, CsvReadOptions};

/// A fully decoded CSV file: the header row plus the remaining data rows.
///
/// Row 0 of the parsed input becomes `header`; rows 1..N become `rows`.
/// Data rows are carried as-is, including malformed ones — the generator's
/// row filter decides what survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvDocument {
    /// Split decoded records into header and data rows.
    ///
    /// Returns `None` when the input produced no records at all, which the
    /// pipeline treats as an empty input rather than an error.
    pub fn from_records(mut records: Vec<Vec<String>>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let header = records.remove(0);
        Some(Self {
            header,
            rows: records,
        })
    }
}
