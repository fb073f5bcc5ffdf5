use csv::ReaderBuilder;
use csv2sql_result::{Error, Result};

use crate::CsvDocument;

#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter. Default `b','`.
    pub delimiter: u8,
    /// Quote character for fields containing delimiters or newlines.
    /// Default `b'"'`.
    pub quote: u8,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvReadOptions {
    pub(crate) fn to_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote);
        builder
    }
}

/// Decodes raw CSV text into ordered rows of string cells.
///
/// The decoder never interprets the header specially (`has_headers(false)`)
/// and accepts records of uneven length (`flexible(true)`); splitting off
/// the header and dropping malformed rows are downstream concerns.
#[derive(Debug, Clone, Default)]
pub struct CsvDecoder {
    options: CsvReadOptions,
}

impl CsvDecoder {
    pub fn new(options: CsvReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsvReadOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CsvReadOptions {
        &mut self.options
    }

    pub fn into_options(self) -> CsvReadOptions {
        self.options
    }

    /// Decode all records of `content`, in file order.
    ///
    /// A tokenization failure aborts decoding for this input and surfaces
    /// as [`Error::CsvParse`]; callers processing a batch keep going with
    /// the next file.
    pub fn decode_str(&self, content: &str) -> Result<Vec<Vec<String>>> {
        let mut reader = self.options.to_builder().from_reader(content.as_bytes());
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(Error::csv_parse)?;
            records.push(record.iter().map(str::to_string).collect());
        }
        Ok(records)
    }

    /// Decode `content` and split it into header and data rows.
    ///
    /// Returns `Ok(None)` for input that yields no records.
    pub fn decode_document(&self, content: &str) -> Result<Option<CsvDocument>> {
        let records = self.decode_str(content)?;
        Ok(CsvDocument::from_records(records))
    }
}
