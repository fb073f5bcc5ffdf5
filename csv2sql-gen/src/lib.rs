//! SQL statement generation from decoded CSV rows.
//!
//! Given a table name, a header row, and data rows, the generator filters
//! malformed rows, infers a SQL literal for every cell, and assembles one of
//! three statement bodies. The output is plain text; nothing here talks to a
//! database.

pub mod literal;
mod statement;

pub use literal::{Literal, infer_literal, quote_ident, quote_text};

/// Which statement body [`generate`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlType {
    #[default]
    Insert,
    /// Recognized but inert: generation always yields the empty string.
    Update,
    Delete,
}

/// Generation configuration, constructed once and passed immutably.
///
/// Defaults mirror the original tool: INSERT with a TRUNCATE prelude, no
/// DROP TABLE, no AUTO_INCREMENT reset.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub sql_type: SqlType,
    /// Prepend `TRUNCATE` ahead of INSERT unless `drop_table_if_exist` is
    /// set. Default true.
    pub truncate_table: bool,
    /// Prepend `DROP TABLE IF EXISTS` ahead of INSERT; takes precedence
    /// over `truncate_table`. Default false.
    pub drop_table_if_exist: bool,
    /// Append an `ALTER TABLE .. AUTO_INCREMENT = 1` statement after
    /// DELETE. Default false.
    pub reset_auto_increment: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(SqlType::Insert)
    }
}

impl GenerationOptions {
    pub fn new(sql_type: SqlType) -> Self {
        Self {
            sql_type,
            truncate_table: true,
            drop_table_if_exist: false,
            reset_auto_increment: false,
        }
    }
}

/// Generate the SQL text for one decoded CSV file.
///
/// Returns the empty string — never an error — when there is nothing to
/// emit: zero valid data rows after filtering, or [`SqlType::Update`].
/// Callers treat empty output as "produce no artifact".
pub fn generate(
    table_name: &str,
    header: &[String],
    data_rows: &[Vec<String>],
    options: &GenerationOptions,
) -> String {
    let rows = filter_rows(header.len(), data_rows);
    tracing::trace!(
        table = table_name,
        candidates = data_rows.len(),
        kept = rows.len(),
        "filtered data rows"
    );
    if rows.is_empty() {
        return String::new();
    }

    match options.sql_type {
        SqlType::Insert => statement::insert(table_name, header, &rows, options),
        SqlType::Update => statement::update(),
        SqlType::Delete => statement::delete(table_name, &header[0], &rows, options),
    }
}

/// Keep a candidate row iff it has at least one non-empty cell and its cell
/// count exactly matches the header's. Rows failing either test are dropped
/// silently.
fn filter_rows<'a>(header_len: usize, rows: &'a [Vec<String>]) -> Vec<&'a [String]> {
    rows.iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()) && row.len() == header_len)
        .map(Vec::as_slice)
        .collect()
}
