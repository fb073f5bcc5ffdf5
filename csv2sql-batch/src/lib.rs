//! Batch conversion pipeline.
//!
//! Expands a source glob, converts each matched CSV file independently, and
//! writes one `<table>.sql` artifact per file into the destination
//! directory. A failure is fatal to its own file only: it is recorded in
//! the [`BatchSummary`] and the batch moves on, instead of one bad file
//! silently aborting the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use csv2sql_csv::{CsvDecoder, CsvDocument, CsvReadOptions};
use csv2sql_gen::{GenerationOptions, generate};
use csv2sql_result::{Error, Result};

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Glob of source CSV files, e.g. `data/*.csv`.
    pub source: String,
    /// Directory the `.sql` artifacts are written into; created when
    /// missing.
    pub dest: PathBuf,
    pub generation: GenerationOptions,
    pub csv: CsvReadOptions,
}

impl BatchOptions {
    pub fn new(source: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            generation: GenerationOptions::default(),
            csv: CsvReadOptions::default(),
        }
    }
}

/// A generated output file: the SQL text and where it was written.
///
/// Created once per source file and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SqlArtifact {
    pub table_name: String,
    pub path: PathBuf,
    pub sql: String,
}

/// Why a file produced no artifact without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not UTF-8 text; the file kind is unsupported.
    Unsupported,
    /// The file contained no CSV records at all.
    EmptyInput,
    /// The generator returned empty output: no valid data rows survived
    /// filtering, or the selected mode is inert.
    NothingToEmit,
}

/// Outcome of converting a single source file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Written(SqlArtifact),
    Skipped(SkipReason),
}

/// A per-file failure captured during a batch run.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Aggregate result of a batch run.
///
/// Ordering of the entries follows glob expansion order but carries no
/// guarantee; files are independent and could be processed in any order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<SqlArtifact>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub failures: Vec<FileFailure>,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn files_seen(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failures.len()
    }
}

/// Derive the SQL table name from a source file path: the portion of the
/// base name before the first `.`.
///
/// The result is used as a SQL identifier without further validation.
pub fn table_name_from_path(path: &Path) -> Result<String> {
    let base = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::InvalidArgumentError(format!(
                "cannot derive a table name from '{}'",
                path.display()
            ))
        })?;
    let table = base.split('.').next().unwrap_or(base);
    if table.is_empty() {
        return Err(Error::InvalidArgumentError(format!(
            "cannot derive a table name from '{}'",
            path.display()
        )));
    }
    Ok(table.to_string())
}

/// Convert one CSV file, writing `<table>.sql` into `dest` when the
/// generator produced output.
///
/// Non-UTF-8 and empty inputs are skipped outcomes, not errors. CSV parse
/// and I/O failures surface as errors scoped to this file.
pub fn convert_file(path: &Path, dest: &Path, options: &BatchOptions) -> Result<FileOutcome> {
    let bytes = fs::read(path)?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            tracing::warn!(path = %path.display(), "content is not UTF-8 text, skipping");
            return Ok(FileOutcome::Skipped(SkipReason::Unsupported));
        }
    };
    if content.is_empty() {
        tracing::debug!(path = %path.display(), "file is empty, skipping");
        return Ok(FileOutcome::Skipped(SkipReason::EmptyInput));
    }

    let decoder = CsvDecoder::new(options.csv.clone());
    let Some(CsvDocument { header, rows }) = decoder.decode_document(&content)? else {
        tracing::debug!(path = %path.display(), "no CSV records, skipping");
        return Ok(FileOutcome::Skipped(SkipReason::EmptyInput));
    };

    let table_name = table_name_from_path(path)?;
    let sql = generate(&table_name, &header, &rows, &options.generation);
    if sql.is_empty() {
        return Ok(FileOutcome::Skipped(SkipReason::NothingToEmit));
    }

    let artifact_path = dest.join(format!("{table_name}.sql"));
    fs::write(&artifact_path, &sql)?;
    tracing::debug!(path = %artifact_path.display(), "wrote artifact");

    Ok(FileOutcome::Written(SqlArtifact {
        table_name,
        path: artifact_path,
        sql,
    }))
}

/// Run a whole batch: expand the source glob and convert every matched
/// file.
///
/// Returns an error only for problems that sink the batch before it starts
/// (a malformed glob pattern, an unusable destination). Everything per-file
/// lands in the summary.
pub fn run_batch(options: &BatchOptions) -> Result<BatchSummary> {
    let paths = glob::glob(&options.source).map_err(|err| {
        Error::InvalidArgumentError(format!("invalid source glob '{}': {err}", options.source))
    })?;
    fs::create_dir_all(&options.dest)?;

    let mut summary = BatchSummary::default();
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                let path = err.path().to_path_buf();
                summary.failures.push(FileFailure {
                    path,
                    error: Error::Io(err.into_error()),
                });
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }

        match convert_file(&path, &options.dest, options) {
            Ok(FileOutcome::Written(artifact)) => summary.written.push(artifact),
            Ok(FileOutcome::Skipped(reason)) => summary.skipped.push((path, reason)),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "conversion failed");
                summary.failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(summary)
}
