use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use csv2sql_batch::{BatchOptions, BatchSummary, run_batch};
use csv2sql_gen::{GenerationOptions, SqlType};

#[derive(Parser)]
#[command(
    name = "csv2sql",
    about = "Convert CSV files into SQL load scripts, one .sql file per input"
)]
struct Cli {
    /// Source glob of CSV files, e.g. "data/*.csv".
    #[arg(value_name = "SOURCE_GLOB")]
    source: String,
    /// Destination directory for the generated .sql files.
    #[arg(value_name = "DEST_DIR")]
    dest: PathBuf,
    /// Statement kind to generate.
    #[arg(long = "sql-type", value_enum, default_value_t = SqlTypeArg::Insert)]
    sql_type: SqlTypeArg,
    /// Skip the TRUNCATE statement ahead of INSERT.
    #[arg(long = "no-truncate")]
    no_truncate: bool,
    /// Emit DROP TABLE IF EXISTS ahead of INSERT (takes precedence over
    /// truncation).
    #[arg(long = "drop-table")]
    drop_table: bool,
    /// Append an AUTO_INCREMENT reset after DELETE.
    #[arg(long = "reset-auto-increment")]
    reset_auto_increment: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SqlTypeArg {
    Insert,
    /// Recognized but inert: produces no artifacts.
    Update,
    Delete,
}

impl From<SqlTypeArg> for SqlType {
    fn from(arg: SqlTypeArg) -> Self {
        match arg {
            SqlTypeArg::Insert => SqlType::Insert,
            SqlTypeArg::Update => SqlType::Update,
            SqlTypeArg::Delete => SqlType::Delete,
        }
    }
}

impl Cli {
    fn generation_options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::new(self.sql_type.into());
        options.truncate_table = !self.no_truncate;
        options.drop_table_if_exist = self.drop_table;
        options.reset_auto_increment = self.reset_auto_increment;
        options
    }
}

fn print_summary(summary: &BatchSummary) {
    println!(
        "{} file(s) seen: {} written, {} skipped, {} failed",
        summary.files_seen(),
        summary.written.len(),
        summary.skipped.len(),
        summary.failures.len(),
    );
    for artifact in &summary.written {
        println!("  wrote {}", artifact.path.display());
    }
    for (path, reason) in &summary.skipped {
        println!("  skipped {} ({reason:?})", path.display());
    }
    for failure in &summary.failures {
        eprintln!("  failed {}: {}", failure.path.display(), failure.error);
    }
}

fn run(cli: &Cli) -> csv2sql_result::Result<BatchSummary> {
    let mut options = BatchOptions::new(cli.source.clone(), cli.dest.clone());
    options.generation = cli.generation_options();
    run_batch(&options)
}

fn main() {
    // Respect RUST_LOG for log verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => {
            print_summary(&summary);
            if summary.has_failures() {
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("csv2sql: {err}");
            process::exit(1);
        }
    }
}
