//! Statement assembly for the three generation modes.

use crate::GenerationOptions;
use crate::literal::{infer_literal, quote_ident};

/// Assemble an INSERT statement, preceded by at most one optional
/// statement: DROP TABLE IF EXISTS when requested, else TRUNCATE when
/// requested, else nothing.
pub(crate) fn insert(
    table: &str,
    header: &[String],
    rows: &[&[String]],
    options: &GenerationOptions,
) -> String {
    let tuples: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|cell| infer_literal(cell).to_string()).collect();
            format!("({})", cells.join(","))
        })
        .collect();
    // Filtering upstream should make this unreachable; re-checked so an
    // empty VALUES list can never be emitted.
    if tuples.is_empty() {
        return String::new();
    }
    let values = tuples.join(",");

    let fields: Vec<String> = header.iter().map(|field| quote_ident(field)).collect();
    let table = quote_ident(table);

    let prelude = if options.drop_table_if_exist {
        format!("DROP TABLE IF EXISTS {table};\n")
    } else if options.truncate_table {
        format!("TRUNCATE {table};\n")
    } else {
        String::new()
    };

    format!(
        "{prelude}INSERT INTO {table} ({})\nVALUES\n  {values}\n;\n",
        fields.join(",")
    )
}

/// UPDATE generation is intentionally unimplemented: it is a recognized
/// mode that always yields the empty string, so batch processing treats it
/// as "nothing to emit" rather than an error.
pub(crate) fn update() -> String {
    String::new()
}

/// Assemble a DELETE statement keyed on the first column.
///
/// The identifying key is taken positionally — cell 0 of every filtered
/// row, named by header column 0 — regardless of whether that column is a
/// primary key. Key cells go through the same literal inference as INSERT
/// values, so numeric keys stay unquoted and textual keys are quoted.
pub(crate) fn delete(
    table: &str,
    key_field: &str,
    rows: &[&[String]],
    options: &GenerationOptions,
) -> String {
    let ids: Vec<String> = rows
        .iter()
        .map(|row| infer_literal(&row[0]).to_string())
        .collect();

    let table = quote_ident(table);
    let mut sql = format!(
        "DELETE FROM {table} WHERE {} IN ({});\n",
        quote_ident(key_field),
        ids.join(",")
    );
    if options.reset_auto_increment {
        sql.push_str(&format!("ALTER TABLE {table} AUTO_INCREMENT = 1;\n"));
    }
    sql
}
