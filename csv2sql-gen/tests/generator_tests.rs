use csv2sql_gen::{GenerationOptions, SqlType, generate};

fn header(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn users_fixture() -> (Vec<String>, Vec<Vec<String>>) {
    (
        header(&["id", "name"]),
        rows(&[&["1", "Alice"], &["2", "Bob"]]),
    )
}

#[test]
fn insert_with_defaults() {
    let (header, data) = users_fixture();
    let sql = generate("users", &header, &data, &GenerationOptions::default());

    assert!(sql.contains("TRUNCATE `users`;"));
    assert!(sql.contains("INSERT INTO `users` (`id`,`name`)"));
    assert!(sql.contains("VALUES"));
    assert!(sql.contains("(1,'Alice'),(2,'Bob')"));
    assert!(!sql.contains("DROP TABLE"));
}

#[test]
fn insert_statement_layout() {
    let (header, data) = users_fixture();
    let sql = generate("users", &header, &data, &GenerationOptions::default());

    assert_eq!(
        sql,
        "TRUNCATE `users`;\nINSERT INTO `users` (`id`,`name`)\nVALUES\n  (1,'Alice'),(2,'Bob')\n;\n"
    );
}

#[test]
fn drop_table_takes_precedence_over_truncate() {
    let (header, data) = users_fixture();
    let options = GenerationOptions {
        drop_table_if_exist: true,
        truncate_table: true,
        ..GenerationOptions::default()
    };
    let sql = generate("users", &header, &data, &options);

    assert!(sql.contains("DROP TABLE IF EXISTS `users`;"));
    assert!(!sql.contains("TRUNCATE"));
}

#[test]
fn insert_without_prelude() {
    let (header, data) = users_fixture();
    let options = GenerationOptions {
        truncate_table: false,
        ..GenerationOptions::default()
    };
    let sql = generate("users", &header, &data, &options);

    assert!(sql.starts_with("INSERT INTO `users`"));
}

#[test]
fn delete_with_auto_increment_reset() {
    let (header, data) = users_fixture();
    let options = GenerationOptions {
        reset_auto_increment: true,
        ..GenerationOptions::new(SqlType::Delete)
    };
    let sql = generate("users", &header, &data, &options);

    let delete_pos = sql
        .find("DELETE FROM `users` WHERE `id` IN (1,2);")
        .expect("delete statement present");
    let alter_pos = sql
        .find("ALTER TABLE `users` AUTO_INCREMENT = 1;")
        .expect("alter statement present");
    assert!(delete_pos < alter_pos);
}

#[test]
fn delete_without_reset_has_no_alter() {
    let (header, data) = users_fixture();
    let options = GenerationOptions::new(SqlType::Delete);
    let sql = generate("users", &header, &data, &options);

    assert_eq!(sql, "DELETE FROM `users` WHERE `id` IN (1,2);\n");
}

#[test]
fn delete_keys_are_taken_positionally() {
    // Column 0 is the key no matter what it is called.
    let header = header(&["sku", "label"]);
    let data = rows(&[&["ab-1", "first"], &["7", "second"]]);
    let options = GenerationOptions::new(SqlType::Delete);
    let sql = generate("products", &header, &data, &options);

    assert!(sql.contains("WHERE `sku` IN ('ab-1',7);"));
}

#[test]
fn update_mode_emits_nothing() {
    let (header, data) = users_fixture();
    let options = GenerationOptions::new(SqlType::Update);

    assert_eq!(generate("users", &header, &data, &options), "");
}

#[test]
fn malformed_and_empty_rows_are_excluded() {
    let header = header(&["id", "name"]);
    let data = rows(&[
        &["1", "Alice"],
        &["", ""],
        &["2", "Bob", "extra"],
        &["3"],
        &["4", "Dave"],
    ]);
    let sql = generate("users", &header, &data, &GenerationOptions::default());

    assert!(sql.contains("(1,'Alice'),(4,'Dave')"));
    assert!(!sql.contains("Bob"));
    assert!(!sql.contains("(3)"));
}

#[test]
fn all_rows_excluded_produces_no_output() {
    let header = header(&["id", "name"]);
    let data = rows(&[&["", ""], &["lonely"]]);

    assert_eq!(
        generate("users", &header, &data, &GenerationOptions::default()),
        ""
    );
    assert_eq!(
        generate("users", &header, &data, &GenerationOptions::new(SqlType::Delete)),
        ""
    );
}

#[test]
fn literal_inference_in_values() {
    let header = header(&["int", "float", "text", "empty"]);
    let data = rows(&[&["42", "2.5", "abc", ""]]);
    let sql = generate("mixed", &header, &data, &GenerationOptions::default());

    assert!(sql.contains("(42,2.5,'abc','')"));
}

#[test]
fn negative_numbers_stay_numeric() {
    let header = header(&["a", "b"]);
    let data = rows(&[&["-7", "-1.25"]]);
    let sql = generate("t", &header, &data, &GenerationOptions::default());

    assert!(sql.contains("(-7,-1.25)"));
}

#[test]
fn generation_is_idempotent() {
    let (header, data) = users_fixture();
    let options = GenerationOptions::default();

    let first = generate("users", &header, &data, &options);
    let second = generate("users", &header, &data, &options);
    assert_eq!(first, second);
}
