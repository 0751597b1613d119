use indoc::indoc;
use std::fs;
use tempfile::TempDir;
use tsvstrings::{EmitOptions, Emitter, Error, Table, traits::Parser};

fn read_strings(dir: &TempDir, language: &str) -> String {
    fs::read_to_string(
        dir.path()
            .join("Resources")
            .join(language)
            .join("Localizable.strings"),
    )
    .unwrap()
}

#[test]
fn test_table_file_to_strings_files() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("table.tsv");
    fs::write(
        &input_file,
        indoc! {"
            key\ten\tfr\tde
            hello\tHi\tSalut\tHallo
            quote\tHe said \"hi\"\tIl a dit \"salut\"
            x\tonly-en-value
        "},
    )
    .unwrap();

    let table = Table::read_from(&input_file).unwrap();
    assert_eq!(table.languages, vec!["en", "fr", "de"]);
    assert_eq!(table.rows.len(), 3);

    let out = TempDir::new().unwrap();
    let report = Emitter::new(out.path()).emit(&table);
    assert!(report.is_success());
    assert_eq!(report.written().count(), 3);

    assert_eq!(
        read_strings(&out, "en"),
        indoc! {r#"
            "hello" = "Hi";
            "quote" = "He said \"hi\"";
            "x" = "only-en-value";
        "#}
    );
    assert_eq!(
        read_strings(&out, "fr"),
        indoc! {r#"
            "hello" = "Salut";
            "quote" = "Il a dit \"salut\"";
        "#}
    );
    assert_eq!(read_strings(&out, "de"), "\"hello\" = \"Hallo\";\n");
}

#[test]
fn test_duplicate_keys_keep_every_line() {
    let table = Table::from_str("key\ten\ndup\tfirst\ndup\tsecond\n").unwrap();

    let out = TempDir::new().unwrap();
    Emitter::new(out.path()).emit(&table);

    assert_eq!(
        read_strings(&out, "en"),
        "\"dup\" = \"first\";\n\"dup\" = \"second\";\n"
    );
}

#[test]
fn test_header_only_table_produces_empty_files() {
    let table = Table::from_str("key\ten\tja\n").unwrap();

    let out = TempDir::new().unwrap();
    let report = Emitter::new(out.path()).emit(&table);

    assert!(report.is_success());
    assert_eq!(read_strings(&out, "en"), "");
    assert_eq!(read_strings(&out, "ja"), "");
}

#[test]
fn test_lproj_layout() {
    let table = Table::from_str("key\ten\nok\tOK\n").unwrap();

    let out = TempDir::new().unwrap();
    let emitter = Emitter::new(out.path())
        .with_options(EmitOptions::new().with_folder_suffix(".lproj"));
    let report = emitter.emit(&table);

    let written: Vec<_> = report.written().collect();
    assert_eq!(
        written,
        vec![out.path().join("Resources/en.lproj/Localizable.strings")]
    );
    assert_eq!(fs::read_to_string(written[0]).unwrap(), "\"ok\" = \"OK\";\n");
}

#[test]
fn test_empty_table_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("empty.tsv");
    fs::write(&input_file, "").unwrap();

    let error = Table::read_from(&input_file).unwrap_err();
    assert!(matches!(error, Error::EmptyTable));
    assert!(error.is_fatal());
}

#[test]
fn test_failed_language_is_reported_by_name() {
    let table = Table::from_str("key\tfr\ten\nhello\tSalut\tHi\n").unwrap();

    let out = TempDir::new().unwrap();
    fs::create_dir_all(out.path().join("Resources")).unwrap();
    fs::write(out.path().join("Resources/fr"), "in the way").unwrap();

    let report = Emitter::new(out.path()).emit(&table);

    let failed: Vec<_> = report.failures().filter_map(Error::language).collect();
    assert_eq!(failed, vec!["fr"]);
    assert_eq!(report.outcomes[1].language, "en");
    assert_eq!(read_strings(&out, "en"), "\"hello\" = \"Hi\";\n");
}
