//! Integration tests for the export path

use std::fs;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use tabconv::export::{default_filename, SavedFile};
use tabconv::{
    export_delimited, export_to_csv_file, ConversionConfig, ConversionEngine, Delimiter,
    DirectorySaver, Locale, MemorySaver, Table,
};
use tempfile::tempdir;

#[test]
fn test_export_to_csv_file_saves_exact_bytes() {
    let table = Table::from_json(&json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]), false).unwrap();
    let saver = MemorySaver::new();

    export_to_csv_file("report.csv", &table, Delimiter::COMMA, &saver).unwrap();

    assert_eq!(
        saver.files(),
        vec![SavedFile {
            filename: "report.csv".to_string(),
            bytes: b"\xEF\xBB\xBFa,b\r\n1,2\r\n3,4\r\n".to_vec(),
        }]
    );
}

#[test]
fn test_filename_is_used_verbatim() {
    let tmp = tempdir().unwrap();
    let saver = DirectorySaver::new(tmp.path());
    let table = Table::from_json(&json!([{"x": "y"}]), false).unwrap();

    export_to_csv_file("Rapor Ağustos.csv", &table, Delimiter::SEMICOLON, &saver).unwrap();

    let bytes = fs::read(tmp.path().join("Rapor Ağustos.csv")).unwrap();
    assert_eq!(bytes, b"\xEF\xBB\xBFx\r\ny\r\n".to_vec());
}

#[test]
fn test_export_with_locale_dates_and_no_bom() {
    let table = Table::from_json(
        &json!([{"event": "launch", "at": "2024-07-01T08:00:00"}]),
        true,
    )
    .unwrap();
    let config = ConversionConfig::default()
        .with_locale(Locale::TrTr)
        .with_delimiter(Delimiter::SEMICOLON)
        .with_bom(false);
    let saver = MemorySaver::new();

    export_delimited("events.csv", &table, &config, &saver).unwrap();

    let saved = saver.last().unwrap();
    assert_eq!(
        String::from_utf8(saved.bytes).unwrap(),
        "event;at\r\nlaunch;01.07.2024 08:00:00\r\n"
    );
}

#[test]
fn test_engine_export_empty_table_saves_nothing() {
    let tmp = tempdir().unwrap();
    let saver = DirectorySaver::new(tmp.path());
    let engine = ConversionEngine::new(ConversionConfig::default());

    assert!(engine.export("empty.csv", &Table::new(), &saver).is_err());
    assert!(!tmp.path().join("empty.csv").exists());
}

#[test]
fn test_default_filename_shape() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(23, 59, 1)
        .unwrap();
    assert_eq!(default_filename(&now), "export-20261019235901.csv");
}
