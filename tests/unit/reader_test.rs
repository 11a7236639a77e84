//! Unit tests for the delimited text reader
//!
//! Tests cover:
//! - Header handling and positional field assignment
//! - Numeric coercion rules
//! - Degradation on short or malformed rows

use pretty_assertions::assert_eq;
use serde_json::json;
use tabconv::{csv_to_json, parse, Cell, ConversionConfig, Delimiter, QuoteMode, Record, Table};

#[test]
fn test_empty_input_is_empty_table() {
    assert_eq!(parse("", Delimiter::COMMA), Table::new());
    assert_eq!(parse("a,b,c", Delimiter::COMMA), Table::new());
}

#[test]
fn test_short_row_is_not_an_error() {
    let table = parse("a,b\n1,2\n3", Delimiter::COMMA);

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0], Record::from([("a", 1), ("b", 2)]));

    let mut expected = Record::new();
    expected.insert("a", 3);
    expected.insert_absent("b");
    assert_eq!(table.records()[1], expected);
}

#[test]
fn test_numeric_looking_strings_are_coerced() {
    let table = parse("code,name,price\n007,Bond, 9.99 \n", Delimiter::COMMA);
    let record = &table.records()[0];

    assert_eq!(record.get("code"), Some(&Cell::Number(7.0)));
    assert_eq!(record.get("name"), Some(&Cell::text("Bond")));
    assert_eq!(record.get("price"), Some(&Cell::Number(9.99)));
}

#[test]
fn test_empty_field_stays_empty_string() {
    let table = parse("a,b\n,2", Delimiter::COMMA);
    assert_eq!(table.records()[0].get("a"), Some(&Cell::text("")));
}

#[test]
fn test_tab_delimited() {
    let value = csv_to_json("name\tage\nAda\t36\nBob\t41", Delimiter::TAB);
    assert_eq!(
        value,
        json!([{"name": "Ada", "age": 36}, {"name": "Bob", "age": 41}])
    );
}

#[test]
fn test_row_order_preserved() {
    let text = (0..50)
        .map(|i| i.to_string())
        .fold(String::from("n"), |acc, n| acc + "\n" + &n);
    let table = parse(&text, Delimiter::COMMA);

    let values: Vec<f64> = table
        .iter()
        .filter_map(|record| record.get("n").and_then(Cell::as_f64))
        .collect();
    assert_eq!(values, (0..50).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn test_literal_mode_splits_quoted_delimiters() {
    let table = parse("a,b,c\n\"x,y\",z,w", Delimiter::COMMA);
    let record = &table.records()[0];

    assert_eq!(record.get("a"), Some(&Cell::text("\"x")));
    assert_eq!(record.get("b"), Some(&Cell::text("y\"")));
    assert_eq!(record.get("c"), Some(&Cell::text("z")));
}

#[test]
fn test_quote_aware_mode_keeps_fields_whole() {
    let config = ConversionConfig::default().with_quote_mode(QuoteMode::Rfc4180);
    let table = tabconv::parser::parse_with_config("a,b\n\"x,y\",z", &config);

    assert_eq!(
        table.records()[0],
        Record::from([("a", "x,y"), ("b", "z")])
    );
}
