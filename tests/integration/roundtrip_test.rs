//! Reader/writer round trips

use pretty_assertions::assert_eq;
use tabconv::formatter::encode;
use tabconv::parser::parse_with_config;
use tabconv::{
    parse, write_delimited, Cell, ConversionConfig, Delimiter, QuoteMode, Record, Table,
};

fn people() -> Table {
    Table::from(vec![
        Record::from([
            ("id", Cell::from(1)),
            ("name", Cell::from("Ada")),
            ("score", Cell::from(9.5)),
        ]),
        Record::from([
            ("id", Cell::from(2)),
            ("name", Cell::from("Bob")),
            ("score", Cell::from(7)),
        ]),
        Record::from([
            ("id", Cell::from(3)),
            ("name", Cell::from("")),
            ("score", Cell::from(-0.25)),
        ]),
    ])
}

#[test]
fn test_write_then_parse_is_identity() {
    for delimiter in [Delimiter::COMMA, Delimiter::TAB, Delimiter::SEMICOLON] {
        let text = write_delimited(&people(), delimiter).unwrap();
        assert_eq!(parse(&text, delimiter), people());
    }
}

#[test]
fn test_roundtrip_through_bom_encoded_bytes() {
    let config = ConversionConfig::default();
    let text = write_delimited(&people(), Delimiter::COMMA).unwrap();
    let bytes = encode(&text, &config);

    let decoded = String::from_utf8(bytes).unwrap();
    assert_eq!(parse(&decoded, Delimiter::COMMA), people());
}

#[test]
fn test_numeric_looking_strings_are_lossy() {
    let table = Table::from(vec![Record::from([("code", "007"), ("label", "x")])]);
    let text = write_delimited(&table, Delimiter::COMMA).unwrap();

    let parsed = parse(&text, Delimiter::COMMA);
    assert_eq!(
        parsed,
        Table::from(vec![Record::from([
            ("code", Cell::Number(7.0)),
            ("label", Cell::text("x")),
        ])])
    );
}

#[test]
fn test_quote_aware_reader_inverts_writer_quoting() {
    let table = Table::from(vec![
        Record::from([("quote", r#"He said "hi", ok"#), ("plain", "a")]),
        Record::from([("quote", "semi;colon"), ("plain", "b")]),
    ]);
    let config = ConversionConfig::default().with_quote_mode(QuoteMode::Rfc4180);

    let text = write_delimited(&table, config.delimiter).unwrap();
    assert_eq!(parse_with_config(&text, &config), table);
}

#[test]
fn test_literal_reader_does_not_invert_quoting() {
    let table = Table::from(vec![Record::from([("a", "x,y"), ("b", "z")])]);
    let text = write_delimited(&table, Delimiter::COMMA).unwrap();

    assert_ne!(parse(&text, Delimiter::COMMA), table);
}
