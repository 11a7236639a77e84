use assert_matches::assert_matches;
use tabconv::locale::{format_currency, normalize_currency, Locale};
use tabconv::ConversionErrorKind;

#[test]
fn test_turkish_lira() {
    assert_eq!(format_currency(1234.5, "TRY", Locale::TrTr).unwrap(), "₺1.234,50");
    assert_eq!(format_currency(0.0, "TRY", Locale::TrTr).unwrap(), "₺0,00");
    assert_eq!(
        format_currency(-1234567.891, "TRY", Locale::TrTr).unwrap(),
        "-₺1.234.567,89"
    );
}

#[test]
fn test_us_and_gb() {
    assert_eq!(format_currency(1234.5, "USD", Locale::EnUs).unwrap(), "$1,234.50");
    assert_eq!(format_currency(99.0, "GBP", Locale::EnGb).unwrap(), "£99.00");
    assert_eq!(
        format_currency(1000.0, "CHF", Locale::EnUs).unwrap(),
        "CHF\u{a0}1,000.00"
    );
}

#[test]
fn test_suffix_locales() {
    assert_eq!(
        format_currency(1234.5, "EUR", Locale::DeDe).unwrap(),
        "1.234,50\u{a0}€"
    );
    assert_eq!(
        format_currency(1234.5, "EUR", Locale::FrFr).unwrap(),
        "1\u{202f}234,50\u{a0}€"
    );
    assert_eq!(format_currency(1234.5, "EUR", Locale::Iso).unwrap(), "1234.50 EUR");
}

#[test]
fn test_zero_decimal_currency() {
    assert_eq!(format_currency(1234.4, "JPY", Locale::EnUs).unwrap(), "¥1,234");
}

#[test]
fn test_invalid_currency_code() {
    assert_matches!(
        format_currency(1.0, "EURO", Locale::EnUs).unwrap_err().kind(),
        Some(ConversionErrorKind::InvalidCurrency { .. })
    );
    assert!(normalize_currency("U$D").is_err());
    assert_eq!(normalize_currency(" usd ").unwrap(), "USD");
}

#[test]
fn test_unknown_locale() {
    assert_matches!(
        "pt-BR".parse::<Locale>().unwrap_err().kind(),
        Some(ConversionErrorKind::UnknownLocale { .. })
    );
}
