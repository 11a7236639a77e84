//! Field type coercion

use crate::table::Cell;

/// Coerce a raw field: numeric text becomes a number, anything else stays text
///
/// The numeric test matches JavaScript's `Number()` on the trimmed field,
/// except that blank fields stay `""` instead of becoming `0`.
pub fn coerce_field(raw: &str) -> Cell {
    match parse_number(raw) {
        Some(n) => Cell::Number(n),
        None => Cell::Text(raw.to_string()),
    }
}

/// Parse the whole trimmed field as a number; `None` if any part is not numeric
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(trimmed) {
        return Some(n);
    }

    // f64::from_str also accepts "inf", "nan" and friends
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    // any width; signs and other non-digits reject the whole literal
    digits.chars().try_fold(0.0_f64, |acc, c| {
        Some(acc * f64::from(radix) + f64::from(c.to_digit(radix)?))
    })
}
