//! Conversion between tables and JSON arrays of objects

use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Number, Value};

use super::{number_to_string, Cell, Record, Table};
use crate::error::{ConversionErrorKind, ConversionResult};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

impl Cell {
    /// JSON representation of this cell
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Bool(b) => Value::Bool(*b),
            Cell::Number(n) => number_to_json(*n),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::DateTime(dt) => Value::String(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        }
    }

    /// Build a cell from a JSON value. Nested values become compact JSON text.
    pub fn from_json(value: &Value, parse_dates: bool) -> Cell {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Cell::Null, Cell::Number),
            Value::String(s) => {
                if parse_dates {
                    if let Some(dt) = parse_datetime(s) {
                        return Cell::DateTime(dt);
                    }
                }
                Cell::Text(s.clone())
            }
            Value::Array(_) | Value::Object(_) => Cell::Text(value.to_string()),
        }
    }
}

fn number_to_json(n: f64) -> Value {
    if !n.is_finite() {
        return Value::String(number_to_string(n));
    }
    // exactly representable integers print without a fraction
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

/// RFC 3339 keeps its wall-clock time; naive ISO forms are taken as-is
fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

impl Record {
    /// JSON object; absent values are omitted
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.len());
        for (column, value) in self.iter() {
            if let Some(cell) = value {
                map.insert(column.to_string(), cell.to_json());
            }
        }
        Value::Object(map)
    }
}

impl Table {
    pub fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Record::to_json).collect())
    }

    /// Build a table from a JSON array of objects
    pub fn from_json(value: &Value, parse_dates: bool) -> ConversionResult<Table> {
        let items = value.as_array().ok_or_else(|| {
            ConversionErrorKind::invalid_input("expected a JSON array of objects")
        })?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| -> ConversionResult<Record> {
                let object = item.as_object().ok_or_else(|| {
                    ConversionErrorKind::invalid_input(format!(
                        "element {} is not a JSON object",
                        index
                    ))
                })?;
                Ok(object
                    .iter()
                    .map(|(key, value)| (key.as_str(), Cell::from_json(value, parse_dates)))
                    .collect::<Record>())
            })
            .collect()
    }
}
