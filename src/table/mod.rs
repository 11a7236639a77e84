//! Tabular data model shared by the reader and the writer

pub mod cell;
pub mod json;

pub use cell::{number_to_string, Cell};

use crate::error::{ConversionErrorKind, ConversionResult};

/// One row: an ordered mapping from column name to value
///
/// A column may be present with no value (`None`), which is what the
/// reader produces for fields missing from a short line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Option<Cell>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a column's value. An existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Cell>) {
        self.set(column.into(), Some(value.into()));
    }

    /// Declare a column with no value
    pub fn insert_absent(&mut self, column: impl Into<String>) {
        self.set(column.into(), None);
    }

    fn set(&mut self, column: String, value: Option<Cell>) {
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    /// The value stored under `column`; `None` when the column is missing or absent
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Cell>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Cell>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl<K: Into<String>, V: Into<Cell>, const N: usize> From<[(K, V); N]> for Record {
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

/// An ordered sequence of records sharing one column set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Column names in the key order of the first record
    pub fn columns(&self) -> ConversionResult<Vec<&str>> {
        self.records
            .first()
            .map(|first| first.columns().collect())
            .ok_or_else(|| ConversionErrorKind::EmptyTable.into())
    }

    /// Header row plus value rows, aligned on the first record's columns
    pub fn to_grid(&self) -> ConversionResult<Grid> {
        let columns: Vec<String> = self.columns()?.into_iter().map(String::from).collect();
        let rows = self
            .records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned())
                    .collect()
            })
            .collect();

        Ok(Grid { columns, rows })
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Array-of-arrays view of a table
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<Cell>>>,
}
