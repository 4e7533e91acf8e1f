// src/schema/record.rs

use super::column::{Column, Screener, COLUMN_COUNT};

/// One flattened output row. Every column is always present; unset columns
/// hold the empty string.
///
/// A `Record` has no setters. New rows are derived with [`Record::with`],
/// which consumes the value, so a shared base is cloned before each derive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    values: [String; COLUMN_COUNT],
}

impl Record {
    /// An all-empty row tagged with its origin.
    pub fn new(screener: Screener) -> Self {
        Self::default().with(Column::ScreenerType, screener.as_str())
    }

    /// Returns this row with `column` replaced by `value`.
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.values[column.index()] = value.into();
        self
    }

    pub fn get(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    /// Values in schema order.
    pub fn values(&self) -> &[String; COLUMN_COUNT] {
        &self.values
    }
}
