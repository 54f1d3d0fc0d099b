use crate::{value::FromValue, Error, Result, Value};

use indexmap::IndexMap;

/// A single result row, keyed by column name in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Inserts a column value, preserving insertion order.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Returns the raw value stored under `column`, if present.
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Loads a typed value from `column`.
    ///
    /// Fails if the row has no such column, or if the stored value does not
    /// convert to `T`. A stored `Null` loads as `None` when `T` is an
    /// `Option`; a missing column is an error either way.
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        match self.columns.get(column) {
            Some(value) => T::from_value(value.clone()),
            None => Err(Error::missing_column(column)),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates columns in select order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Row {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
