//! Generated rows.

use crate::value::GeneratedValue;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

/// One generated record: column name to value, in column definition order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedRow {
    /// 1-based ordinal of the row within its table.
    pub index: u64,
    fields: Vec<(String, GeneratedValue)>,
}

impl GeneratedRow {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            fields: Vec::new(),
        }
    }

    pub fn with_capacity(index: u64, capacity: usize) -> Self {
        Self {
            index,
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a column value. Column names are unique within a validated table.
    pub fn push(&mut self, name: impl Into<String>, value: GeneratedValue) {
        self.fields.push((name.into(), value));
    }

    pub fn get_field(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for GeneratedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A generated row paired with its rendered storage key.
///
/// The key is only present for rows of NoSQL collections and is never part
/// of the row mapping itself.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRow {
    pub key: Option<String>,
    pub row: GeneratedRow,
}

impl KeyedRow {
    pub fn new(key: Option<String>, row: GeneratedRow) -> Self {
        Self { key, row }
    }
}

impl Serialize for KeyedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.key {
            Some(key) => {
                let mut record = serializer.serialize_struct("KeyedRow", 2)?;
                record.serialize_field("key", key)?;
                record.serialize_field("value", &self.row)?;
                record.end()
            }
            None => self.row.serialize(serializer),
        }
    }
}
