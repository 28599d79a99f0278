//! In-memory sink.

use crate::traits::RowSink;
use anyhow::{anyhow, Result};
use schemagen_core::KeyedRow;
use std::sync::Mutex;

/// Sink that keeps every written row in memory, grouped by table in
/// first-write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: Mutex<Vec<(String, Vec<KeyedRow>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows written so far for `table`.
    pub fn rows(&self, table: &str) -> Vec<KeyedRow> {
        self.tables
            .lock()
            .map(|tables| {
                tables
                    .iter()
                    .find(|(name, _)| name == table)
                    .map(|(_, rows)| rows.clone())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables
            .lock()
            .map(|tables| tables.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    pub fn total_rows(&self) -> usize {
        self.tables
            .lock()
            .map(|tables| tables.iter().map(|(_, rows)| rows.len()).sum())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl RowSink for MemorySink {
    async fn write_rows(&self, table: &str, rows: &[KeyedRow]) -> Result<()> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| anyhow!("memory sink lock poisoned"))?;
        match tables.iter_mut().find(|(name, _)| name == table) {
            Some((_, existing)) => existing.extend_from_slice(rows),
            None => tables.push((table.to_string(), rows.to_vec())),
        }
        Ok(())
    }
}
