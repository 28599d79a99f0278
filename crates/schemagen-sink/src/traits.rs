//! RowSink trait definition.

use anyhow::Result;
use schemagen_core::{KeyedRow, SchemaCollection};

/// Trait for writing generated rows to a destination.
///
/// # Usage Pattern
///
/// Callers use generics for zero-cost dispatch:
///
/// ```ignore
/// pub async fn populate<S: RowSink>(sink: &S, output: &GenerationOutput) -> Result<()> {
///     for table in &output.tables {
///         sink.write_rows(&table.table, &table.rows).await?;
///     }
///     sink.finish().await
/// }
/// ```
#[async_trait::async_trait]
pub trait RowSink: Send + Sync {
    /// Called once before any rows of `collection` are written.
    async fn prepare(&self, _collection: &SchemaCollection) -> Result<()> {
        Ok(())
    }

    /// Write a batch of rows belonging to `table`.
    ///
    /// Rows of NoSQL collections carry their rendered key next to the row.
    async fn write_rows(&self, table: &str, rows: &[KeyedRow]) -> Result<()>;

    /// Flush and release resources after the last batch.
    async fn finish(&self) -> Result<()> {
        Ok(())
    }
}
