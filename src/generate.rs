//! Generate service: previews and sink-backed population of a collection.
//!
//! Both entry points share request validation and table selection. A table
//! keeps the RNG stream of its position in the full collection, so
//! generating a subset of tables yields the same rows those tables get in a
//! full run with the same seed.

use chrono::{DateTime, SecondsFormat, Utc};
use schemagen_core::{SchemaCollection, SchemaError, TableSchema};
use schemagen_generator::{DataGenerator, GenerationOutput, GeneratorError, TableOutput};
use schemagen_sink::RowSink;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Rows per table returned by a preview.
pub const SAMPLE_ROW_LIMIT: u64 = 10;

/// Error type for generate requests.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Names the table when its own `count` is zero and nothing overrides it
    #[error("Row count must be positive{}", table_suffix(.table))]
    NonPositiveRowCount { table: Option<String> },

    #[error("Table '{0}' not found in collection")]
    TableNotFound(String),

    #[error("Batch size must be positive")]
    InvalidBatchSize,

    /// The sink rejected a write
    #[error("Sink error: {0:#}")]
    Sink(anyhow::Error),
}

fn table_suffix(table: &Option<String>) -> String {
    match table {
        Some(table) => format!(" (table '{table}' has count 0)"),
        None => String::new(),
    }
}

/// What to generate.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub collection: SchemaCollection,
    /// Overrides every table's own `count` when set.
    pub row_count: Option<u64>,
    /// Random when unset.
    pub seed: Option<u64>,
    /// Tables to generate; empty means all of them.
    pub tables: Vec<String>,
}

impl GenerateRequest {
    pub fn new(collection: SchemaCollection) -> Self {
        Self {
            collection,
            row_count: None,
            seed: None,
            tables: Vec::new(),
        }
    }

    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = Some(row_count);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Check the request before any row is generated.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.row_count == Some(0) {
            return Err(GenerateError::NonPositiveRowCount { table: None });
        }
        self.collection.validate()?;
        for name in &self.tables {
            if self.collection.get_table(name).is_none() {
                return Err(GenerateError::TableNotFound(name.clone()));
            }
        }
        if self.row_count.is_none() {
            let empty = self
                .selected_tables()
                .into_iter()
                .find(|(_, table)| table.count == 0);
            if let Some((_, table)) = empty {
                return Err(GenerateError::NonPositiveRowCount {
                    table: Some(table.name.clone()),
                });
            }
        }
        Ok(())
    }

    /// Selected tables paired with their position in the collection.
    fn selected_tables(&self) -> Vec<(usize, &TableSchema)> {
        self.collection
            .tables
            .iter()
            .enumerate()
            .filter(|(_, table)| self.tables.is_empty() || self.tables.contains(&table.name))
            .collect()
    }

    fn count_for(&self, table: &TableSchema) -> u64 {
        self.row_count.unwrap_or(table.count)
    }
}

/// Result of a preview.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub status: String,
    pub collection: String,
    pub seed: u64,
    pub tables: GenerationOutput,
    pub timestamp: String,
}

/// Rows written for one table by [`GenerateService::populate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub table: String,
    pub rows: u64,
}

/// Result of a populate run.
#[derive(Debug, Clone)]
pub struct PopulateSummary {
    pub seed: u64,
    pub tables: Vec<TableSummary>,
    pub duration: Duration,
}

impl PopulateSummary {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.rows).sum()
    }
}

/// Entry point for generating a collection.
#[derive(Debug, Clone, Default)]
pub struct GenerateService {
    reference_time: Option<DateTime<Utc>>,
}

impl GenerateService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the instant that timestamp and date columns count back from.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    fn generator(&self, seed: Option<u64>) -> DataGenerator {
        let generator = match seed {
            Some(seed) => DataGenerator::new(seed),
            None => DataGenerator::from_entropy(),
        };
        match self.reference_time {
            Some(reference_time) => generator.with_reference_time(reference_time),
            None => generator,
        }
    }

    /// Generate up to [`SAMPLE_ROW_LIMIT`] rows per selected table.
    pub fn preview(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerateError> {
        request.validate()?;
        let generator = self.generator(request.seed);
        let collection = &request.collection;

        let mut output = GenerationOutput::default();
        for (position, table) in request.selected_tables() {
            let count = request.count_for(table).min(SAMPLE_ROW_LIMIT);
            let rows = generator
                .table_rows(table, position, count, collection.key_format_for(table))?
                .collect::<Result<Vec<_>, _>>()?;
            output.tables.push(TableOutput {
                table: table.name.clone(),
                rows,
            });
        }

        debug!(
            "Previewed {} rows of collection '{}' (seed={})",
            output.total_rows(),
            collection.name,
            generator.seed()
        );

        Ok(GenerateResponse {
            status: "success".to_string(),
            collection: collection.name.clone(),
            seed: generator.seed(),
            tables: output,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Generate the full row counts and forward them to `sink` in batches.
    ///
    /// Each table is generated completely before its first batch is written,
    /// so a table that fails to generate leaves nothing behind in the sink.
    pub async fn populate<S: RowSink + ?Sized>(
        &self,
        request: &GenerateRequest,
        sink: &S,
        batch_size: usize,
    ) -> Result<PopulateSummary, GenerateError> {
        if batch_size == 0 {
            return Err(GenerateError::InvalidBatchSize);
        }
        request.validate()?;

        let started = Instant::now();
        let generator = self.generator(request.seed);
        let collection = &request.collection;
        let selected = request.selected_tables();

        let mut prepared = collection.clone();
        prepared.tables = selected.iter().map(|(_, table)| (*table).clone()).collect();
        sink.prepare(&prepared).await.map_err(GenerateError::Sink)?;

        info!(
            "Populating {} tables of collection '{}' (seed={})",
            selected.len(),
            collection.name,
            generator.seed()
        );

        let mut tables = Vec::with_capacity(selected.len());
        for (position, table) in selected {
            let count = request.count_for(table);
            let rows = generator
                .table_rows(table, position, count, collection.key_format_for(table))?
                .collect::<Result<Vec<_>, _>>()?;

            for batch in rows.chunks(batch_size) {
                sink.write_rows(&table.name, batch)
                    .await
                    .map_err(GenerateError::Sink)?;
            }

            info!("Populated {}: {} rows", table.name, rows.len());
            tables.push(TableSummary {
                table: table.name.clone(),
                rows: rows.len() as u64,
            });
        }

        sink.finish().await.map_err(GenerateError::Sink)?;

        Ok(PopulateSummary {
            seed: generator.seed(),
            tables,
            duration: started.elapsed(),
        })
    }
}
