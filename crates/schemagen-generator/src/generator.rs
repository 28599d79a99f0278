//! Main data generator for producing rows of a schema collection.

use crate::generators::{generate_value, GenerationContext};
use crate::key_format::KeyFormat;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schemagen_core::{
    ColumnDefinition, ColumnType, GeneratedRow, GeneratedValue, KeyedRow, SchemaCollection,
    SchemaError, TableSchema,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Chance that a nullable column is null in a given row.
pub const NULL_PROBABILITY: f64 = 0.1;

/// Redraws allowed for a primary-key value that collides with an earlier row.
pub const MAX_UNIQUE_ATTEMPTS: usize = 100;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The table failed validation
    #[error("Invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    #[error("Column '{column}' has an unknown type")]
    UnknownColumnType { column: String },

    #[error("Set column '{column}' has no members to choose from")]
    EmptySet { column: String },

    /// A primary-key column ran out of distinct values
    #[error(
        "Could not produce a unique value for primary key '{table}.{column}' after {attempts} attempts"
    )]
    UniqueValuesExhausted {
        table: String,
        column: String,
        attempts: usize,
    },
}

/// Rows generated for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutput {
    pub table: String,
    pub rows: Vec<KeyedRow>,
}

/// Rows generated for a whole collection, in collection table order.
///
/// Serializes as an object mapping table name to its array of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOutput {
    pub tables: Vec<TableOutput>,
}

impl GenerationOutput {
    pub fn get(&self, table: &str) -> Option<&TableOutput> {
        self.tables.iter().find(|t| t.table == table)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }
}

impl Serialize for GenerationOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for table in &self.tables {
            map.serialize_entry(&table.table, &table.rows)?;
        }
        map.end()
    }
}

/// Data generator that produces reproducible rows.
///
/// The generator holds no per-call state: each table gets its own RNG
/// stream derived from the seed and the table's position in its
/// collection, so tables can be generated in any order (or concurrently)
/// and still yield the same rows.
#[derive(Debug, Clone)]
pub struct DataGenerator {
    /// Base seed that every table stream is derived from
    seed: u64,
    /// Instant that timestamps and dates count back from
    reference_time: DateTime<Utc>,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            reference_time: Utc::now(),
        }
    }

    /// Create a generator with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Pin the instant that `timestamp` and `date` values count back from.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Compute the RNG seed for the table at `position`.
    fn table_seed(&self, position: usize) -> u64 {
        let position = position as u64 + 1;
        self.seed
            .wrapping_add(position.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Lazily generate `count` rows of `table`.
    ///
    /// `position` selects the RNG stream and `key_format` turns on key
    /// rendering. The table is validated before any row is produced.
    pub fn table_rows<'a>(
        &self,
        table: &'a TableSchema,
        position: usize,
        count: u64,
        key_format: Option<&str>,
    ) -> Result<TableRows<'a>, GeneratorError> {
        table.validate()?;

        let key_format = key_format.map(KeyFormat::parse);
        if let Some(format) = &key_format {
            if count > 1 && !format.is_row_unique(table) {
                warn!(
                    "Key format for table '{}' has no per-row token; keys will collide",
                    table.name
                );
            }
        }

        let unique = table
            .columns
            .iter()
            .map(|column| needs_uniqueness_check(column).then(HashSet::new))
            .collect();

        Ok(TableRows {
            table,
            key_format,
            rng: StdRng::seed_from_u64(self.table_seed(position)),
            reference_time: self.reference_time,
            next_ordinal: 1,
            count,
            unique,
            failed: false,
        })
    }

    /// Generate `count` rows of a standalone table, without keys.
    pub fn generate_table(
        &self,
        table: &TableSchema,
        count: u64,
    ) -> Result<TableOutput, GeneratorError> {
        let rows = self
            .table_rows(table, 0, count, None)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TableOutput {
            table: table.name.clone(),
            rows,
        })
    }

    /// Generate every table of `collection`.
    ///
    /// `row_count`, when given, replaces each table's own `count`. Keys are
    /// rendered for NoSQL collections. The first failing table aborts the
    /// call; no partially generated table is returned.
    pub fn generate_collection(
        &self,
        collection: &SchemaCollection,
        row_count: Option<u64>,
    ) -> Result<GenerationOutput, GeneratorError> {
        collection.validate()?;

        let mut output = GenerationOutput {
            tables: Vec::with_capacity(collection.tables.len()),
        };

        for (position, table) in collection.tables.iter().enumerate() {
            let count = row_count.unwrap_or(table.count);
            debug!("Generating {} rows for table '{}'", count, table.name);

            let rows = self
                .table_rows(table, position, count, collection.key_format_for(table))?
                .collect::<Result<Vec<_>, _>>()?;

            output.tables.push(TableOutput {
                table: table.name.clone(),
                rows,
            });
        }

        info!(
            "Generated {} rows across {} tables for collection '{}'",
            output.total_rows(),
            output.tables.len(),
            collection.name
        );

        Ok(output)
    }
}

/// Primary keys need a collision check unless their type is unique by
/// construction.
fn needs_uniqueness_check(column: &ColumnDefinition) -> bool {
    column.is_primary_key() && column.column_type() != ColumnType::SequentialNumber
}

/// Iterator that lazily generates the rows of one table.
///
/// Yields `Err` at most once; iteration stops after the first error.
pub struct TableRows<'a> {
    table: &'a TableSchema,
    key_format: Option<KeyFormat>,
    rng: StdRng,
    reference_time: DateTime<Utc>,
    next_ordinal: u64,
    count: u64,
    /// Values seen so far, for columns that must stay unique
    unique: Vec<Option<HashSet<String>>>,
    failed: bool,
}

impl TableRows<'_> {
    /// Ordinal of the next row to be produced.
    pub fn next_ordinal(&self) -> u64 {
        self.next_ordinal
    }

    fn next_row(&mut self) -> Result<KeyedRow, GeneratorError> {
        let table = self.table;
        let ordinal = self.next_ordinal;
        let ctx = GenerationContext::new(ordinal, self.reference_time);
        let mut row = GeneratedRow::with_capacity(ordinal, table.columns.len());

        for (column, seen) in table.columns.iter().zip(self.unique.iter_mut()) {
            let value = if column.is_nullable() && self.rng.random::<f64>() < NULL_PROBABILITY {
                GeneratedValue::Null
            } else {
                match seen {
                    Some(seen) => unique_value(&table.name, column, &mut self.rng, &ctx, seen)?,
                    None => generate_value(column, &mut self.rng, &ctx)?,
                }
            };
            row.push(column.name(), value);
        }

        let key = self
            .key_format
            .as_ref()
            .map(|format| format.render(&table.name, &row, &mut self.rng));

        self.next_ordinal += 1;
        Ok(KeyedRow::new(key, row))
    }
}

fn unique_value(
    table: &str,
    column: &ColumnDefinition,
    rng: &mut StdRng,
    ctx: &GenerationContext,
    seen: &mut HashSet<String>,
) -> Result<GeneratedValue, GeneratorError> {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let value = generate_value(column, rng, ctx)?;
        if seen.insert(value.to_string()) {
            return Ok(value);
        }
    }
    Err(GeneratorError::UniqueValuesExhausted {
        table: table.to_string(),
        column: column.name().to_string(),
        attempts: MAX_UNIQUE_ATTEMPTS,
    })
}

impl Iterator for TableRows<'_> {
    type Item = Result<KeyedRow, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_ordinal > self.count {
            return None;
        }

        let result = self.next_row();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.failed {
            0
        } else {
            let left = self.count - (self.next_ordinal - 1);
            usize::try_from(left).unwrap_or(usize::MAX)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableRows<'_> {}
