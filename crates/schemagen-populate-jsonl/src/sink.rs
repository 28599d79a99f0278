//! JSONL sink implementation.

use crate::error::JsonlSinkError;
use schemagen_core::{KeyedRow, SchemaCollection};
use schemagen_sink::RowSink;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time from `prepare` to `finish`.
    pub total_duration: Duration,
    /// Time spent serializing and writing rows.
    pub write_duration: Duration,
    /// Combined size of all output files in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// File name used for `table`, with path separators and other unsafe
/// characters replaced by `_`.
pub fn table_file_name(table: &str) -> String {
    let stem: String = table
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.jsonl")
}

#[derive(Default)]
struct State {
    writers: HashMap<String, BufWriter<File>>,
    /// Table that owns each opened file
    owners: HashMap<PathBuf, String>,
    started: Option<Instant>,
    metrics: PopulateMetrics,
}

/// Sink that writes one JSONL file per table.
pub struct JsonlSink {
    output_dir: PathBuf,
    state: Mutex<State>,
}

impl JsonlSink {
    /// Create a sink writing into `output_dir`. The directory is created on
    /// `prepare` or on the first write.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file that rows of `table` go to.
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.output_dir.join(table_file_name(table))
    }

    /// Snapshot of the metrics collected so far.
    pub fn metrics(&self) -> PopulateMetrics {
        self.lock()
            .map(|state| state.metrics.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, JsonlSinkError> {
        self.state.lock().map_err(|_| JsonlSinkError::Poisoned)
    }

    /// Fail when `table` maps to a file already owned by another table.
    fn check_owner(state: &State, table: &str, path: &Path) -> Result<(), JsonlSinkError> {
        match state.owners.get(path) {
            Some(other) if other != table => Err(JsonlSinkError::FileNameCollision {
                table: table.to_string(),
                other: other.clone(),
                path: path.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }

    /// Open the file for `table`, truncating it or appending to it.
    fn open_table(&self, state: &mut State, table: &str, truncate: bool) -> Result<(), JsonlSinkError> {
        let path = self.table_path(table);
        Self::check_owner(state, table, &path)?;
        std::fs::create_dir_all(&self.output_dir)?;
        let file = if truncate {
            File::create(&path)?
        } else {
            OpenOptions::new().create(true).append(true).open(&path)?
        };
        debug!("Opened JSONL file '{}' for table '{}'", path.display(), table);
        state
            .writers
            .insert(table.to_string(), BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file));
        state.owners.insert(path, table.to_string());
        Ok(())
    }

    fn prepare_sync(&self, collection: &SchemaCollection) -> Result<(), JsonlSinkError> {
        let mut state = self.lock()?;

        // Reject collisions before any file is truncated.
        let mut planned: HashMap<PathBuf, &str> = HashMap::new();
        for table in &collection.tables {
            let path = self.table_path(&table.name);
            Self::check_owner(&state, &table.name, &path)?;
            if let Some(other) = planned.insert(path.clone(), table.name.as_str()) {
                if other != table.name {
                    return Err(JsonlSinkError::FileNameCollision {
                        table: table.name.clone(),
                        other: other.to_string(),
                        path,
                    });
                }
            }
        }

        state.started = Some(Instant::now());
        for table in &collection.tables {
            if !state.writers.contains_key(&table.name) {
                self.open_table(&mut state, &table.name, true)?;
            }
        }
        info!(
            "Writing JSONL files for {} tables into '{}'",
            collection.tables.len(),
            self.output_dir.display()
        );
        Ok(())
    }

    fn write_rows_sync(&self, table: &str, rows: &[KeyedRow]) -> Result<(), JsonlSinkError> {
        let write_start = Instant::now();
        let mut state = self.lock()?;
        state.started.get_or_insert_with(Instant::now);
        if !state.writers.contains_key(table) {
            self.open_table(&mut state, table, false)?;
        }

        let state = &mut *state;
        if let Some(writer) = state.writers.get_mut(table) {
            for row in rows {
                serde_json::to_writer(&mut *writer, row)?;
                writeln!(writer)?;
            }
        }

        state.metrics.rows_written += rows.len() as u64;
        state.metrics.write_duration += write_start.elapsed();
        debug!(
            "Wrote {} rows to table '{}' ({} total)",
            rows.len(),
            table,
            state.metrics.rows_written
        );
        Ok(())
    }

    fn finish_sync(&self) -> Result<(), JsonlSinkError> {
        let mut state = self.lock()?;
        for writer in state.writers.values_mut() {
            writer.flush()?;
        }
        state.writers.clear();

        let mut file_size_bytes = 0;
        for path in state.owners.keys() {
            file_size_bytes += std::fs::metadata(path)?.len();
        }
        state.metrics.file_size_bytes = file_size_bytes;
        if let Some(started) = state.started {
            state.metrics.total_duration = started.elapsed();
        }

        info!(
            "JSONL generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            state.metrics.rows_written,
            state.metrics.file_size_bytes,
            state.metrics.total_duration,
            state.metrics.rows_per_second()
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl RowSink for JsonlSink {
    async fn prepare(&self, collection: &SchemaCollection) -> anyhow::Result<()> {
        Ok(self.prepare_sync(collection)?)
    }

    async fn write_rows(&self, table: &str, rows: &[KeyedRow]) -> anyhow::Result<()> {
        Ok(self.write_rows_sync(table, rows)?)
    }

    async fn finish(&self) -> anyhow::Result<()> {
        Ok(self.finish_sync()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_core::{GeneratedRow, GeneratedValue};
    use schemagen_generator::DataGenerator;
    use tempfile::TempDir;

    fn test_collection(nosql: bool) -> SchemaCollection {
        let json = r#"{
            "name": "shop",
            "tables": [{
                "name": "users",
                "count": 10,
                "columns": [
                    {"name": "id", "type": "uuid", "primaryKey": true},
                    {"name": "email", "type": "email"},
                    {"name": "age", "type": "number", "options": {"digits": 2}}
                ]
            }]
        }"#;
        SchemaCollection::from_json(json).unwrap().with_nosql(nosql)
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            write_duration: Duration::from_secs(8),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
    }

    #[test]
    fn test_table_file_name() {
        assert_eq!(table_file_name("users"), "users.jsonl");
        assert_eq!(table_file_name("../etc/passwd"), "___etc_passwd.jsonl");
        assert_eq!(table_file_name("order items"), "order_items.jsonl");
    }

    #[tokio::test]
    async fn test_populate_jsonl() {
        let collection = test_collection(false);
        let output = DataGenerator::new(42)
            .generate_collection(&collection, None)
            .unwrap();

        let temp_dir = TempDir::new().unwrap();
        let sink = JsonlSink::new(temp_dir.path());
        sink.prepare(&collection).await.unwrap();
        for table in &output.tables {
            for batch in table.rows.chunks(3) {
                sink.write_rows(&table.table, batch).await.unwrap();
            }
        }
        sink.finish().await.unwrap();

        let metrics = sink.metrics();
        assert_eq!(metrics.rows_written, 10);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(sink.table_path("users")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);

        for line in lines {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(json["id"].is_string());
            assert!(json["email"].as_str().unwrap().contains('@'));
            assert!(json["age"].as_i64().unwrap() < 100);
        }
    }

    #[tokio::test]
    async fn test_nosql_rows_carry_keys() {
        let collection = test_collection(true);
        let output = DataGenerator::new(42)
            .generate_collection(&collection, Some(2))
            .unwrap();

        let temp_dir = TempDir::new().unwrap();
        let sink = JsonlSink::new(temp_dir.path().join("nested"));
        sink.prepare(&collection).await.unwrap();
        sink.write_rows("users", &output.tables[0].rows).await.unwrap();
        sink.finish().await.unwrap();

        let content = std::fs::read_to_string(sink.table_path("users")).unwrap();
        for line in content.lines() {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(json["key"].as_str().unwrap().starts_with("users:"));
            assert!(json["value"]["id"].is_string());
        }
    }

    #[tokio::test]
    async fn test_colliding_table_names_are_rejected() {
        let collection = SchemaCollection::from_json(
            r#"[
                {"name": "order items", "count": 3, "columns": [{"name": "a", "type": "sequentialNumber"}]},
                {"name": "order_items", "count": 3, "columns": [{"name": "b", "type": "sequentialNumber"}]}
            ]"#,
        )
        .unwrap();
        collection.validate().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let sink = JsonlSink::new(temp_dir.path());
        let result = sink.prepare(&collection).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JsonlSinkError>(),
            Some(JsonlSinkError::FileNameCollision { table, other, .. })
                if table == "order_items" && other == "order items"
        ));
        assert!(!sink.table_path("order_items").exists());
    }

    #[tokio::test]
    async fn test_colliding_write_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let sink = JsonlSink::new(temp_dir.path());

        let mut row = GeneratedRow::new(1);
        row.push("a", GeneratedValue::Int(1));
        let rows = vec![KeyedRow::new(None, row)];

        sink.write_rows("order items", &rows).await.unwrap();
        assert!(sink.write_rows("order_items", &rows).await.is_err());
        sink.finish().await.unwrap();

        let content = std::fs::read_to_string(sink.table_path("order items")).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(sink.metrics().rows_written, 1);
    }

    #[tokio::test]
    async fn test_write_without_prepare_appends() {
        let temp_dir = TempDir::new().unwrap();
        let sink = JsonlSink::new(temp_dir.path());

        let mut row = GeneratedRow::new(1);
        row.push("n", GeneratedValue::Int(1));
        let rows = vec![KeyedRow::new(None, row)];

        sink.write_rows("events", &rows).await.unwrap();
        sink.write_rows("events", &rows).await.unwrap();
        sink.finish().await.unwrap();

        let content = std::fs::read_to_string(sink.table_path("events")).unwrap();
        assert_eq!(content, "{\"n\":1}\n{\"n\":1}\n");
    }
}
