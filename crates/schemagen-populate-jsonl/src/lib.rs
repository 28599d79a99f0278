//! JSONL (JSON Lines) sink for generated data.
//!
//! Writes one file per table, `<output_dir>/<table>.jsonl`, with one JSON
//! object per line. Rows of NoSQL collections are written as
//! `{"key": ..., "value": {...}}` so the rendered storage key travels with
//! the record.
//!
//! # Example
//!
//! ```ignore
//! use schemagen_populate_jsonl::JsonlSink;
//! use schemagen_sink::RowSink;
//!
//! let sink = JsonlSink::new("out");
//! sink.prepare(&collection).await?;
//! sink.write_rows("users", &rows).await?;
//! sink.finish().await?;
//! println!("{} rows written", sink.metrics().rows_written);
//! ```

pub mod error;
pub mod sink;

pub use error::JsonlSinkError;
pub use sink::{table_file_name, JsonlSink, PopulateMetrics, DEFAULT_BUFFER_SIZE};
