//! Schemagen Library
//!
//! A library for designing table schemas and generating synthetic test data
//! from them.
//!
//! # Features
//!
//! - Schema collections: tables of typed columns, loaded from JSON or YAML
//! - Reproducible generation: the same seed always yields the same rows
//! - NoSQL keys: per-row storage keys rendered from a key format template
//! - Sinks: previews in memory, full runs to JSONL files
//! - Schema store: collections saved per owner
//!
//! # Crates
//!
//! - `schemagen_core` - schema model and validation
//! - `schemagen_generator` - per-type value generators and row assembly
//! - `schemagen_sink` - the `RowSink` trait
//! - `schemagen_populate_jsonl` - JSONL output
//!
//! # CLI Usage
//!
//! ```bash
//! # Check a schema file
//! schemagen validate --schema shop.yaml
//!
//! # Print a 10-row sample of every table
//! schemagen generate --schema shop.yaml --sample --seed 42
//!
//! # Write every table to out/<table>.jsonl
//! schemagen generate --schema shop.yaml --output-dir out --row-count 1000
//!
//! # Save a collection for later and generate from it
//! schemagen store import --owner alice --schema shop.yaml
//! schemagen generate --owner alice --collection shop --sample
//! ```

use anyhow::Context;
use clap::Parser;
use schemagen_core::SchemaCollection;
use schemagen_populate::CommonPopulateArgs;
use std::path::PathBuf;

pub mod generate;
pub mod store;

pub use generate::{
    GenerateError, GenerateRequest, GenerateResponse, GenerateService, PopulateSummary,
    TableSummary, SAMPLE_ROW_LIMIT,
};
pub use store::{FileSchemaStore, MemorySchemaStore, SchemaStore, StoreError};

/// Default directory of the file schema store.
pub const DEFAULT_STORE_DIR: &str = ".schemagen";

#[derive(Parser, Clone, Debug)]
pub struct StoreOpts {
    /// Directory holding one JSON file of saved collections per owner
    #[arg(long, default_value = DEFAULT_STORE_DIR, env = "SCHEMAGEN_STORE_DIR")]
    pub store_dir: PathBuf,
}

impl StoreOpts {
    pub fn open(&self) -> FileSchemaStore {
        FileSchemaStore::new(&self.store_dir)
    }
}

/// Resolve the collection named by `--schema`, or by `--owner` and
/// `--collection` from `store`.
pub async fn load_collection<S: SchemaStore + ?Sized>(
    args: &CommonPopulateArgs,
    store: &S,
) -> anyhow::Result<SchemaCollection> {
    if let Some(path) = &args.schema {
        return SchemaCollection::from_file(path)
            .with_context(|| format!("Failed to load schema from {path:?}"));
    }

    match (&args.owner, &args.collection) {
        (Some(owner), Some(collection)) => store
            .get(owner, collection)
            .await
            .with_context(|| format!("Failed to read schema store for owner '{owner}'"))?
            .with_context(|| format!("Collection '{collection}' not found for owner '{owner}'")),
        _ => anyhow::bail!("Either --schema or --owner with --collection is required"),
    }
}

impl GenerateRequest {
    /// Build a request for `collection` with the knobs of `args`.
    pub fn from_args(collection: SchemaCollection, args: &CommonPopulateArgs) -> Self {
        Self {
            collection,
            row_count: args.row_count,
            seed: args.seed,
            tables: args.tables.clone(),
        }
    }
}
