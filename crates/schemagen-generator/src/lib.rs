//! Synthetic data generator for schemagen.
//!
//! This crate provides the `DataGenerator` which turns a [`SchemaCollection`]
//! into rows of fake data. Every table draws from its own seeded RNG stream,
//! so the same seed and schema always produce the same rows.
//!
//! # Architecture
//!
//! ```text
//! SchemaCollection (JSON / YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │                      │
//! │  - seed              │
//! │  - reference_time    │
//! └──────────┬───────────┘
//!            │  one StdRng per table
//!            ▼
//!      TableRows ──► KeyedRow { key, row }
//! ```
//!
//! # Example
//!
//! ```rust
//! use schemagen_core::SchemaCollection;
//! use schemagen_generator::DataGenerator;
//!
//! let collection = SchemaCollection::from_json(r#"{
//!     "name": "shop",
//!     "nosql": true,
//!     "tables": [{
//!         "name": "users",
//!         "count": 5,
//!         "columns": [
//!             { "name": "n", "type": "sequentialNumber", "primaryKey": true },
//!             { "name": "email", "type": "email" }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let output = DataGenerator::new(42).generate_collection(&collection, None).unwrap();
//! let users = output.get("users").unwrap();
//! assert_eq!(users.rows.len(), 5);
//! assert!(users.rows[0].key.as_deref().unwrap().starts_with("users:"));
//! ```
//!
//! # Key formats
//!
//! NoSQL tables render a storage key per row from a template. Recognized
//! tokens are `{{ __table__ }}`, `{{ __uuid__ }}`, `{{ __index__ }}` and
//! the name of any column of the table, optionally followed by
//! `| zero_pad(n)`; anything else is copied through unchanged.
//!
//! [`SchemaCollection`]: schemagen_core::SchemaCollection

pub mod generator;
pub mod generators;
pub mod key_format;

// Re-exports for convenience
pub use generator::{
    DataGenerator, GenerationOutput, GeneratorError, TableOutput, TableRows,
    MAX_UNIQUE_ATTEMPTS, NULL_PROBABILITY,
};
pub use generators::GenerationContext;
pub use key_format::KeyFormat;
