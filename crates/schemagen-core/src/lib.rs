//! Core types shared by the schemagen crates.
//!
//! This crate defines the schema model that drives data generation:
//!
//! - [`SchemaCollection`] - a named group of tables, optionally flagged NoSQL
//! - [`TableSchema`] - one table with ordered columns, a row count and an
//!   optional key format template
//! - [`ColumnDefinition`] - one column with a [`ColumnType`] and the matching
//!   [`ColumnOptions`]
//! - [`GeneratedValue`] / [`GeneratedRow`] / [`KeyedRow`] - generated output
//!
//! Column options arrive as a loose JSON object on the wire. They are
//! interpreted according to the column type when the column is constructed,
//! so a [`ColumnDefinition`] can never hold options of the wrong shape.
//!
//! # Example
//!
//! ```rust
//! use schemagen_core::SchemaCollection;
//!
//! let collection = SchemaCollection::from_json(r#"{
//!     "name": "shop",
//!     "tables": [{
//!         "name": "users",
//!         "count": 3,
//!         "columns": [
//!             { "name": "id", "type": "uuid", "primaryKey": true },
//!             { "name": "age", "type": "number", "nullable": true,
//!               "options": { "isDecimal": false, "digits": 2 } }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! collection.validate().unwrap();
//! assert_eq!(collection.tables[0].columns.len(), 2);
//! ```

pub mod column;
pub mod error;
pub mod row;
pub mod schema;
pub mod value;

pub use column::{
    ColumnDefinition, ColumnOptions, ColumnType, NumberOptions, SetOptions,
    DEFAULT_NUMBER_DIGITS, MAX_DECIMAL_DIGITS, MAX_INTEGER_DIGITS,
};
pub use error::SchemaError;
pub use row::{GeneratedRow, KeyedRow};
pub use schema::{SchemaCollection, TableSchema, DEFAULT_KEY_FORMAT};
pub use value::GeneratedValue;
