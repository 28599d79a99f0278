//! Schema error types.

use crate::column::ColumnType;
use thiserror::Error;

/// Errors raised while loading, constructing or validating a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// IO error while reading a schema file.
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error("Failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error.
    #[error("Failed to parse schema YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Table name must not be empty")]
    EmptyTableName,

    #[error("Duplicate table name: {0}")]
    DuplicateTableName(String),

    #[error("Table '{0}' has no columns")]
    NoColumns(String),

    #[error("Table '{table}' has a column with an empty name")]
    EmptyColumnName { table: String },

    #[error("Table '{table}' has more than one column named '{column}'")]
    DuplicateColumnName { table: String, column: String },

    /// The column type string was not recognized.
    #[error("Column '{table}.{column}' has an unknown type")]
    UnknownColumnType { table: String, column: String },

    #[error("Set column '{table}.{column}' has no members")]
    EmptySetMembers { table: String, column: String },

    #[error("Number column '{table}.{column}' has invalid options: {reason}")]
    InvalidNumberOptions {
        table: String,
        column: String,
        reason: String,
    },

    /// The `options` object could not be read as the shape its type expects.
    #[error("Column '{column}' has malformed options: {reason}")]
    InvalidOptions { column: String, reason: String },

    /// Options of one type were attached to a column of another type.
    #[error("Column '{column}' of type {column_type} cannot take these options")]
    OptionsMismatch {
        column: String,
        column_type: ColumnType,
    },
}
