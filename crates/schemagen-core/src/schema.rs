//! Table schemas and schema collections.

use crate::column::ColumnDefinition;
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Key template applied to NoSQL tables that do not define their own.
pub const DEFAULT_KEY_FORMAT: &str = "{{ __table__ }}:{{ __uuid__ }}";

/// One table (or record type) definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,

    /// Rows requested for this table.
    #[serde(default)]
    pub count: u64,

    /// Template for the per-row storage key of NoSQL tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_format: Option<String>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            columns,
            count: 0,
            key_format: None,
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_key_format(mut self, key_format: impl Into<String>) -> Self {
        self.key_format = Some(key_format.into());
        self
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// The key template in effect, falling back to [`DEFAULT_KEY_FORMAT`].
    pub fn effective_key_format(&self) -> &str {
        match self.key_format.as_deref() {
            Some(format) if !format.trim().is_empty() => format,
            _ => DEFAULT_KEY_FORMAT,
        }
    }

    /// Reject tables that cannot be generated.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }
        if self.columns.is_empty() {
            return Err(SchemaError::NoColumns(self.name.clone()));
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            column.validate(&self.name)?;
            if !seen.insert(column.name()) {
                return Err(SchemaError::DuplicateColumnName {
                    table: self.name.clone(),
                    column: column.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A named group of tables generated and persisted together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaCollection {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub nosql: bool,

    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

impl SchemaCollection {
    pub fn new(name: impl Into<String>, tables: Vec<TableSchema>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            nosql: false,
            tables,
        }
    }

    pub fn with_nosql(mut self, nosql: bool) -> Self {
        self.nosql = nosql;
        self
    }

    /// Wrap a bare list of tables into an anonymous SQL collection.
    pub fn from_tables(tables: Vec<TableSchema>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            nosql: false,
            tables,
        }
    }

    /// Parse a collection, or a bare array of tables, from JSON.
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if value.is_array() {
            let tables: Vec<TableSchema> = serde_json::from_value(value)?;
            return Ok(Self::from_tables(tables));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a collection, or a bare sequence of tables, from YAML.
    pub fn from_yaml(content: &str) -> Result<Self, SchemaError> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_sequence() {
            let tables: Vec<TableSchema> = serde_yaml::from_value(value)?;
            return Ok(Self::from_tables(tables));
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Load a schema file. `.yaml` and `.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn get_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Key template for `table`, or `None` when the collection is not NoSQL.
    pub fn key_format_for<'a>(&self, table: &'a TableSchema) -> Option<&'a str> {
        self.nosql.then(|| table.effective_key_format())
    }

    /// Validate every table, stopping at the first error.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.tables.len());
        for table in &self.tables {
            table.validate()?;
            if !seen.insert(table.name.as_str()) {
                return Err(SchemaError::DuplicateTableName(table.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnType, NumberOptions};

    fn users_json() -> &'static str {
        r#"{
            "id": "c1",
            "name": "shop",
            "nosql": true,
            "tables": [{
                "id": "t1",
                "name": "users",
                "count": 3,
                "columns": [
                    {"id": "a", "name": "id", "type": "uuid", "nullable": false},
                    {"id": "b", "name": "age", "type": "number", "nullable": true,
                     "options": {"isDecimal": false, "digits": 2}}
                ]
            }]
        }"#
    }

    #[test]
    fn test_from_json() {
        let collection = SchemaCollection::from_json(users_json()).unwrap();
        assert!(collection.nosql);
        assert_eq!(collection.table_names(), vec!["users"]);

        let users = collection.get_table("users").unwrap();
        assert_eq!(users.count, 3);
        assert_eq!(
            users.get_column("age").unwrap().number_options(),
            Some(&NumberOptions::integer(2))
        );
        collection.validate().unwrap();
    }

    #[test]
    fn test_bare_table_list() {
        let collection = SchemaCollection::from_json(
            r#"[{"name": "events", "columns": [{"name": "at", "type": "timestamp"}]}]"#,
        )
        .unwrap();
        assert!(!collection.nosql);
        assert_eq!(collection.tables.len(), 1);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
name: inventory
nosql: false
tables:
  - name: products
    count: 10
    columns:
      - name: sku
        type: sequentialNumber
        primaryKey: true
      - name: kind
        type: set
        options:
          members: [A, B, C]
"#;
        let collection = SchemaCollection::from_yaml(yaml).unwrap();
        let products = collection.get_table("products").unwrap();
        assert_eq!(products.columns[1].column_type(), ColumnType::Set);
        assert_eq!(
            products.columns[1].set_options().unwrap().members,
            vec!["A", "B", "C"]
        );
        collection.validate().unwrap();
    }

    #[test]
    fn test_effective_key_format() {
        let table = TableSchema::new("users", vec![]);
        assert_eq!(table.effective_key_format(), DEFAULT_KEY_FORMAT);

        let table = table.with_key_format("user:{{ __uuid__ }}");
        assert_eq!(table.effective_key_format(), "user:{{ __uuid__ }}");
    }

    #[test]
    fn test_key_format_only_for_nosql() {
        let table = TableSchema::new("users", vec![]);
        let collection = SchemaCollection::new("c", vec![table.clone()]);
        assert_eq!(collection.key_format_for(&table), None);

        let collection = collection.with_nosql(true);
        assert_eq!(collection.key_format_for(&table), Some(DEFAULT_KEY_FORMAT));
    }

    #[test]
    fn test_validation_errors() {
        let column = || ColumnDefinition::new("id", ColumnType::Uuid);

        let unnamed = TableSchema::new("  ", vec![column()]);
        assert!(matches!(
            unnamed.validate(),
            Err(SchemaError::EmptyTableName)
        ));

        let empty = TableSchema::new("users", vec![]);
        assert!(matches!(empty.validate(), Err(SchemaError::NoColumns(_))));

        let duplicated = TableSchema::new("users", vec![column(), column()]);
        assert!(matches!(
            duplicated.validate(),
            Err(SchemaError::DuplicateColumnName { .. })
        ));

        let collection = SchemaCollection::new(
            "c",
            vec![
                TableSchema::new("users", vec![column()]),
                TableSchema::new("users", vec![column()]),
            ],
        );
        assert!(matches!(
            collection.validate(),
            Err(SchemaError::DuplicateTableName(_))
        ));
    }
}
