//! Common CLI argument definitions shared by all populators.

use clap::Args;
use std::path::PathBuf;

/// Rows forwarded to a sink per write call.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Path to schema collection file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 's', conflicts_with = "collection")]
    pub schema: Option<PathBuf>,

    /// Collection id or name to load from the schema store instead of a file
    #[arg(long, requires = "owner")]
    pub collection: Option<String>,

    /// Owner whose stored collections are searched for --collection
    #[arg(long, env = "SCHEMAGEN_OWNER")]
    pub owner: Option<String>,

    /// Rows to generate per table (overrides each table's own count)
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Batch size for sink writes
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, env = "SCHEMAGEN_BATCH_SIZE")]
    pub batch_size: usize,

    /// Random seed for deterministic generation (same seed = same data; random when unset)
    #[arg(long, env = "SCHEMAGEN_SEED")]
    pub seed: Option<u64>,

    /// Specific tables to generate (comma-separated, empty = all tables from schema)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonPopulateArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["test", "--schema", "s.json"]).unwrap();
        assert_eq!(cli.common.schema, Some(PathBuf::from("s.json")));
        assert_eq!(cli.common.batch_size, DEFAULT_BATCH_SIZE);
        assert!(cli.common.row_count.is_none());
        assert!(cli.common.tables.is_empty());
    }

    #[test]
    fn test_table_list() {
        let cli = TestCli::try_parse_from([
            "test",
            "--schema",
            "s.yaml",
            "--tables",
            "users,orders",
            "--row-count",
            "25",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.common.tables, vec!["users", "orders"]);
        assert_eq!(cli.common.row_count, Some(25));
        assert_eq!(cli.common.seed, Some(7));
    }

    #[test]
    fn test_schema_and_collection_conflict() {
        let result = TestCli::try_parse_from([
            "test",
            "--schema",
            "s.json",
            "--collection",
            "shop",
            "--owner",
            "alice",
        ]);
        assert!(result.is_err());
    }
}
