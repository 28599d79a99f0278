use anyhow::Context;
use clap::{Parser, Subcommand};
use schemagen::{
    load_collection, GenerateRequest, GenerateService, SchemaStore, StoreOpts, SAMPLE_ROW_LIMIT,
};
use schemagen_core::SchemaCollection;
use schemagen_populate::CommonPopulateArgs;
use schemagen_populate_jsonl::JsonlSink;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "A tool for generating synthetic test data from table schemas")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a schema file and report its tables
    Validate {
        /// Path to schema collection file (JSON, or YAML with a .yaml/.yml extension)
        #[arg(long, short = 's')]
        schema: PathBuf,
    },

    /// Generate rows for a schema collection
    Generate {
        #[command(flatten)]
        common: CommonPopulateArgs,

        /// Print at most 10 rows per table as JSON instead of writing files
        #[arg(long)]
        sample: bool,

        /// Directory that receives one <table>.jsonl file per table
        #[arg(long, default_value = "output", env = "SCHEMAGEN_OUTPUT_DIR")]
        output_dir: PathBuf,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Manage saved schema collections
    Store {
        #[command(subcommand)]
        command: StoreCommand,

        #[command(flatten)]
        store: StoreOpts,
    },
}

#[derive(Subcommand)]
enum StoreCommand {
    /// Save a schema file as a collection of an owner
    Import {
        /// Owner the collection belongs to
        #[arg(long, env = "SCHEMAGEN_OWNER")]
        owner: String,

        /// Path to schema collection file
        #[arg(long, short = 's')]
        schema: PathBuf,
    },

    /// List the saved collections of an owner
    List {
        /// Owner whose collections are listed
        #[arg(long, env = "SCHEMAGEN_OWNER")]
        owner: String,
    },

    /// Remove a saved collection
    Delete {
        /// Owner the collection belongs to
        #[arg(long, env = "SCHEMAGEN_OWNER")]
        owner: String,

        /// Id of the collection to remove
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { schema } => run_validate(schema),
        Commands::Generate {
            common,
            sample,
            output_dir,
            store,
        } => run_generate(common, sample, output_dir, store).await,
        Commands::Store { command, store } => run_store(command, store).await,
    }
}

fn run_validate(schema: PathBuf) -> anyhow::Result<()> {
    let collection = SchemaCollection::from_file(&schema)
        .with_context(|| format!("Failed to load schema from {schema:?}"))?;
    collection
        .validate()
        .with_context(|| format!("Schema {schema:?} is invalid"))?;

    for table in &collection.tables {
        println!(
            "{}: {} columns, {} rows",
            table.name,
            table.columns.len(),
            table.count
        );
    }
    println!("Schema is valid ({} tables)", collection.tables.len());
    Ok(())
}

async fn run_generate(
    common: CommonPopulateArgs,
    sample: bool,
    output_dir: PathBuf,
    store: StoreOpts,
) -> anyhow::Result<()> {
    let collection = load_collection(&common, &store.open()).await?;
    let request = GenerateRequest::from_args(collection, &common);
    let service = GenerateService::new();

    if sample {
        tracing::debug!("Sampling up to {} rows per table", SAMPLE_ROW_LIMIT);
        let response = service.preview(&request)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let sink = JsonlSink::new(&output_dir);
    let summary = service
        .populate(&request, &sink, common.batch_size)
        .await
        .with_context(|| format!("Failed to write JSONL files to {output_dir:?}"))?;

    for table in &summary.tables {
        println!(
            "{}: {} rows -> {}",
            table.table,
            table.rows,
            sink.table_path(&table.table).display()
        );
    }
    let metrics = sink.metrics();
    tracing::info!(
        "Wrote {} rows ({} bytes) in {:?} (seed={})",
        summary.total_rows(),
        metrics.file_size_bytes,
        summary.duration,
        summary.seed
    );
    Ok(())
}

async fn run_store(command: StoreCommand, opts: StoreOpts) -> anyhow::Result<()> {
    let store = opts.open();

    match command {
        StoreCommand::Import { owner, schema } => {
            let collection = SchemaCollection::from_file(&schema)
                .with_context(|| format!("Failed to load schema from {schema:?}"))?;
            let id = store
                .upsert(&owner, collection)
                .await
                .with_context(|| format!("Failed to save collection for owner '{owner}'"))?;
            println!("Saved collection '{id}' for '{owner}'");
        }
        StoreCommand::List { owner } => {
            let collections = store.load(&owner).await?;
            if collections.is_empty() {
                println!("No collections saved for '{owner}'");
            }
            for collection in &collections {
                println!(
                    "{}\t{}\t{} tables{}",
                    collection.id,
                    collection.name,
                    collection.tables.len(),
                    if collection.nosql { " (nosql)" } else { "" }
                );
            }
        }
        StoreCommand::Delete { owner, id } => {
            if !store.delete(&owner, &id).await? {
                anyhow::bail!("Collection '{id}' not found for owner '{owner}'");
            }
            println!("Deleted collection '{id}'");
        }
    }
    Ok(())
}
