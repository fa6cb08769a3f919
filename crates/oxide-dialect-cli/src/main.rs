//! oxide-dialect CLI
//!
//! Resolves a connection URL to its dialect and prints the SQL the dialect
//! generates.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_dialect::{Dialect, DialectConfig, DialectRegistry, FieldType, SqlType, TableDefinition};
use oxide_dialect_derby::register_dialects_with;

/// Inspect the SQL a database dialect generates.
#[derive(Debug, Parser)]
#[command(name = "oxide-dialect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL used to pick the dialect.
    #[arg(
        short,
        long,
        env = "DATABASE_URL",
        default_value = "jdbc:derby:memory:oxide;create=true"
    )]
    database: String,

    /// JSON dialect configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show what the dialect supports.
    Info,

    /// Render the column type for a field kind.
    ColumnType {
        /// Field kind, e.g. LONG_STRING or byte-array.
        sql_type: SqlType,

        /// Column width (0 for the dialect default).
        #[arg(short, long, default_value_t = 0)]
        width: u32,
    },

    /// Render CREATE TABLE statements from a JSON table definition.
    CreateTable {
        /// Path to the table definition.
        file: PathBuf,
    },

    /// Render a paginated SELECT.
    Paginate {
        /// Table to select from.
        table: String,

        /// Maximum number of rows.
        #[arg(short, long)]
        limit: Option<u64>,

        /// Number of rows to skip.
        #[arg(short, long)]
        offset: Option<u64>,
    },
}

fn build_registry(config: Option<&Path>) -> anyhow::Result<DialectRegistry> {
    let config = match config {
        Some(path) => DialectConfig::from_path(path)
            .with_context(|| format!("reading dialect config {}", path.display()))?,
        None => DialectConfig::default(),
    };
    debug!(?config, "Loaded dialect configuration");

    let mut registry = DialectRegistry::new();
    register_dialects_with(&mut registry, &config);
    Ok(registry)
}

fn load_table(path: &Path) -> anyhow::Result<TableDefinition> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading table definition {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing table definition {}", path.display()))
}

fn describe(dialect: &dyn Dialect) -> Vec<String> {
    vec![
        format!("name:           {}", dialect.name()),
        format!("driver:         {}", dialect.driver_name()),
        format!("ping:           {}", dialect.ping_statement()),
        format!("limit in sql:   {}", dialect.supports_limit()),
        format!("offset in sql:  {}", dialect.supports_offset()),
        format!("case folded:    {}", dialect.identifiers_are_case_folded()),
    ]
}

fn paginate(
    dialect: &dyn Dialect,
    table: &str,
    limit: Option<u64>,
    offset: Option<u64>,
) -> anyhow::Result<(String, Option<u64>)> {
    let mut sql = format!("SELECT * FROM {} ", dialect.quote_identifier(table));
    let row_cap = dialect.append_pagination(&mut sql, limit, offset)?;
    Ok((sql.trim_end().to_string(), row_cap))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let registry = build_registry(cli.config.as_deref())?;
    let dialect = registry.resolve(&cli.database)?;
    info!(dialect = dialect.name(), "Using dialect for {}", cli.database);

    match cli.command {
        Commands::Info => {
            for line in describe(dialect) {
                println!("{line}");
            }
        }

        Commands::ColumnType { sql_type, width } => {
            let field = FieldType::new("field", sql_type).width(width);
            println!("{}", dialect.column_type(&field));
        }

        Commands::CreateTable { file } => {
            let table = load_table(&file)?;
            for statement in dialect.create_table(&table)? {
                println!("{statement};");
            }
        }

        Commands::Paginate {
            table,
            limit,
            offset,
        } => {
            let (sql, row_cap) = paginate(dialect, &table, limit, offset)?;
            println!("{sql}");
            if let Some(cap) = row_cap {
                info!("Limit is not expressible in SQL; cap the cursor at {cap} rows");
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli)
}
