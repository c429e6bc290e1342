//! icondex-cli: Command-line interface for icondex.

mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use icondex_core::build_info::BUILD_INFO;
use icondex_core::{paths, Config};
use icondex_index::{IconCatalog, Query, QueryEngine};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "icondex")]
#[command(about = "Search a catalog of diagram icons and print their imports", long_about = None)]
#[command(version)]
struct Cli {
    /// Icon catalog (JSON array); overrides the config file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search icons by name or import path
    Search {
        /// Search query (case-insensitive substring)
        #[arg(default_value = "")]
        query: String,

        /// Include every icon when the query is empty
        #[arg(short, long)]
        all: bool,

        /// Maximum number of results (0 = no limit)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Show icon counts per provider
    Stats,

    /// Show everything known about one icon
    Show {
        /// Exact import path, e.g. diagrams.aws.compute.EC2
        import_path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Plain,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        icondex_core::logging::init_with_level("debug");
    } else {
        icondex_core::logging::init();
    }

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();

    let Some(command) = cli.command else {
        println!("{}", BUILD_INFO.version_line("icondex"));
        println!("Use --help for usage information");
        return Ok(());
    };

    let catalog = load_catalog(cli.config, cli.catalog)?;

    match command {
        Commands::Search {
            query,
            all,
            limit,
            format,
        } => search(&catalog, &query, all, limit, format, color),
        Commands::Stats => {
            print!("{}", output::stats(&catalog, color));
            Ok(())
        }
        Commands::Show { import_path } => {
            let Some(record) = catalog.find(&import_path) else {
                bail!("no icon with import path '{import_path}'");
            };
            print!("{}", output::show(record, color));
            Ok(())
        }
    }
}

fn search(
    catalog: &IconCatalog,
    term: &str,
    all: bool,
    limit: usize,
    format: Format,
    color: bool,
) -> Result<()> {
    let engine = QueryEngine::new(catalog.records());
    let query = Query::new(term, all);

    let mut results = engine.search(&query);
    debug!(term, all, hits = results.len(), "search finished");
    if limit > 0 {
        results.truncate(limit);
    }

    match format {
        Format::Json => println!("{}", output::json(&results)?),
        Format::Plain => print!("{}", output::plain(&results)),
        Format::Table => print!("{}", output::table(&results, color)),
    }

    Ok(())
}

fn load_catalog(config: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<IconCatalog> {
    let config_path = config.unwrap_or_else(paths::config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;

    let catalog_path = catalog.unwrap_or(config.catalog_path);
    Ok(IconCatalog::open(&catalog_path)?)
}
