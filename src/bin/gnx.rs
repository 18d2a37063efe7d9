//! CLI entry point for the `gnx` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_nexus::cli::{commands, CommandContext};
use graph_nexus::config::{resolve_config, OutputFormat};
use graph_nexus::GraphError;

#[derive(Parser)]
#[command(
    name = "gnx",
    about = "GraphNexus CLI — MST, shortest paths, and subgraph reports for weighted graphs"
)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file (defaults to $GNX_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex, edge, and weight totals for a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Print the minimum spanning tree
    Mst {
        /// Path to the graph file
        file: PathBuf,
        /// Span every component instead of only the first vertex's
        #[arg(long)]
        forest: bool,
    },
    /// Print shortest distances from a source vertex
    Paths {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex (defaults to the first vertex in the file)
        #[arg(long)]
        source: Option<String>,
    },
    /// Report vertices whose MST path is a shortest path
    Report {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex (defaults to the first vertex in the file)
        #[arg(long)]
        source: Option<String>,
    },
    /// Run every analysis on one or more graph files
    Analyze {
        /// Paths to graph files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::Io(_) => 1,
        GraphError::MalformedInput { .. } | GraphError::SizeMismatch { .. } => 2,
        GraphError::InvalidWeight { .. } => 3,
        GraphError::VertexCountMismatch { .. } => 4,
        GraphError::UnknownVertex(_) | GraphError::Config(_) => 5,
    }
}

fn main() {
    let cli = Cli::parse();

    let mut config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.pretty |= cli.pretty;

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    );
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();
    log::debug!("Effective config: {:?}", config);

    let ctx = CommandContext::from(&config);
    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, &ctx),
        Commands::Mst { file, forest } => commands::cmd_mst(&file, forest, &ctx),
        Commands::Paths { file, source } => commands::cmd_paths(&file, source.as_deref(), &ctx),
        Commands::Report { file, source } => commands::cmd_report(&file, source.as_deref(), &ctx),
        Commands::Analyze { files } => commands::cmd_analyze(&files, &ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
