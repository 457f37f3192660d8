use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use typegrid::cli::{self, OutputFormat};

#[derive(Parser)]
#[command(
    name = "typegrid",
    version,
    about = "Compute type-dependency graphs and grid layouts from a type catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the grouped grid layout for a scope and print it
    Layout {
        /// Path to the type catalog JSON file
        catalog: PathBuf,
        /// Scope: a source-path prefix; empty selects every catalog type
        #[arg(long, default_value = "")]
        scope: String,
        /// Spacing between grid cells
        #[arg(long, default_value_t = 0.0)]
        offset: f32,
        /// Skip edge resolution; positions only
        #[arg(long)]
        no_edges: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the dependency graph for a scope as JSON (no layout)
    Graph {
        /// Path to the type catalog JSON file
        catalog: PathBuf,
        #[arg(long, default_value = "")]
        scope: String,
    },
    /// List every type in the catalog's filtered universe
    Types {
        /// Path to the type catalog JSON file
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Layout {
            catalog,
            scope,
            offset,
            no_edges,
            format,
        } => cli::run_layout(&catalog, &scope, offset, no_edges, format),
        Command::Graph { catalog, scope } => cli::run_graph(&catalog, &scope),
        Command::Types { catalog } => cli::run_types(&catalog),
    }
}
