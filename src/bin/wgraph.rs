//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use weighted_graph::cli::commands::{self, TraversalKind};
use weighted_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph — run graph algorithms over weighted edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node and edge counts
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Breadth-first traversal from a node
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node name
        start: String,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node name
        start: String,
    },
    /// Shortest-path costs from a node
    Dijkstra {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node name
        start: String,
        /// Fail when some node is unreachable from the start
        #[arg(long)]
        require_all: bool,
    },
    /// Minimum spanning tree (Prim-Jarnik)
    Mst {
        /// Path to the edge-list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Bfs { file, start } => {
            commands::cmd_traverse(&file, &start, TraversalKind::Breadth, json)
        }
        Commands::Dfs { file, start } => {
            commands::cmd_traverse(&file, &start, TraversalKind::Depth, json)
        }
        Commands::Dijkstra {
            file,
            start,
            require_all,
        } => commands::cmd_dijkstra(&file, &start, require_all, json),
        Commands::Mst { file } => commands::cmd_mst(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::NodeNotFound(_)
            | GraphError::UnknownNodeId(_)
            | GraphError::NoSuchEdge { .. } => 4,
            GraphError::Unreachable { .. } | GraphError::NotConnected { .. } => 5,
        };
        process::exit(code);
    }
}
