//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod commands;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use graphwalk_core::format::OutputFormat;

/// Graphwalk - graph traversal, connectivity and shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (default: ./graphwalk.toml, then the user config)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (`debug`) or a full filter directive (`graphwalk_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::ConfigCommands;
    use graphwalk_core::graph::TraversalOrder;

    #[test]
    fn test_parse_traverse() {
        let cli = Cli::try_parse_from([
            "graphwalk",
            "traverse",
            "g.json",
            "--start",
            "a",
            "--order",
            "dfs-iterative",
        ])
        .unwrap();
        if let Some(Commands::Traverse(args)) = cli.command {
            assert_eq!(args.graph.graph, PathBuf::from("g.json"));
            assert_eq!(args.start, "a");
            assert_eq!(args.order, Some(TraversalOrder::DfsIterative));
        } else {
            panic!("Expected Traverse command");
        }
    }

    #[test]
    fn test_parse_schedule_pairs() {
        let cli = Cli::try_parse_from([
            "graphwalk", "schedule", "--courses", "3", "--prereq", "1,0", "--prereq", "2,1",
        ])
        .unwrap();
        if let Some(Commands::Schedule(args)) = cli.command {
            assert_eq!(args.courses, 3);
            assert_eq!(args.prereq, vec![[1, 0], [2, 1]]);
        } else {
            panic!("Expected Schedule command");
        }
    }

    #[test]
    fn test_parse_grid_path_cells() {
        let cli = Cli::try_parse_from([
            "graphwalk", "grid-path", "maze.txt", "--from", "0,0", "--to", "2,3",
        ])
        .unwrap();
        if let Some(Commands::GridPath(args)) = cli.command {
            assert_eq!(args.from, (0, 0));
            assert_eq!(args.to, (2, 3));
        } else {
            panic!("Expected GridPath command");
        }
    }

    #[test]
    fn test_direction_flags_conflict() {
        let result = Cli::try_parse_from([
            "graphwalk",
            "components",
            "g.json",
            "--directed",
            "--undirected",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["graphwalk", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => {
                assert!(matches!(args.command, ConfigCommands::Init { force: true, .. }));
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["graphwalk", "--format", "json", "islands", "map.txt"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
