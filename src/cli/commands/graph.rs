//! Arguments for commands that read a graph document

use clap::Args;

use crate::cli::args::GraphArgs;
use graphwalk_core::graph::TraversalOrder;

#[derive(Args, Debug)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex to start from
    #[arg(long, short)]
    pub start: String,

    /// Visitation order (default from config, else dfs)
    #[arg(long, short, value_enum)]
    pub order: Option<TraversalOrder>,
}

#[derive(Args, Debug)]
pub struct EndpointArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source vertex
    #[arg(long)]
    pub from: String,

    /// Target vertex
    #[arg(long)]
    pub to: String,
}

#[derive(Args, Debug)]
pub struct DijkstraArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source vertex
    #[arg(long)]
    pub from: String,

    /// Report only the path to this vertex
    #[arg(long)]
    pub to: Option<String>,
}
