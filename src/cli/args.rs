use std::path::PathBuf;

use clap::Args;

/// A graph document plus direction overrides
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (JSON), or `-` for stdin
    pub graph: PathBuf,

    /// Treat edges as directed, whatever the document or config says
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat edges as undirected, whatever the document or config says
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    /// Direction forced on the command line, if any
    pub fn direction_override(&self) -> Option<bool> {
        match (self.directed, self.undirected) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// A single input file
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file, or `-` for stdin
    pub input: PathBuf,
}
