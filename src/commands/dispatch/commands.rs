//! Command implementations for all graphwalk commands

use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{
    circles, clone_graph, components, config, cycle, dijkstra, grid_path, islands, ladder, path,
    reachable, schedule, traverse, valid_tree,
};
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Traverse(args) => traverse::execute(ctx, args),
            Commands::Reachable(args) => reachable::execute(ctx, args),
            Commands::Components(args) => components::execute(ctx, args),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Dijkstra(args) => dijkstra::execute(ctx, args),
            Commands::Cycle(args) => cycle::execute(ctx, args),
            Commands::Schedule(args) => schedule::execute(ctx, args),
            Commands::ValidTree(args) => valid_tree::execute(ctx, args),
            Commands::Islands(args) => islands::execute(ctx, args),
            Commands::Ladder(args) => ladder::execute(ctx, args),
            Commands::Circles(args) => circles::execute(ctx, args),
            Commands::GridPath(args) => grid_path::execute(ctx, args),
            Commands::CloneGraph(args) => clone_graph::execute(ctx, args),
            Commands::Config(args) => config::execute(ctx, &args.command),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
