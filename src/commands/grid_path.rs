//! `graphwalk grid-path`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::{read_input, source_name};
use super::print_json;
use crate::cli::commands::GridPathArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::problems::{parse_obstacle_grid, shortest_grid_path};

pub fn execute(ctx: &CommandContext, args: &GridPathArgs) -> Result<()> {
    let content = read_input(&args.grid)?;
    let grid = parse_obstacle_grid(&content, &source_name(&args.grid))?;
    let path = shortest_grid_path(&grid, args.from, args.to);
    let steps = path.len().checked_sub(1);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "from": args.from,
            "to": args.to,
            "path": path,
            "steps": steps,
        })),
        OutputFormat::Human => {
            match steps {
                Some(steps) => {
                    let cells: Vec<String> =
                        path.iter().map(|(r, c)| format!("({r},{c})")).collect();
                    println!("{}", cells.join(" -> "));
                    if !ctx.cli.quiet {
                        println!("({steps} step(s))");
                    }
                }
                None => println!("no path"),
            }
            Ok(())
        }
    }
}
