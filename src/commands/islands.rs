//! `graphwalk islands`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::{read_input, source_name};
use super::print_json;
use crate::cli::args::InputArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::problems::{number_of_islands, parse_land_grid};

pub fn execute(ctx: &CommandContext, args: &InputArgs) -> Result<()> {
    let content = read_input(&args.input)?;
    let mut grid = parse_land_grid(&content, &source_name(&args.input))?;
    let islands = number_of_islands(&mut grid);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({ "islands": islands })),
        OutputFormat::Human => {
            println!("{islands}");
            Ok(())
        }
    }
}
