//! `graphwalk circles`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::{read_input, source_name};
use super::print_json;
use crate::cli::args::InputArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::problems::{find_circle_num, parse_friend_matrix};

pub fn execute(ctx: &CommandContext, args: &InputArgs) -> Result<()> {
    let content = read_input(&args.input)?;
    let matrix = parse_friend_matrix(&content, &source_name(&args.input))?;
    let circles = find_circle_num(&matrix);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "people": matrix.len(),
            "circles": circles,
        })),
        OutputFormat::Human => {
            println!("{circles}");
            Ok(())
        }
    }
}
