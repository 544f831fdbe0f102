//! `graphwalk ladder`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::read_input;
use super::print_json;
use crate::cli::commands::LadderArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::problems::word_ladder_path_with_alphabet;
use graphwalk_core::{bail_invalid, bail_usage};

pub fn execute(ctx: &CommandContext, args: &LadderArgs) -> Result<()> {
    let mut words = args.word.clone();
    if let Some(path) = &args.words {
        let content = read_input(path)?;
        words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(String::from),
        );
    }
    if words.is_empty() {
        bail_usage!("ladder needs a word list (--word or --words)");
    }

    let alphabet = match &args.alphabet {
        Some(alphabet) => alphabet.clone(),
        None => ctx.config()?.ladder.alphabet,
    };
    if alphabet.is_empty() {
        bail_invalid!("alphabet", "(empty)");
    }

    let ladder = word_ladder_path_with_alphabet(&args.begin, &args.end, &words, &alphabet);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "begin": args.begin,
            "end": args.end,
            "length": ladder.len(),
            "path": ladder,
        })),
        OutputFormat::Human => {
            if ladder.is_empty() {
                println!("no ladder from {} to {}", args.begin, args.end);
            } else {
                println!("{}", ladder.join(" -> "));
                if !ctx.cli.quiet {
                    println!("({} words)", ladder.len());
                }
            }
            Ok(())
        }
    }
}
