//! `graphwalk schedule`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::print_json;
use crate::cli::commands::ScheduleArgs;
use crate::cli::OutputFormat;
use graphwalk_core::bail_invalid;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{course_order, course_schedule};

pub fn execute(ctx: &CommandContext, args: &ScheduleArgs) -> Result<()> {
    if let Some([course, prereq]) = args
        .prereq
        .iter()
        .find(|[c, p]| *c >= args.courses || *p >= args.courses)
    {
        bail_invalid!("prerequisite (course out of range)", format!("{course},{prereq}"));
    }

    let feasible = course_schedule(args.courses, &args.prereq);
    let order = if feasible {
        course_order(args.courses, &args.prereq)
    } else {
        Vec::new()
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "courses": args.courses,
            "feasible": feasible,
            "order": order,
        })),
        OutputFormat::Human => {
            if feasible {
                println!("feasible");
                if !ctx.cli.quiet {
                    let order: Vec<String> = order.iter().map(ToString::to_string).collect();
                    println!("order: {}", order.join(" "));
                }
            } else {
                println!("infeasible: prerequisites form a cycle");
            }
            Ok(())
        }
    }
}
