//! Arguments for the standalone problem solvers

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_cell, parse_pair};
use graphwalk_core::problems::Cell;

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Number of courses, numbered from 0
    #[arg(long)]
    pub courses: usize,

    /// Prerequisite as `course,prerequisite` (repeatable)
    #[arg(long, value_parser = parse_pair, action = clap::ArgAction::Append)]
    pub prereq: Vec<[usize; 2]>,
}

#[derive(Args, Debug)]
pub struct ValidTreeArgs {
    /// Number of vertices, numbered from 0
    #[arg(long)]
    pub nodes: usize,

    /// Undirected edge as `u,v` (repeatable)
    #[arg(long, value_parser = parse_pair, action = clap::ArgAction::Append)]
    pub edge: Vec<[usize; 2]>,
}

#[derive(Args, Debug)]
pub struct LadderArgs {
    /// First word of the ladder
    #[arg(long)]
    pub begin: String,

    /// Last word of the ladder; must be in the word list
    #[arg(long)]
    pub end: String,

    /// Allowed word (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub word: Vec<String>,

    /// File with one allowed word per line
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Letters to substitute (default from config)
    #[arg(long)]
    pub alphabet: Option<String>,
}

#[derive(Args, Debug)]
pub struct GridPathArgs {
    /// Grid file: `.` open, `#` blocked; `-` for stdin
    pub grid: PathBuf,

    /// Start cell as `row,col`
    #[arg(long, value_parser = parse_cell)]
    pub from: Cell,

    /// End cell as `row,col`
    #[arg(long, value_parser = parse_cell)]
    pub to: Cell,
}
