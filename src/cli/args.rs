use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boxover")]
#[command(version, about = "Axis-aligned rectangle overlap checker", long_about = None)]
pub struct CliArgs {
    /// Shared rectangle length (x extent); prompted for when omitted
    #[arg(short = 'l', long)]
    pub length: Option<i64>,

    /// Shared rectangle breadth (y extent); prompted for when omitted
    #[arg(short = 'b', long)]
    pub breadth: Option<i64>,

    /// Bottom-left x of the first rectangle
    #[arg(long, value_name = "X")]
    pub x1: Option<i64>,

    /// Bottom-left y of the first rectangle
    #[arg(long, value_name = "Y")]
    pub y1: Option<i64>,

    /// Bottom-left x of the second rectangle
    #[arg(long, value_name = "X")]
    pub x2: Option<i64>,

    /// Bottom-left y of the second rectangle
    #[arg(long, value_name = "Y")]
    pub y2: Option<i64>,

    /// Load default extents and format from a .boxover config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verdict output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single fixed verdict line
    #[default]
    Text,
    /// JSON report with both extents and the overlap region
    Json,
}
