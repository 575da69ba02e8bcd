use crate::domain::constants::DEFAULT_MAX_LINE_BYTES;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "table",
    version,
    about = "Read a non-negative integer from stdin and print its multiplication table"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Prompt written to stderr before reading"
    )]
    pub prompt: Option<String>,
    #[arg(
        long,
        env = "TABLE_MAX_LINE_BYTES",
        default_value_t = DEFAULT_MAX_LINE_BYTES,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Reject input lines longer than this many bytes"
    )]
    pub max_line_bytes: u64,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
    #[arg(short, long, help = "Suppress the diagnostic on failure")]
    pub quiet: bool,
}
