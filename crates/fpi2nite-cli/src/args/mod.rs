mod enums;

pub use enums::*;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fpi2nite")]
#[command(
    about = "List recent transient events from the VOEvent archive",
    long_about = "List recent transient events from the VOEvent archive.\n\n\
        Without stream flags, events from the past seven days are loaded from all \
        available sources (ASAS-SN, Fermi-GBM, Swift-BAT). Output is a CSV-formatted \
        list with four columns: IDENTIFIER, ISOT-EPOCH, RA, DEC."
)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, help = "Enable verbose output (repeat for more)")]
    pub verbose: u8,

    #[arg(short, long, help = "Include ASAS-SN targets")]
    pub asassn: bool,

    #[arg(short, long, help = "Include Fermi-GBM targets")]
    pub fermi: bool,

    #[arg(short, long, help = "Include Swift-BAT targets")]
    pub swift: bool,

    #[arg(short, long, help = "Number of days to search [default: 7]")]
    pub ndays: Option<u32>,

    #[arg(
        short,
        long,
        value_parser = parse_ref_date,
        help = "End of the search window, UTC (RFC 3339 or YYYY-MM-DD[THH:MM:SS]) [default: now]"
    )]
    pub ref_date: Option<DateTime<Utc>>,

    #[arg(short, long, help = "Output CSV filename, '-' for stdout")]
    pub outcsv: Option<PathBuf>,

    #[arg(long, default_value = "csv", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, help = "Config file [default: ~/.config/fpi2nite/config.toml]")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Skip packets that cannot be parsed instead of failing the stream")]
    pub skip_malformed: bool,

    #[arg(long, help = "Only report how many archive records match each stream")]
    pub dry_run: bool,
}

fn parse_ref_date(value: &str) -> Result<DateTime<Utc>, String> {
    fpi2nite_types::parse_reference_instant(value).map_err(|e| e.to_string())
}
