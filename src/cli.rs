//! Command line arguments and the run driver.

use crate::models::{parse_addr, Range};
use crate::output::{render, OutputFormat};
use crate::processing::verify_cover;
use clap::Parser;
use colored::Colorize;
use std::error::Error;

/// Convert an IPv4 address range to the minimal list of CIDR blocks.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ip-range-cidr", version)]
pub struct Cli {
    /// First address of the range
    pub start_ip: String,

    /// Last address of the range (inclusive unless --exclusive)
    pub end_ip: String,

    /// Exclude the end address from the range
    #[arg(short, long)]
    pub exclusive: bool,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        env = "IP_RANGE_CIDR_FORMAT"
    )]
    pub format: OutputFormat,

    /// Check the computed blocks cover the range exactly before printing
    #[arg(long)]
    pub verify: bool,
}

/// Compute the output lines for the given arguments.
///
/// Invalid addresses fail with [`crate::RangeError::InvalidAddress`]. An
/// empty range, including an exclusive end of 0.0.0.0, gives no blocks.
pub fn run(cli: &Cli) -> Result<Vec<String>, Box<dyn Error>> {
    log::info!(
        "#Start run() start={} end={} exclusive={}",
        cli.start_ip.on_blue(),
        cli.end_ip.on_blue(),
        cli.exclusive
    );

    let start = parse_addr(&cli.start_ip)?;
    let end = parse_addr(&cli.end_ip)?;

    let blocks = match Range::from_endpoints(start, end, cli.exclusive) {
        Some(range) => {
            log::debug!("effective range {range} ({} addresses)", range.len());
            let blocks = range.cidrs();
            if cli.verify {
                verify_cover(&blocks, range.start, range.end)?;
                log::info!("verified {} block(s) for {range}", blocks.len());
            }
            blocks
        }
        None => {
            log::debug!(
                "{} range {} - {}, nothing to print",
                "empty".on_blue(),
                cli.start_ip,
                cli.end_ip
            );
            Vec::new()
        }
    };

    render(&blocks, cli.format)
}
