//! CLI for the s3xfer part planner and header parsers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use s3xfer_core::config;

use commands::{run_content_length, run_content_range, run_inspect, run_part, run_plan};

/// Top-level CLI for s3xfer.
#[derive(Debug, Parser)]
#[command(name = "s3xfer")]
#[command(about = "s3xfer: plan multipart transfers and parse object size headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the parts covering an object or a byte range.
    Plan {
        /// Plan a whole object of this many bytes.
        #[arg(long, conflicts_with_all = ["start", "end"])]
        size: Option<u64>,
        /// First byte of the range (inclusive).
        #[arg(long, requires = "end")]
        start: Option<u64>,
        /// Last byte of the range (inclusive).
        #[arg(long, requires = "start")]
        end: Option<u64>,
        /// Part size in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        part_size: Option<u64>,
    },

    /// Show a single part of a byte range.
    Part {
        /// First byte of the range (inclusive).
        #[arg(long)]
        start: u64,
        /// Last byte of the range (inclusive).
        #[arg(long)]
        end: u64,
        /// 1-based part number.
        #[arg(long, value_name = "N")]
        number: u32,
        /// Part size in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        part_size: Option<u64>,
    },

    /// Parse a Content-Range value, e.g. "bytes 0-499/1000".
    ContentRange {
        /// Raw header value.
        value: String,
    },

    /// Parse a Content-Length value.
    ContentLength {
        /// Raw header value.
        value: String,
    },

    /// Read a response header dump (e.g. `curl -D`) and plan the object it describes.
    Inspect {
        /// Path to the header dump.
        path: String,
        /// Part size in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        part_size: Option<u64>,
        /// Print every part, not just the summary.
        #[arg(long)]
        list: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Plan {
                size,
                start,
                end,
                part_size,
            } => run_plan(&cfg, size, start.zip(end), part_size)?,
            CliCommand::Part {
                start,
                end,
                number,
                part_size,
            } => run_part(&cfg, start, end, number, part_size)?,
            CliCommand::ContentRange { value } => run_content_range(&value)?,
            CliCommand::ContentLength { value } => run_content_length(&value)?,
            CliCommand::Inspect {
                path,
                part_size,
                list,
            } => run_inspect(&cfg, &path, part_size, list).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
