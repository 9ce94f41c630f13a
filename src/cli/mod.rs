//! Command-line interface for mapq-summary.
//!
//! One command: deduplicate the headers of a SAM file and write the cumulative
//! MAPQ distribution of its mapped records.
//!
//! ## Usage
//!
//! ```text
//! # Write summary.tsv and aligned_output_unique.sam next to reads.sam
//! mapq-summary data/reads.sam summary.tsv
//!
//! # Gzip-compressed SAM text, cleaned copy written elsewhere
//! mapq-summary reads.sam.gz summary.tsv --cleaned /tmp/reads.clean.sam
//!
//! # JSON report for scripting
//! mapq-summary reads.sam summary.tsv --format json
//! ```

use clap::Parser;

pub mod summarize;

#[derive(Parser)]
#[command(name = "mapq-summary")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Deduplicate SAM headers and summarize the cumulative MAPQ distribution")]
#[command(
    long_about = "mapq-summary removes duplicate header lines from a SAM file, keeping the first copy of each in order, and writes the cleaned file as aligned_output_unique.sam next to the input.\n\nIt then counts mapped records by mapping quality and writes a TSV where each MAPQ is paired with the number of mapped records at or above it."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: summarize::SummarizeArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format printed to stdout
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
