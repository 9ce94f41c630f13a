//! # mapq-summary
//!
//! A library for cleaning SAM headers and summarizing mapping qualities.
//!
//! Aligners and merge steps sometimes emit the same header line more than once,
//! which trips up downstream tools. `mapq-summary` removes exact duplicate
//! header lines (keeping the first copy of each, in order) and then computes
//! how many mapped records reach each mapping quality (MAPQ) or better.
//!
//! ## Features
//!
//! - **Order-preserving deduplication**: header lines are compared byte for byte
//! - **Untouched body**: alignment lines are written unchanged, duplicates included
//! - **Lenient record parsing**: only FLAG and MAPQ are required; malformed
//!   records are skipped and counted
//! - **Cumulative distribution**: for each MAPQ, the number of mapped records
//!   with a MAPQ at or above it
//! - **Gzip input**: `.gz`/`.bgz` SAM text is decoded transparently
//!
//! ## Example
//!
//! ```rust,no_run
//! use mapq_summary::{summarize, SummarizeOptions};
//!
//! let report = summarize(&SummarizeOptions::new("run1/reads.sam", "summary.tsv")).unwrap();
//!
//! for row in report.cumulative.rows() {
//!     println!("{}\t{}", row.mapq, row.cumulative_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Line classification, header sets, records, and histograms
//! - [`parsing`]: SAM line parsing and the summary TSV format
//! - [`processing`]: Header deduplication, MAPQ aggregation, and the full run
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input validation and path helpers

pub mod cli;
pub mod core;
pub mod parsing;
pub mod processing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::header::HeaderSet;
pub use crate::core::histogram::{CumulativeRow, CumulativeTable, FrequencyTable};
pub use crate::core::record::AlignmentRecord;
pub use crate::core::types::LineKind;
pub use processing::{
    summarize, HeaderDeduplicator, ProcessError, QualityAggregator, RunReport, SummarizeOptions,
};
