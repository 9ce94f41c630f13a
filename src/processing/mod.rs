//! Header deduplication and MAPQ aggregation.
//!
//! - [`HeaderDeduplicator`]: keeps the first copy of each header line and
//!   hoists the headers above the unmodified body
//! - [`QualityAggregator`]: counts mapped records per MAPQ and folds the
//!   counts into a cumulative-from-the-top distribution
//! - [`summarize`]: runs both over a file and writes the summary TSV
//!
//! ## Example
//!
//! ```rust
//! use mapq_summary::processing::{aggregate, deduplicate};
//!
//! let sam = "@HD\tVN:1.6\n@HD\tVN:1.6\nr1\t0\tchr1\t1\t30\nr2\t4\t*\t0\t0\n";
//!
//! let mut cleaned = Vec::new();
//! let dedup = deduplicate(sam.as_bytes(), &mut cleaned).unwrap();
//! assert_eq!(dedup.duplicate_headers, 1);
//!
//! let (table, summary) = aggregate(cleaned.as_slice()).unwrap();
//! assert_eq!(table.get(30), Some(1));
//! assert_eq!(summary.unmapped, 1);
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::validation::ValidationError;

pub mod aggregate;
pub mod dedup;
pub mod pipeline;

pub use aggregate::{aggregate, AggregateSummary, QualityAggregator};
pub use dedup::{deduplicate, DedupSummary, HeaderDeduplicator};
pub use pipeline::{summarize, RunReport, SummarizeOptions};

/// Fatal errors of a summarization run
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ProcessError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
