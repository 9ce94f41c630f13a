//! Core data types for MAPQ summarization.
//!
//! - [`LineKind`]: header vs. alignment classification of an input line
//! - [`HeaderSet`]: ordered, duplicate-free collection of header lines
//! - [`AlignmentRecord`]: the flags and mapping quality of one alignment
//! - [`FrequencyTable`], [`CumulativeTable`]: MAPQ histograms
//!
//! ## Line Classification
//!
//! | First byte | Kind | Treatment |
//! |------------|------|-----------|
//! | `@`        | Header | Deduplicated by exact byte equality |
//! | other      | Alignment | Passed through; parsed for FLAG and MAPQ |

pub mod header;
pub mod histogram;
pub mod record;
pub mod types;

pub use header::HeaderSet;
pub use histogram::{CumulativeRow, CumulativeTable, FrequencyTable};
pub use record::AlignmentRecord;
pub use types::LineKind;
