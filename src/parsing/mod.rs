//! Readers and writers for the text formats the tool consumes and produces.
//!
//! - **SAM text** ([`sam`]): open plain or gzip-compressed input and pull the
//!   FLAG and MAPQ columns out of alignment lines
//! - **Summary TSV** ([`tsv`]): write and read the cumulative MAPQ table
//!
//! ## Required SAM Columns
//!
//! | Column | Field | Use |
//! |--------|-------|-----|
//! | 2      | FLAG  | Bit `0x4` marks the record unmapped |
//! | 5      | MAPQ  | Aggregated for mapped records |
//!
//! All other columns are ignored.

pub mod sam;
pub mod tsv;
