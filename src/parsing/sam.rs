use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::sam::alignment::record::Flags;
use thiserror::Error;

use crate::core::record::AlignmentRecord;
use crate::core::types::strip_newline;

/// 1-based SAM column holding the bitwise flags
pub const FLAG_COLUMN: usize = 2;

/// 1-based SAM column holding the mapping quality
pub const MAPQ_COLUMN: usize = 5;

/// Reasons an alignment line cannot yield the fields needed for aggregation.
///
/// These are per-record and non-fatal: callers skip the record and continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing {field} field (column {column})")]
    MissingField { field: &'static str, column: usize },

    #[error("Invalid FLAG value: '{0}'")]
    InvalidFlags(String),

    #[error("Invalid MAPQ value: '{0}'")]
    InvalidMappingQuality(String),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a SAM text file for line-by-line reading.
///
/// Files ending in `.gz` or `.bgz` are decoded as (multi-member) gzip, which
/// also covers BGZF-compressed text.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened.
pub fn open_input(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse the FLAG and MAPQ columns from one alignment line.
///
/// Only these two fields are mandatory. Remaining columns, including optional
/// auxiliary tags, are not inspected, so unusual or unsupported tags never
/// cause a record to be rejected. A trailing `\n` or `\r\n` is ignored, but
/// fields are otherwise taken verbatim: surrounding whitespace makes FLAG or
/// MAPQ invalid.
///
/// # Errors
///
/// Returns `ParseError::MissingField` if the line has fewer than five columns,
/// `ParseError::InvalidFlags` if FLAG is not an unsigned 16-bit integer, or
/// `ParseError::InvalidMappingQuality` if MAPQ is not an unsigned 64-bit
/// integer.
pub fn parse_alignment_line(line: &[u8]) -> Result<AlignmentRecord, ParseError> {
    let line = strip_newline(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let mut fields = line.split(|&b| b == b'\t');

    // QNAME
    fields.next();

    let flags_raw = fields.next().ok_or(ParseError::MissingField {
        field: "FLAG",
        column: FLAG_COLUMN,
    })?;

    // RNAME, POS
    fields.next();
    fields.next();

    let mapq_raw = fields.next().ok_or(ParseError::MissingField {
        field: "MAPQ",
        column: MAPQ_COLUMN,
    })?;

    let flags = parse_flags(flags_raw)?;
    let mapping_quality = parse_mapping_quality(mapq_raw)?;

    Ok(AlignmentRecord::new(flags, mapping_quality))
}

fn parse_flags(raw: &[u8]) -> Result<Flags, ParseError> {
    let text = String::from_utf8_lossy(raw);
    text.parse::<u16>()
        .map(Flags::from)
        .map_err(|_| ParseError::InvalidFlags(text.into_owned()))
}

fn parse_mapping_quality(raw: &[u8]) -> Result<u64, ParseError> {
    let text = String::from_utf8_lossy(raw);
    text.parse::<u64>()
        .map_err(|_| ParseError::InvalidMappingQuality(text.into_owned()))
}
