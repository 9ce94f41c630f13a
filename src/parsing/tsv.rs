use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::core::histogram::{CumulativeRow, CumulativeTable};

/// Header row of the cumulative MAPQ summary
pub const SUMMARY_HEADER: &str = "MAPQ\tCumulative_Count";

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing or invalid header row: expected 'MAPQ<TAB>Cumulative_Count'")]
    InvalidHeader,

    #[error("Line {line} has {found} fields, expected 2")]
    FieldCount { line: usize, found: usize },

    #[error("Invalid {column} on line {line}: '{value}'")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Duplicate MAPQ {mapq} on line {line}")]
    DuplicateMapq { line: usize, mapq: u64 },
}

/// Write a cumulative table as TSV: the header row followed by one
/// `<mapq>\t<cumulative_count>` row per MAPQ, ascending.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_summary<W: Write>(writer: &mut W, table: &CumulativeTable) -> std::io::Result<()> {
    writeln!(writer, "{SUMMARY_HEADER}")?;
    for row in table.rows() {
        writeln!(writer, "{}\t{}", row.mapq, row.cumulative_count)?;
    }
    Ok(())
}

/// Parse a summary file written by [`write_summary`].
///
/// # Errors
///
/// Returns `SummaryError::Io` if the file cannot be read, or any of the
/// format errors described on [`parse_summary_text`].
pub fn parse_summary_file(path: &Path) -> Result<CumulativeTable, SummaryError> {
    let content = std::fs::read_to_string(path)?;
    parse_summary_text(&content)
}

/// Parse summary TSV text.
///
/// # Errors
///
/// Returns `SummaryError::InvalidHeader` if the first line is not the summary
/// header, `SummaryError::FieldCount` if a row does not have two fields,
/// `SummaryError::InvalidValue` if a field is not a non-negative integer, or
/// `SummaryError::DuplicateMapq` if a MAPQ appears twice.
pub fn parse_summary_text(text: &str) -> Result<CumulativeTable, SummaryError> {
    let mut lines = text.lines();

    if lines.next().map(str::trim_end) != Some(SUMMARY_HEADER) {
        return Err(SummaryError::InvalidHeader);
    }

    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    for (i, line) in lines.enumerate() {
        // Line numbers in errors are 1-based and count the header row
        let line_num = i + 2;

        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(SummaryError::FieldCount {
                line: line_num,
                found: fields.len(),
            });
        }

        let mapq: u64 = fields[0].parse().map_err(|_| SummaryError::InvalidValue {
            line: line_num,
            column: "MAPQ",
            value: fields[0].to_string(),
        })?;
        let cumulative_count: u64 =
            fields[1].parse().map_err(|_| SummaryError::InvalidValue {
                line: line_num,
                column: "Cumulative_Count",
                value: fields[1].to_string(),
            })?;

        if !seen.insert(mapq) {
            return Err(SummaryError::DuplicateMapq {
                line: line_num,
                mapq,
            });
        }

        rows.push(CumulativeRow {
            mapq,
            cumulative_count,
        });
    }

    Ok(CumulativeTable::from_rows(rows))
}
