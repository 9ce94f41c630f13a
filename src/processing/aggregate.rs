use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::core::histogram::{CumulativeTable, FrequencyTable};
use crate::core::record::AlignmentRecord;
use crate::core::types::{strip_newline, LineKind};
use crate::parsing::sam::parse_alignment_line;

/// Counts from one aggregation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    /// Non-header, non-blank lines seen
    pub alignment_lines: u64,
    /// Records counted in the histogram
    pub mapped: u64,
    /// Records excluded by the unmapped flag
    pub unmapped: u64,
    /// Lines skipped because FLAG or MAPQ could not be parsed
    pub malformed: u64,
}

/// Builds a MAPQ histogram over the mapped records of a SAM stream.
///
/// Header lines and blank lines are ignored. A line whose FLAG or MAPQ cannot
/// be parsed is skipped and counted in [`AggregateSummary::malformed`]; it
/// never aborts the pass.
#[derive(Debug, Default)]
pub struct QualityAggregator {
    frequencies: FrequencyTable,
    summary: AggregateSummary,
    line_number: u64,
}

impl QualityAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parsed record
    pub fn observe(&mut self, record: &AlignmentRecord) {
        match record.mapped_quality() {
            Some(mapq) => {
                self.summary.mapped += 1;
                self.frequencies.increment(mapq);
            }
            None => self.summary.unmapped += 1,
        }
    }

    /// Add one raw line, with or without its terminator
    pub fn observe_line(&mut self, line: &[u8]) {
        self.line_number += 1;

        let line = strip_newline(line);
        if LineKind::classify(line).is_header() || line.iter().all(u8::is_ascii_whitespace) {
            return;
        }

        self.summary.alignment_lines += 1;

        match parse_alignment_line(line) {
            Ok(record) => self.observe(&record),
            Err(e) => {
                self.summary.malformed += 1;
                debug!(line = self.line_number, error = %e, "Skipping malformed alignment record");
            }
        }
    }

    /// Consume every line of `reader`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            self.observe_line(&buf);
        }
        Ok(())
    }

    #[must_use]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    #[must_use]
    pub fn summary(&self) -> AggregateSummary {
        self.summary
    }

    /// Fold the histogram into the cumulative distribution
    #[must_use]
    pub fn finish(self) -> (CumulativeTable, AggregateSummary) {
        (self.frequencies.to_cumulative(), self.summary)
    }
}

/// Compute the cumulative MAPQ distribution of a SAM stream.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub fn aggregate<R: BufRead>(reader: R) -> std::io::Result<(CumulativeTable, AggregateSummary)> {
    let mut aggregator = QualityAggregator::new();
    aggregator.read_from(reader)?;
    Ok(aggregator.finish())
}
