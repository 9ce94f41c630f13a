use std::io::{BufRead, Write};

use serde::Serialize;

use crate::core::header::HeaderSet;
use crate::core::types::{strip_newline, LineKind};

/// Counts from one deduplication pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DedupSummary {
    /// Header lines read, duplicates included
    pub headers_read: usize,
    /// Header lines written
    pub unique_headers: usize,
    /// Header lines dropped as exact duplicates
    pub duplicate_headers: usize,
    /// Non-header lines written
    pub body_lines: usize,
}

/// Removes duplicate header lines from a SAM stream while keeping order.
///
/// Headers are kept in first-occurrence order and written as one block,
/// followed by every non-header line in its original order. Non-header lines
/// are never deduplicated or altered. The body is buffered in memory until the
/// whole input has been read, since headers must be written first.
///
/// Lines are split on `\n`; the terminator is not part of a line's identity
/// and every written line ends with `\n`.
#[derive(Debug, Default)]
pub struct HeaderDeduplicator {
    headers: HeaderSet,
    body: Vec<Vec<u8>>,
    headers_read: usize,
}

impl HeaderDeduplicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one line, without its terminator
    pub fn push_line(&mut self, line: &[u8]) {
        if LineKind::classify(line).is_header() {
            self.headers_read += 1;
            self.headers.insert(line);
        } else {
            self.body.push(line.to_vec());
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
            self.push_line(strip_newline(&buf));
        }
        Ok(())
    }

    /// Write the header block followed by the body.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in self.headers.iter().chain(self.body.iter().map(Vec::as_slice)) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    #[must_use]
    pub fn summary(&self) -> DedupSummary {
        DedupSummary {
            headers_read: self.headers_read,
            unique_headers: self.headers.len(),
            duplicate_headers: self.headers.duplicates(),
            body_lines: self.body.len(),
        }
    }
}

/// Deduplicate headers from `reader` and write the cleaned stream to `writer`.
///
/// # Errors
///
/// Returns the underlying I/O error if reading or writing fails.
pub fn deduplicate<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> std::io::Result<DedupSummary> {
    let mut dedup = HeaderDeduplicator::new();
    dedup.read_from(reader)?;
    dedup.write_to(writer)?;
    Ok(dedup.summary())
}
