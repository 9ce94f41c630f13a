use serde::{Deserialize, Serialize};

/// Leading byte that marks a SAM header line
pub const HEADER_SENTINEL: u8 = b'@';

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Starts with `@`; opaque metadata
    Header,
    /// Anything else; expected to be an alignment record
    Alignment,
}

impl LineKind {
    /// Classify a line by its first byte.
    ///
    /// This is a purely syntactic test: no further validation of header
    /// structure is performed. An empty line is an alignment line.
    #[must_use]
    pub fn classify(line: &[u8]) -> Self {
        if line.first() == Some(&HEADER_SENTINEL) {
            LineKind::Header
        } else {
            LineKind::Alignment
        }
    }

    #[must_use]
    pub fn is_header(self) -> bool {
        matches!(self, LineKind::Header)
    }
}

/// Strip one trailing `\n` from a raw line, if present.
///
/// A `\r` preceding the newline is left in place; line bytes are never
/// rewritten beyond the terminator.
#[must_use]
pub fn strip_newline(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}
