use std::collections::HashSet;

/// An ordered set of unique SAM header lines.
///
/// Lines are compared byte-for-byte (sentinel and trailing content included);
/// no whitespace or tag-order normalization is applied. The first occurrence
/// of each line fixes its position.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    /// Unique lines in first-occurrence order, without line terminators
    lines: Vec<Vec<u8>>,

    /// Lookup for lines already kept
    seen: HashSet<Vec<u8>>,

    /// Number of lines offered that were already present
    duplicates: usize,
}

impl HeaderSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a header line. Returns `true` if it was new and has been kept.
    pub fn insert(&mut self, line: &[u8]) -> bool {
        if self.seen.contains(line) {
            self.duplicates += 1;
            return false;
        }

        self.seen.insert(line.to_vec());
        self.lines.push(line.to_vec());
        true
    }

    #[must_use]
    pub fn contains(&self, line: &[u8]) -> bool {
        self.seen.contains(line)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of duplicate lines that were dropped
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Iterate over the unique lines in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }
}
