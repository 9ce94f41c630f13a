use noodles::sam::alignment::record::Flags;

/// The fields of a SAM alignment record needed for MAPQ aggregation.
///
/// Only the flags and the mapping quality are kept; every other column of the
/// line is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentRecord {
    /// SAM bitwise flags (column 2)
    pub flags: Flags,

    /// Mapping quality (column 5). Any non-negative integer that fits in a
    /// `u64` is accepted; values above 255 are kept as-is.
    pub mapping_quality: u64,
}

impl AlignmentRecord {
    #[must_use]
    pub fn new(flags: Flags, mapping_quality: u64) -> Self {
        Self {
            flags,
            mapping_quality,
        }
    }

    #[must_use]
    pub fn is_unmapped(&self) -> bool {
        self.flags.is_unmapped()
    }

    /// The mapping quality if the record is mapped
    #[must_use]
    pub fn mapped_quality(&self) -> Option<u64> {
        if self.is_unmapped() {
            None
        } else {
            Some(self.mapping_quality)
        }
    }
}
