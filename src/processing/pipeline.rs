use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::histogram::CumulativeTable;
use crate::parsing::sam::open_input;
use crate::parsing::tsv::write_summary;
use crate::processing::aggregate::{AggregateSummary, QualityAggregator};
use crate::processing::dedup::{DedupSummary, HeaderDeduplicator};
use crate::processing::ProcessError;
use crate::utils::validation::{cleaned_output_path, parent_dir, validate_input_file};

/// Paths for one summarization run
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// SAM input (plain or gzip-compressed)
    pub input: PathBuf,

    /// Destination of the MAPQ summary TSV
    pub output: PathBuf,

    /// Where to write the deduplicated SAM; defaults to
    /// `aligned_output_unique.sam` next to the input
    pub cleaned: Option<PathBuf>,
}

impl SummarizeOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            cleaned: None,
        }
    }

    #[must_use]
    pub fn with_cleaned(mut self, cleaned: impl Into<PathBuf>) -> Self {
        self.cleaned = Some(cleaned.into());
        self
    }

    /// Resolved location of the deduplicated SAM
    #[must_use]
    pub fn cleaned_path(&self) -> PathBuf {
        self.cleaned
            .clone()
            .unwrap_or_else(|| cleaned_output_path(&self.input))
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub cleaned: PathBuf,
    pub output: PathBuf,
    pub dedup: DedupSummary,
    pub aggregate: AggregateSummary,
    pub cumulative: CumulativeTable,
}

/// Deduplicate headers, aggregate MAPQs over the cleaned SAM, and write the
/// cumulative summary.
///
/// The cleaned SAM is written to a uniquely named temporary file in its target
/// directory and renamed into place once complete.
///
/// # Errors
///
/// Returns `ProcessError::InvalidInput` before any processing if the input is
/// missing or not a regular file, or `ProcessError::Io` if reading the input or
/// writing the cleaned SAM or summary fails.
pub fn summarize(options: &SummarizeOptions) -> Result<RunReport, ProcessError> {
    validate_input_file(&options.input)?;

    let cleaned = options.cleaned_path();

    info!(input = %options.input.display(), "Processing SAM file");
    let dedup = write_cleaned(&options.input, &cleaned)?;
    debug!(
        headers_read = dedup.headers_read,
        duplicates = dedup.duplicate_headers,
        body_lines = dedup.body_lines,
        "Removed duplicate headers"
    );

    let (cumulative, aggregate) = aggregate_file(&cleaned)?;
    info!(
        mapped = aggregate.mapped,
        unmapped = aggregate.unmapped,
        malformed = aggregate.malformed,
        distinct_mapq = cumulative.len(),
        "Computed cumulative MAPQ distribution"
    );

    write_summary_file(&options.output, &cumulative)?;
    info!(cleaned = %cleaned.display(), output = %options.output.display(), "Wrote outputs");

    Ok(RunReport {
        input: options.input.clone(),
        cleaned,
        output: options.output.clone(),
        dedup,
        aggregate,
        cumulative,
    })
}

/// Deduplicate `input` into `cleaned` via a sibling temp file
fn write_cleaned(input: &Path, cleaned: &Path) -> Result<DedupSummary, ProcessError> {
    let mut dedup = HeaderDeduplicator::new();
    let reader = open_input(input).map_err(|e| ProcessError::io(input, e))?;
    dedup
        .read_from(reader)
        .map_err(|e| ProcessError::io(input, e))?;

    let mut temp = tempfile::Builder::new()
        .prefix(".aligned_output_unique.")
        .suffix(".tmp")
        .tempfile_in(parent_dir(cleaned))
        .map_err(|e| ProcessError::io(cleaned, e))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        dedup
            .write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| ProcessError::io(cleaned, e))?;
    }

    temp.persist(cleaned)
        .map_err(|e| ProcessError::io(cleaned, e.error))?;

    Ok(dedup.summary())
}

fn aggregate_file(cleaned: &Path) -> Result<(CumulativeTable, AggregateSummary), ProcessError> {
    let file = File::open(cleaned).map_err(|e| ProcessError::io(cleaned, e))?;

    let mut aggregator = QualityAggregator::new();
    aggregator
        .read_from(BufReader::new(file))
        .map_err(|e| ProcessError::io(cleaned, e))?;

    Ok(aggregator.finish())
}

fn write_summary_file(output: &Path, table: &CumulativeTable) -> Result<(), ProcessError> {
    let file = File::create(output).map_err(|e| ProcessError::io(output, e))?;
    let mut writer = BufWriter::new(file);
    write_summary(&mut writer, table)
        .and_then(|()| writer.flush())
        .map_err(|e| ProcessError::io(output, e))
}
