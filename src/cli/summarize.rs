use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::tsv::write_summary;
use crate::processing::{summarize, RunReport, SummarizeOptions};

#[derive(Args)]
pub struct SummarizeArgs {
    /// Input SAM file (plain text, or gzip-compressed with a .gz/.bgz suffix)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output MAPQ summary TSV
    #[arg(required = true)]
    pub output: PathBuf,

    /// Where to write the deduplicated SAM
    /// (default: aligned_output_unique.sam in the input's directory)
    #[arg(long)]
    pub cleaned: Option<PathBuf>,
}

/// Execute the summarization
///
/// # Errors
///
/// Returns an error if the input is missing or not a regular file, or if any
/// file cannot be read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummarizeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut options = SummarizeOptions::new(&args.input, &args.output);
    if let Some(cleaned) = &args.cleaned {
        options = options.with_cleaned(cleaned);
    }

    if matches!(format, OutputFormat::Text) {
        println!("Processing SAM file: {}", args.input.display());
    }

    let report = summarize(&options)?;

    if verbose {
        eprintln!(
            "Dropped {} duplicate header line(s); skipped {} malformed record(s)",
            report.dedup.duplicate_headers, report.aggregate.malformed
        );
    }

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report)?,
    }

    Ok(())
}

fn print_text_report(report: &RunReport) {
    println!(
        "  Headers: {} unique ({} duplicate removed)",
        report.dedup.unique_headers, report.dedup.duplicate_headers
    );
    println!(
        "  Records: {} mapped, {} unmapped, {} malformed",
        report.aggregate.mapped, report.aggregate.unmapped, report.aggregate.malformed
    );
    println!("Cleaned SAM saved to: {}", report.cleaned.display());
    println!("MAPQ summary saved to: {}", report.output.display());
}

fn print_json_report(report: &RunReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &RunReport) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_summary(&mut stdout.lock(), &report.cumulative)?;
    Ok(())
}
