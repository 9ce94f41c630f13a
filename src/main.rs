use clap::Parser;
use mapq_summary::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("mapq_summary=debug,info")
    } else {
        EnvFilter::new("mapq_summary=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::summarize::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}
