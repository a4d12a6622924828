//! Plot WebGL perf JSON results.
//!
//! Scans a result directory, aggregates per-(scenario, browser,
//! dataset) statistics, and writes comparison charts. Fatal input
//! problems exit non-zero with a descriptive message.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use perf_report::report::{render_all, ReportOptions};
use perf_report::style::DEFAULT_SUBTITLE;

#[derive(Parser, Debug)]
#[command(name = "perf-plot")]
#[command(version, about = "Plot ProtSpace WebGL perf JSON results")]
struct Args {
    /// Directory scanned for result JSON files
    #[arg(long, default_value = "test-results")]
    input: PathBuf,

    /// Directory the charts are written to
    #[arg(long, default_value = "plots")]
    output: PathBuf,

    /// Machine description shown under chart titles
    #[arg(long, default_value = DEFAULT_SUBTITLE)]
    subtitle: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    std::fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.output.display()
        )
    })?;

    let agg = perf_report::ingest(&args.input)?;
    let options = ReportOptions {
        subtitle: args.subtitle,
    };
    let written = render_all(&agg, &args.output, &options)?;
    tracing::info!(charts = written.len(), "report complete");

    let resolved = std::fs::canonicalize(&args.output).unwrap_or(args.output);
    println!("Wrote plots to: {}", resolved.display());
    Ok(())
}
