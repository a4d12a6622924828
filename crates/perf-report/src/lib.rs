//! Benchmark result aggregation and chart generation
//!
//! This crate ingests the heterogeneous JSON result files produced by
//! the browser WebGL rendering test suite, normalizes them into one
//! statistical table keyed by (scenario, browser, dataset), and emits
//! comparison charts.
//!
//! # Pipeline
//!
//! 1. [`resolver`] — derives a (dataset, browser) identity from each
//!    file name, tolerating every historical naming generation.
//! 2. [`payload`] — normalizes arbitrarily-shaped JSON roots into a
//!    uniform sequence of per-dataset result records.
//! 3. [`aggregate`] — one pass over the files in sorted order,
//!    accumulating duration samples per key and the per-dataset
//!    maximum rendered-point count.
//! 4. [`stats`] — mean and 95% confidence half-width per sample.
//! 5. [`order`] — deterministic display orders for browsers,
//!    datasets, and scenarios.
//! 6. [`chart`] / [`report`] — grouped error-bar bar charts and
//!    size-vs-time scatter plots, written as SVG.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use perf_report::{ingest, report::{render_all, ReportOptions}};
//!
//! # fn example() -> Result<(), perf_report::ReportError> {
//! let agg = ingest(Path::new("test-results"))?;
//! let written = render_all(&agg, Path::new("plots"), &ReportOptions::default())?;
//! println!("{} charts written", written.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod order;
pub mod payload;
pub mod report;
pub mod resolver;
pub mod stats;
pub mod style;

pub use aggregate::{ingest, Aggregation, StatKey};
pub use error::ReportError;
pub use stats::Stat;
