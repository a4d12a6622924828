use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions for a report run.
///
/// Recoverable input problems (non-mapping JSON roots, nameless
/// scenarios, non-numeric durations) never surface here; they are
/// absorbed during ingestion and at most logged.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unexpected filename: {0}")]
    UnrecognizedFilename(String),

    #[error("Cannot parse browser from suite filename: {0}")]
    MissingBrowser(String),

    #[error("Cannot parse dataset/browser from: {0}")]
    MalformedFilename(String),

    #[error("No perf JSON files found under {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render chart {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },
}
