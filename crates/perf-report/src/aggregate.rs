//! One-pass ingestion and aggregation
//!
//! Walks the input tree for result files, normalizes every payload,
//! and accumulates per-key statistics plus the per-dataset maximum
//! rendered-point count. Files are processed in sorted path order so
//! that the last-write-wins overwrite for a duplicate key is
//! deterministic and reproducible. The table is mutated only here and
//! read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::ReportError;
use crate::payload::dataset_payloads;
use crate::resolver::{self, is_result_file};
use crate::stats::Stat;

/// Identity of one aggregated statistic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatKey {
    pub scenario: String,
    pub browser: String,
    pub dataset: String,
}

/// Everything produced by one ingestion pass. Immutable once built;
/// the whole model is recomputed on every run.
#[derive(Debug, Default)]
pub struct Aggregation {
    /// At most one statistic per key; a later file overwrites an
    /// earlier one for the same key (overwrite, never merge).
    pub records: BTreeMap<StatKey, Stat>,
    pub datasets: BTreeSet<String>,
    pub browsers: BTreeSet<String>,
    pub scenarios: BTreeSet<String>,
    /// Maximum renderedPoints seen per dataset. Feeds the scatter
    /// x-axis and the size-based sort, never the statistics.
    pub dataset_points: BTreeMap<String, u64>,
}

impl Aggregation {
    /// Look up the statistic for one (scenario, browser, dataset) key.
    pub fn stat(&self, scenario: &str, browser: &str, dataset: &str) -> Option<&Stat> {
        self.records.get(&StatKey {
            scenario: scenario.to_string(),
            browser: browser.to_string(),
            dataset: dataset.to_string(),
        })
    }
}

/// Collect result files under `input_dir`, recursively, deduplicated
/// and in sorted path order.
///
/// # Errors
///
/// Fails when no result file exists anywhere under the root; the
/// message names the resolved absolute path.
pub fn collect_result_files(input_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if is_result_file(&name) {
            files.insert(entry.into_path());
        }
    }

    if files.is_empty() {
        let resolved = fs::canonicalize(input_dir).unwrap_or_else(|_| input_dir.to_path_buf());
        return Err(ReportError::NoInputFiles(resolved));
    }

    Ok(files.into_iter().collect())
}

/// Run the full ingestion pass over every result file under
/// `input_dir`.
///
/// # Errors
///
/// Fails fast on the first malformed filename, on an unreadable file,
/// or when no result files exist. Unparseable or non-mapping JSON
/// documents are skipped with a warning, not fatal.
pub fn ingest(input_dir: &Path) -> Result<Aggregation, ReportError> {
    let files = collect_result_files(input_dir)?;
    debug!(count = files.len(), "found result files");

    let mut agg = Aggregation::default();
    for path in &files {
        let (dataset_from_name, browser) = resolver::parse_dataset_and_browser(path)?;
        agg.browsers.insert(browser.clone());

        let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.clone(),
            source,
        })?;
        let root: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unparseable result file");
                continue;
            }
        };

        for payload in dataset_payloads(root) {
            let dataset = resolver::dataset_identity(
                payload.dataset_id.as_deref(),
                dataset_from_name.as_deref(),
            );
            agg.datasets.insert(dataset.clone());

            for scenario in &payload.scenarios {
                let Some(name) = scenario.name.as_deref() else {
                    continue;
                };
                agg.scenarios.insert(name.to_string());

                for pass in &scenario.passes {
                    if let Some(points) = pass.rendered_points {
                        let entry = agg.dataset_points.entry(dataset.clone()).or_insert(0);
                        *entry = (*entry).max(points);
                    }
                }

                let durations: Vec<f64> = scenario
                    .passes
                    .iter()
                    .filter_map(|pass| pass.duration_ms)
                    .collect();
                agg.records.insert(
                    StatKey {
                        scenario: name.to_string(),
                        browser: browser.clone(),
                        dataset: dataset.clone(),
                    },
                    Stat::from_samples(&durations),
                );
            }
        }
    }

    Ok(agg)
}
