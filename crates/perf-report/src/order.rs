//! Display orderings for browsers, datasets, and scenarios
//!
//! Each order is a pure function of (present set, canonical list,
//! optional size map), independent of any rendering concern. All
//! inputs are BTree collections, so the result is bit-identical across
//! runs regardless of filesystem or hash iteration order.

use std::collections::{BTreeMap, BTreeSet};

/// Browsers shown first, in this order, when present.
pub const BROWSER_ORDER: &[&str] = &["chrome", "firefox", "safari"];

/// Datasets shown first, in this order, when present (and no size
/// estimates exist to sort by instead).
pub const DATASET_ORDER: &[&str] = &[
    "5K",
    "40K",
    "beta_lactamase_ec",
    "beta_lactamase_pn",
    "phosphatase",
];

/// Scenarios shown first, in this order, when present.
pub const SCENARIO_ORDER: &[&str] = &["annotationChange", "zoomInOut", "dragCanvas", "clickPoint"];

/// Canonical names first (filtered to those present), then everything
/// else alphabetically.
pub fn canonical_then_alpha(present: &BTreeSet<String>, canonical: &[&str]) -> Vec<String> {
    let mut ordered: Vec<String> = canonical
        .iter()
        .filter(|name| present.contains(**name))
        .map(|name| name.to_string())
        .collect();
    // BTreeSet iterates in ascending order already.
    ordered.extend(
        present
            .iter()
            .filter(|name| !canonical.contains(&name.as_str()))
            .cloned(),
    );
    ordered
}

/// Dataset display order.
///
/// Starts from the canonical-then-alphabetical order; when at least
/// one size estimate exists, re-sorts by (estimated size ascending,
/// name ascending), with unsized datasets after all sized ones. With
/// no estimates at all the re-sort is skipped; the caller is expected
/// to surface that condition and omit size-based charts.
pub fn order_datasets(
    present: &BTreeSet<String>,
    canonical: &[&str],
    points: &BTreeMap<String, u64>,
) -> Vec<String> {
    let mut ordered = canonical_then_alpha(present, canonical);
    if !points.is_empty() {
        ordered.sort_by(|a, b| {
            size_key(points.get(a).copied())
                .cmp(&size_key(points.get(b).copied()))
                .then_with(|| a.cmp(b))
        });
    }
    ordered
}

// Missing sizes sort after every known size.
fn size_key(points: Option<u64>) -> (u8, u64) {
    match points {
        Some(value) => (0, value),
        None => (1, 0),
    }
}
