//! Filename and dataset identity resolution
//!
//! Result files have gone through several naming generations:
//!
//! - `webgl-perf-<dataset>-<browser>.json` — one dataset, one browser
//! - `webgl-perf-suite-<browser>.json` — whole-suite run, datasets in
//!   the payload
//! - `protspace-webgl-perf-suite-*.json` — oldest aggregate form, no
//!   browser in the name
//!
//! The resolver accepts all of them without misclassifying a
//! suite-level aggregate as a dataset-specific run. Anything else is a
//! fatal error: a result file with ambiguous provenance must not be
//! silently guessed at.

use std::path::Path;

use crate::error::ReportError;

const SUITE_AGGREGATE_PREFIX: &str = "protspace-webgl-perf-suite-";
const RESULT_PREFIX: &str = "webgl-perf-";
const RESULT_SUFFIX: &str = ".json";
const SUITE_STEM_PREFIX: &str = "suite-";

/// Identity used when neither filename nor payload names a value.
pub const UNKNOWN: &str = "unknown";

/// Returns true if the file name matches one of the result-file
/// naming conventions the scanner picks up.
pub fn is_result_file(name: &str) -> bool {
    name.ends_with(RESULT_SUFFIX)
        && (name.starts_with(RESULT_PREFIX) || name.starts_with(SUITE_AGGREGATE_PREFIX))
}

/// Derive `(dataset, browser)` from a result file path.
///
/// The dataset is absent for suite-level files; it must then come from
/// the payload. The browser is `"unknown"` only for the oldest
/// aggregate form.
///
/// # Errors
///
/// Returns an error if the name matches none of the known naming
/// conventions, or if a recognized name cannot be decomposed into a
/// non-empty dataset/browser pair.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use perf_report::resolver::parse_dataset_and_browser;
///
/// let (dataset, browser) =
///     parse_dataset_and_browser(Path::new("webgl-perf-40K-chrome.json")).unwrap();
/// assert_eq!(dataset.as_deref(), Some("40K"));
/// assert_eq!(browser, "chrome");
/// ```
pub fn parse_dataset_and_browser(path: &Path) -> Result<(Option<String>, String), ReportError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if name.starts_with(SUITE_AGGREGATE_PREFIX) && name.ends_with(RESULT_SUFFIX) {
        return Ok((None, UNKNOWN.to_string()));
    }

    if !(name.starts_with(RESULT_PREFIX) && name.ends_with(RESULT_SUFFIX)) {
        return Err(ReportError::UnrecognizedFilename(name.to_string()));
    }

    let stem = &name[RESULT_PREFIX.len()..name.len() - RESULT_SUFFIX.len()];

    if let Some(browser) = stem.strip_prefix(SUITE_STEM_PREFIX) {
        if browser.is_empty() {
            return Err(ReportError::MissingBrowser(name.to_string()));
        }
        return Ok((None, browser.to_string()));
    }

    match stem.rsplit_once('-') {
        Some((dataset, browser)) if !dataset.is_empty() && !browser.is_empty() => {
            Ok((Some(dataset.to_string()), browser.to_string()))
        }
        _ => Err(ReportError::MalformedFilename(name.to_string())),
    }
}

/// Resolve the effective dataset identity for one payload.
///
/// Candidates are tried in precedence order: the payload-embedded
/// `dataset.id` first, then the dataset derived from the filename,
/// then the literal `"unknown"`. Empty strings never win.
pub fn dataset_identity(payload_id: Option<&str>, filename_dataset: Option<&str>) -> String {
    let candidates = [payload_id, filename_dataset];
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(name: &str) -> Result<(Option<String>, String), ReportError> {
        parse_dataset_and_browser(Path::new(name))
    }

    #[test]
    fn test_dataset_and_browser_from_name() {
        let (dataset, browser) = parse("webgl-perf-40K-chrome.json").unwrap();
        assert_eq!(dataset.as_deref(), Some("40K"));
        assert_eq!(browser, "chrome");
    }

    #[test]
    fn test_suite_filename_has_no_dataset() {
        let (dataset, browser) = parse("webgl-perf-suite-firefox.json").unwrap();
        assert_eq!(dataset, None);
        assert_eq!(browser, "firefox");
    }

    #[test]
    fn test_legacy_aggregate_has_unknown_browser() {
        let (dataset, browser) = parse("protspace-webgl-perf-suite-2024.json").unwrap();
        assert_eq!(dataset, None);
        assert_eq!(browser, "unknown");
    }

    #[test]
    fn test_multi_part_dataset_splits_on_last_dash() {
        let (dataset, browser) = parse("webgl-perf-beta_lactamase_ec-safari.json").unwrap();
        assert_eq!(dataset.as_deref(), Some("beta_lactamase_ec"));
        assert_eq!(browser, "safari");
    }

    #[test]
    fn test_browserless_stem_is_fatal() {
        let err = parse("webgl-perf-bogus.json").unwrap_err();
        assert!(matches!(err, ReportError::MalformedFilename(_)));
    }

    #[test]
    fn test_empty_suite_browser_is_fatal() {
        let err = parse("webgl-perf-suite-.json").unwrap_err();
        assert!(matches!(err, ReportError::MissingBrowser(_)));
    }

    #[test]
    fn test_foreign_filename_is_fatal() {
        let err = parse("notes.json").unwrap_err();
        assert!(matches!(err, ReportError::UnrecognizedFilename(_)));
    }

    #[test]
    fn test_is_result_file() {
        assert!(is_result_file("webgl-perf-5K-chrome.json"));
        assert!(is_result_file("protspace-webgl-perf-suite-old.json"));
        assert!(!is_result_file("webgl-perf-5K-chrome.json.bak"));
        assert!(!is_result_file("readme.md"));
    }

    #[test]
    fn test_dataset_identity_precedence() {
        assert_eq!(dataset_identity(Some("5K"), Some("40K")), "5K");
        assert_eq!(dataset_identity(None, Some("40K")), "40K");
        assert_eq!(dataset_identity(Some(""), Some("40K")), "40K");
        assert_eq!(dataset_identity(None, None), "unknown");
        assert_eq!(dataset_identity(Some(""), None), "unknown");
    }
}
