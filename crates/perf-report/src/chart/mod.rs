//! Chart emitter boundary
//!
//! The aggregation feeds two chart shapes per scenario: a grouped
//! error-bar bar chart across (dataset × browser), and, when dataset
//! size estimates exist, a size-vs-mean scatter with a linear fit per
//! browser. The builders here produce plain data; rendering lives in
//! the `bars` and `scatter` submodules.

mod bars;
mod scatter;

pub use bars::render_bar_chart;
pub use scatter::render_scatter_chart;

use std::collections::BTreeMap;

use crate::aggregate::Aggregation;

/// Grouped bar chart for one scenario: per browser, a (mean, ci) pair
/// aligned to the dataset order. Missing keys are NaN and render as
/// empty slots.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub scenario: String,
    pub datasets: Vec<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone)]
pub struct BarSeries {
    pub browser: String,
    /// (mean, ci half-width) per dataset, parallel to
    /// `BarChart::datasets`.
    pub bars: Vec<(f64, f64)>,
}

/// Size-vs-time scatter for one scenario.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    pub scenario: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone)]
pub struct ScatterSeries {
    pub browser: String,
    /// Points sorted by size ascending.
    pub points: Vec<ScatterPoint>,
    /// Least-squares fit over the points, when at least two exist.
    pub fit: Option<LinearFit>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScatterPoint {
    pub size: f64,
    pub mean_ms: f64,
    pub ci95_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Build the bar chart data for one scenario from the aggregation and
/// the two display orders.
pub fn bar_chart(
    agg: &Aggregation,
    scenario: &str,
    browsers: &[String],
    datasets: &[String],
) -> BarChart {
    let series = browsers
        .iter()
        .map(|browser| {
            let bars = datasets
                .iter()
                .map(|dataset| match agg.stat(scenario, browser, dataset) {
                    Some(stat) => (stat.mean_ms, stat.ci95_ms),
                    None => (f64::NAN, f64::NAN),
                })
                .collect();
            BarSeries {
                browser: browser.clone(),
                bars,
            }
        })
        .collect();
    BarChart {
        scenario: scenario.to_string(),
        datasets: datasets.to_vec(),
        series,
    }
}

/// Build the scatter chart data for one scenario. A (browser, dataset)
/// cell contributes a point only when both a size estimate and a
/// finite mean exist.
pub fn scatter_chart(
    agg: &Aggregation,
    scenario: &str,
    browsers: &[String],
    datasets: &[String],
    dataset_points: &BTreeMap<String, u64>,
) -> ScatterChart {
    let series = browsers
        .iter()
        .map(|browser| {
            let mut points: Vec<ScatterPoint> = datasets
                .iter()
                .filter_map(|dataset| {
                    let size = *dataset_points.get(dataset)? as f64;
                    let stat = agg.stat(scenario, browser, dataset)?;
                    if !stat.mean_ms.is_finite() {
                        return None;
                    }
                    Some(ScatterPoint {
                        size,
                        mean_ms: stat.mean_ms,
                        ci95_ms: stat.ci95_ms,
                    })
                })
                .collect();
            points.sort_by(|a, b| {
                a.size
                    .partial_cmp(&b.size)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let fit = linear_fit(
                &points
                    .iter()
                    .map(|p| (p.size, p.mean_ms))
                    .collect::<Vec<_>>(),
            );
            ScatterSeries {
                browser: browser.clone(),
                points,
                fit,
            }
        })
        .collect();
    ScatterChart {
        scenario: scenario.to_string(),
        series,
    }
}

/// Least-squares line through `(x, y)` points. `None` for fewer than
/// two points or a degenerate (all-same-x) input.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let sx: f64 = points.iter().map(|(x, _)| x).sum();
    let sy: f64 = points.iter().map(|(_, y)| y).sum();
    let sxx: f64 = points.iter().map(|(x, _)| x * x).sum();
    let sxy: f64 = points.iter().map(|(x, y)| x * y).sum();

    let denom = n * sxx - sx * sx;
    if denom == 0.0 {
        return None;
    }
    let slope = (n * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n;
    Some(LinearFit { slope, intercept })
}

/// Sanitize a scenario name for use in an output filename: anything
/// outside `[A-Za-z0-9_-]` becomes `_`.
pub fn safe_chart_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{Aggregation, StatKey};
    use crate::stats::Stat;

    fn sample_aggregation() -> Aggregation {
        let mut agg = Aggregation::default();
        for (scenario, browser, dataset, samples) in [
            ("zoomInOut", "chrome", "5K", vec![10.0, 20.0]),
            ("zoomInOut", "chrome", "40K", vec![40.0, 60.0]),
            ("zoomInOut", "firefox", "5K", vec![12.0]),
        ] {
            agg.records.insert(
                StatKey {
                    scenario: scenario.to_string(),
                    browser: browser.to_string(),
                    dataset: dataset.to_string(),
                },
                Stat::from_samples(&samples),
            );
        }
        agg.dataset_points.insert("5K".to_string(), 5000);
        agg.dataset_points.insert("40K".to_string(), 40000);
        agg
    }

    #[test]
    fn test_bar_chart_aligns_to_dataset_order() {
        let agg = sample_aggregation();
        let browsers = vec!["chrome".to_string(), "firefox".to_string()];
        let datasets = vec!["5K".to_string(), "40K".to_string()];
        let chart = bar_chart(&agg, "zoomInOut", &browsers, &datasets);

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].bars[0].0, 15.0);
        assert_eq!(chart.series[0].bars[1].0, 50.0);
        // firefox has no 40K entry: NaN placeholder keeps alignment.
        assert_eq!(chart.series[1].bars[0].0, 12.0);
        assert!(chart.series[1].bars[1].0.is_nan());
    }

    #[test]
    fn test_scatter_points_sorted_by_size() {
        let agg = sample_aggregation();
        let browsers = vec!["chrome".to_string()];
        let datasets = vec!["40K".to_string(), "5K".to_string()];
        let chart = scatter_chart(&agg, "zoomInOut", &browsers, &datasets, &agg.dataset_points);

        let sizes: Vec<f64> = chart.series[0].points.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![5000.0, 40000.0]);
        assert!(chart.series[0].fit.is_some());
    }

    #[test]
    fn test_scatter_single_point_has_no_fit() {
        let agg = sample_aggregation();
        let browsers = vec!["firefox".to_string()];
        let datasets = vec!["5K".to_string(), "40K".to_string()];
        let chart = scatter_chart(&agg, "zoomInOut", &browsers, &datasets, &agg.dataset_points);

        assert_eq!(chart.series[0].points.len(), 1);
        assert!(chart.series[0].fit.is_none());
    }

    #[test]
    fn test_linear_fit_through_two_points() {
        let fit = linear_fit(&[(0.0, 1.0), (2.0, 5.0)]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.y_at(0.0) - 1.0).abs() < 1e-12);
        assert!((fit.y_at(2.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_fit_degenerate_inputs() {
        assert!(linear_fit(&[]).is_none());
        assert!(linear_fit(&[(1.0, 1.0)]).is_none());
        assert!(linear_fit(&[(1.0, 1.0), (1.0, 2.0)]).is_none());
    }

    #[test]
    fn test_safe_chart_name() {
        assert_eq!(safe_chart_name("zoomInOut"), "zoomInOut");
        assert_eq!(safe_chart_name("a/b c"), "a_b_c");
        assert_eq!(safe_chart_name("x-y_z9"), "x-y_z9");
    }
}
