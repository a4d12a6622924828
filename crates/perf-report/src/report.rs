//! Report generation: orders the aggregation and emits one bar chart
//! (and, when size estimates exist, one scatter chart) per scenario.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::aggregate::Aggregation;
use crate::chart::{
    bar_chart, render_bar_chart, render_scatter_chart, safe_chart_name, scatter_chart,
};
use crate::error::ReportError;
use crate::order::{canonical_then_alpha, order_datasets, BROWSER_ORDER, DATASET_ORDER, SCENARIO_ORDER};
use crate::style::DEFAULT_SUBTITLE;

/// Rendering options for a report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Machine description shown under chart titles.
    pub subtitle: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

/// Render all charts for an aggregation into `out_dir`.
///
/// Returns the paths written. When no size estimate exists anywhere,
/// scatter charts are skipped with a warning and only bar charts are
/// produced.
///
/// # Errors
///
/// Fails on the first chart that cannot be written.
pub fn render_all(
    agg: &Aggregation,
    out_dir: &Path,
    options: &ReportOptions,
) -> Result<Vec<PathBuf>, ReportError> {
    let browsers = canonical_then_alpha(&agg.browsers, BROWSER_ORDER);
    let datasets = order_datasets(&agg.datasets, DATASET_ORDER, &agg.dataset_points);
    let scenarios = canonical_then_alpha(&agg.scenarios, SCENARIO_ORDER);

    let with_scatter = !agg.dataset_points.is_empty();
    if !with_scatter {
        warn!("no renderedPoints found in any perf JSON; scatter plots will be skipped");
    }

    let mut written = Vec::new();
    for scenario in &scenarios {
        let safe_name = safe_chart_name(scenario);

        let bars = bar_chart(agg, scenario, &browsers, &datasets);
        let bar_path = out_dir.join(format!("{safe_name}.svg"));
        render_bar_chart(&bars, &options.subtitle, &bar_path)?;
        debug!(path = %bar_path.display(), "wrote bar chart");
        written.push(bar_path);

        if with_scatter {
            let scatter = scatter_chart(agg, scenario, &browsers, &datasets, &agg.dataset_points);
            let scatter_path = out_dir.join(format!("scatter-{safe_name}.svg"));
            render_scatter_chart(&scatter, &options.subtitle, &scatter_path)?;
            debug!(path = %scatter_path.display(), "wrote scatter chart");
            written.push(scatter_path);
        }
    }

    Ok(written)
}
