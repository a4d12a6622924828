//! Grouped error-bar bar chart rendering

use std::path::Path;

use plotters::prelude::*;

use super::BarChart;
use crate::error::ReportError;
use crate::style::{browser_color, browser_label, scenario_label};

const CHART_SIZE: (u32, u32) = (1200, 600);

/// Render one scenario's grouped bar chart to an SVG file.
pub fn render_bar_chart(
    chart: &BarChart,
    subtitle: &str,
    out_path: &Path,
) -> Result<(), ReportError> {
    draw(chart, subtitle, out_path).map_err(|err| ReportError::Chart {
        path: out_path.to_path_buf(),
        message: err.to_string(),
    })
}

fn draw(
    chart: &BarChart,
    subtitle: &str,
    out_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!(
        "WebGL render perf: {} ({})",
        scenario_label(&chart.scenario),
        subtitle
    );

    // NaN bars render as empty slots, so the axis only needs to cover
    // the finite tops.
    let top = chart
        .series
        .iter()
        .flat_map(|series| series.bars.iter())
        .filter_map(|(mean, ci)| {
            let top = if ci.is_finite() { mean + ci } else { *mean };
            top.is_finite().then_some(top)
        })
        .fold(f64::MIN, f64::max);
    let y_max = if top.is_finite() && top > 0.0 {
        top * 1.1
    } else {
        1.0
    };

    let n_datasets = chart.datasets.len().max(1);
    let mut cc = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n_datasets as f64 - 0.5), 0f64..y_max)?;

    let datasets = chart.datasets.clone();
    cc.configure_mesh()
        .disable_x_mesh()
        .x_labels(n_datasets)
        .x_label_formatter(&move |x: &f64| {
            let nearest = x.round();
            if (x - nearest).abs() > 0.3 || nearest < 0.0 {
                return String::new();
            }
            datasets.get(nearest as usize).cloned().unwrap_or_default()
        })
        .y_desc("Render time per pass (ms)")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 13))
        .draw()?;

    let n_browsers = chart.series.len().max(1);
    let bar_width = 0.8 / n_browsers as f64;

    for (i, series) in chart.series.iter().enumerate() {
        let color = browser_color(&series.browser);
        let offset = (i as f64 - (n_browsers as f64 - 1.0) / 2.0) * bar_width;

        cc.draw_series(
            series
                .bars
                .iter()
                .enumerate()
                .filter(|(_, (mean, _))| mean.is_finite())
                .map(|(j, (mean, _))| {
                    let center = j as f64 + offset;
                    Rectangle::new(
                        [
                            (center - bar_width / 2.0, 0.0),
                            (center + bar_width / 2.0, *mean),
                        ],
                        color.filled(),
                    )
                }),
        )?
        .label(browser_label(&series.browser))
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));

        cc.draw_series(
            series
                .bars
                .iter()
                .enumerate()
                .filter(|(_, (mean, ci))| mean.is_finite() && ci.is_finite() && *ci > 0.0)
                .map(|(j, (mean, ci))| {
                    let center = j as f64 + offset;
                    ErrorBar::new_vertical(
                        center,
                        mean - ci,
                        *mean,
                        mean + ci,
                        BLACK.stroke_width(1),
                        6,
                    )
                }),
        )?;
    }

    cc.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(("sans-serif", 13))
        .draw()?;

    root.present()?;
    Ok(())
}
