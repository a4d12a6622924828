//! Size-vs-time scatter rendering

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::ScatterChart;
use crate::error::ReportError;
use crate::style::{browser_color, browser_label, scenario_label};

const CHART_SIZE: (u32, u32) = (1000, 600);

/// Render one scenario's size-vs-mean scatter to an SVG file.
pub fn render_scatter_chart(
    chart: &ScatterChart,
    subtitle: &str,
    out_path: &Path,
) -> Result<(), ReportError> {
    draw(chart, subtitle, out_path).map_err(|err| ReportError::Chart {
        path: out_path.to_path_buf(),
        message: err.to_string(),
    })
}

fn draw(
    chart: &ScatterChart,
    subtitle: &str,
    out_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!(
        "Dataset size vs render time: {} ({})",
        scenario_label(&chart.scenario),
        subtitle
    );

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_top = f64::MIN;
    for series in &chart.series {
        for point in &series.points {
            x_min = x_min.min(point.size);
            x_max = x_max.max(point.size);
            let top = if point.ci95_ms.is_finite() {
                point.mean_ms + point.ci95_ms
            } else {
                point.mean_ms
            };
            if top.is_finite() {
                y_top = y_top.max(top);
            }
        }
    }
    if !x_min.is_finite() {
        x_min = 0.0;
        x_max = 1.0;
    }
    if x_min == x_max {
        x_max = x_min + 1.0;
    }
    let y_max = if y_top.is_finite() && y_top > 0.0 {
        y_top * 1.1
    } else {
        1.0
    };
    let x_pad = (x_max - x_min) * 0.05;

    let mut cc = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min - x_pad)..(x_max + x_pad), 0f64..y_max)?;

    cc.configure_mesh()
        .x_desc("Dataset size (number of points)")
        .y_desc("Render time per pass (ms)")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 13))
        .draw()?;

    for series in &chart.series {
        if series.points.is_empty() {
            continue;
        }
        let color = browser_color(&series.browser);

        cc.draw_series(
            series
                .points
                .iter()
                .filter(|point| point.ci95_ms.is_finite() && point.ci95_ms > 0.0)
                .map(|point| {
                    ErrorBar::new_vertical(
                        point.size,
                        point.mean_ms - point.ci95_ms,
                        point.mean_ms,
                        point.mean_ms + point.ci95_ms,
                        color.stroke_width(1),
                        6,
                    )
                }),
        )?;

        cc.draw_series(
            series
                .points
                .iter()
                .map(|point| Circle::new((point.size, point.mean_ms), 4, color.filled())),
        )?
        .label(browser_label(&series.browser))
        .legend(move |(x, y)| Circle::new((x + 6, y), 4, color.filled()));

        if let Some(fit) = series.fit {
            // Points are sorted by size, so first/last span the fit.
            let x0 = series.points.first().map(|p| p.size).unwrap_or(x_min);
            let x1 = series.points.last().map(|p| p.size).unwrap_or(x_max);
            cc.draw_series(DashedLineSeries::new(
                [(x0, fit.y_at(x0)), (x1, fit.y_at(x1))],
                6,
                4,
                color.mix(0.7).stroke_width(1),
            ))?;
        }
    }

    cc.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(("sans-serif", 13))
        .draw()?;

    root.present()?;
    Ok(())
}
