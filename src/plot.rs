//! Render a raw metric trace and its moving average on shared axes,
//! with the overall mean annotated at the midpoint of the averaged
//! curve.
use std::path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::arrayops::TimeSeries;

const FIGURE_SIZE: (u32, u32) = (800, 500);

/// Annotation text for the mean of the whole raw trace.
fn mean_label(raw: &TimeSeries) -> String {
    format!("Avg: {:.2}", raw.mean_value())
}

pub fn draw_chart_file<P>(
    raw: &TimeSeries,
    smoothed: &TimeSeries,
    title: &str,
    x_label: &str,
    y_label: &str,
    path: P,
) -> Result<(), Box<dyn std::error::Error>>
where
    P: AsRef<path::Path>,
{
    let backend = BitMapBackend::new(&path, FIGURE_SIZE);
    draw_on_bitmap(raw, smoothed, title, x_label, y_label, backend)
}

pub fn draw_on_bitmap(
    raw: &TimeSeries,
    smoothed: &TimeSeries,
    title: &str,
    x_label: &str,
    y_label: &str,
    backend: BitMapBackend,
) -> Result<(), Box<dyn std::error::Error>> {
    if raw.is_empty() {
        return Err(format!("no data points to draw for {title:?}").into());
    }
    let root = backend.into_drawing_area();

    let (xmin, xmax) = raw.time_range();
    let (ymin, ymax) = raw.value_range();
    // Keep the ranges non-degenerate for constant or single-point traces.
    let xpad = ((xmax - xmin) * 0.01).max(f64::EPSILON);
    let ypad = ((ymax - ymin) * 0.05).max(f64::EPSILON);

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(xmin - xpad..xmax + xpad, ymin - ypad..ymax + ypad)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .axis_desc_style(("sans-serif", 16).into_font())
        .y_desc(y_label)
        .draw()?;

    chart
        .draw_series(LineSeries::new(raw.iter(), &BLUE))?
        .label("Original Data")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    if !smoothed.is_empty() {
        chart
            .draw_series(LineSeries::new(smoothed.iter(), &RED))?
            .label("Moving Average")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    // The mean of the whole raw trace, anchored at the index midpoint
    // of the averaged curve. Skipped when the window swallowed the
    // entire series.
    if let Some((mid_x, mid_y)) = smoothed.get(smoothed.len() / 2) {
        let style = ("sans-serif", 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let marker = EmptyElement::at((mid_x, mid_y))
            + Rectangle::new([(-36, -11), (36, 11)], YELLOW.filled())
            + Text::new(mean_label(raw), (0, 0), style);
        chart.plotting_area().draw(&marker)?;
    }

    root.present()?;
    Ok(())
}
