//! Chart rendering for the Stroop report
//!
//! This module renders the condition-comparison box plot and the
//! trial/reaction-time scatter plot using the [`plotters`] crate. Charts are
//! saved as JPEG files sized for 300 dpi print resolution.

use crate::common::tables::{BoxplotTable, CorrelationTable};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Chart canvas size in pixels, a 6.4 x 4.8 inch figure at 300 dots per inch
const CHART_WIDTH: u32 = 1920;
const CHART_HEIGHT: u32 = 1440;

/// Title of the condition-comparison box plot
const BOXPLOT_TITLE: &str = "Stroop Effect";

/// Title of the trial/reaction-time scatter plot
const SCATTERPLOT_TITLE: &str = "Correlation between Trials and Reaction Time";

/// Y-axis label shared by both charts
const REACTION_TIME_AXIS_LABEL: &str = "Average Reaction Time in Seconds";

/// Fraction of the value span added on each side of a fitted axis
const AXIS_MARGIN: f64 = 0.05;

/// Fallback half-span for an axis fitted to a single repeated value
const DEGENERATE_HALF_SPAN: f64 = 0.05;

/// Pixel width of each box body
const BOX_WIDTH: u32 = 240;

/// Pixel radius of each scatter point
const POINT_RADIUS: i32 = 12;

/// Fixed categorical palette applied to chart series ("Set2" values)
const CATEGORICAL_PALETTE: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

/// Color for the series at `index`, wrapping around the palette
fn series_color(index: usize) -> RGBColor {
    CATEGORICAL_PALETTE[index % CATEGORICAL_PALETTE.len()]
}

/// Fits an axis range to observed values with a proportional margin.
///
/// Returns `(min - margin, max + margin)`. A degenerate span (all values
/// equal) is widened to a small fixed window so the axis keeps a non-zero
/// extent.
fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - span * AXIS_MARGIN, max + span * AXIS_MARGIN)
    } else {
        (min - DEGENERATE_HALF_SPAN, max + DEGENERATE_HALF_SPAN)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

/// Creates the condition-comparison box plot and saves it as a JPEG file
///
/// Draws one vertical box-and-whisker per trial condition on a categorical
/// X-axis. Quartiles and whisker extents (1.5x interquartile range) follow
/// the plotting library's standard Tukey convention; each condition is
/// summarized independently, so the row order of the underlying samples does
/// not affect the chart.
///
/// # Arguments
/// * `table` - Labeled reaction times of the two trial conditions
/// * `output_path` - Path where the JPEG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1920x1440 pixels (6.4x4.8in at 300 dpi)
/// * Format: JPEG, an existing file of the same name is overwritten
/// * Title: "Stroop Effect"
/// * Y-axis: "Average Reaction Time in Seconds"
/// * X-axis: the two condition labels as categories
/// * Box styling: one categorical palette color per condition
///
/// # Headless Compatibility
/// Uses plotters' bitmap backend with default font rendering, so it works in
/// headless environments (Docker/CI) without system font dependencies.
pub fn render_boxplot(table: &BoxplotTable, output_path: &Path) -> Result<()> {
    if table.is_empty() {
        return Err(PlotError::InvalidData(
            "Box plot data cannot be empty".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let congruent = Quartiles::new(table.congruent());
    let incongruent = Quartiles::new(table.incongruent());

    // The Y-range must cover the whisker extents as well as the raw samples
    let quartile_values = congruent
        .values()
        .into_iter()
        .chain(incongruent.values())
        .map(f64::from);
    let samples = table
        .congruent()
        .iter()
        .chain(table.incongruent().iter())
        .copied();
    let (min, max) = min_max(quartile_values.chain(samples));
    let (y_min, y_max) = padded_range(min, max);

    let categories = [
        BoxplotTable::CONGRUENT_LABEL,
        BoxplotTable::INCONGRUENT_LABEL,
    ];

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(BOXPLOT_TITLE, ("sans-serif", 60))
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(130)
        .build_cartesian_2d(categories[..].into_segmented(), y_min as f32..y_max as f32)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let mut mesh = chart_context.configure_mesh();
    mesh.disable_x_mesh()
        .y_desc(REACTION_TIME_AXIS_LABEL)
        .y_label_style(("sans-serif", 40))
        .label_style(("sans-serif", 30))
        .x_label_style(("sans-serif", 40))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(label) => label.to_string(),
            _ => String::new(),
        });
    mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;

    let box_colors = [series_color(0), series_color(1)];
    chart_context
        .draw_series(vec![
            Boxplot::new_vertical(SegmentValue::CenterOf(&categories[0]), &congruent)
                .width(BOX_WIDTH)
                .whisker_width(0.5)
                .style(&box_colors[0]),
            Boxplot::new_vertical(SegmentValue::CenterOf(&categories[1]), &incongruent)
                .width(BOX_WIDTH)
                .whisker_width(0.5)
                .style(&box_colors[1]),
        ])
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates the trial/reaction-time scatter plot and saves it as a JPEG file
///
/// Draws one filled point per data row at (trial, reaction time), preserving
/// the row order of the input. No connecting line and no fit overlay are
/// drawn. Axis ranges are fitted to the data with a proportional margin.
///
/// # Arguments
/// * `table` - Row-aligned trial and reaction-time columns
/// * `output_path` - Path where the JPEG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1920x1440 pixels (6.4x4.8in at 300 dpi)
/// * Format: JPEG, an existing file of the same name is overwritten
/// * Title: "Correlation between Trials and Reaction Time"
/// * X-axis: "Trials"
/// * Y-axis: "Average Reaction Time in Seconds"
pub fn render_scatterplot(table: &CorrelationTable, output_path: &Path) -> Result<()> {
    if table.is_empty() {
        return Err(PlotError::InvalidData(
            "Scatter plot data cannot be empty".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (x_min, x_max) = {
        let (min, max) = min_max(table.trials().iter().copied());
        padded_range(min, max)
    };
    let (y_min, y_max) = {
        let (min, max) = min_max(table.reaction_times().iter().copied());
        padded_range(min, max)
    };

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(SCATTERPLOT_TITLE, ("sans-serif", 60))
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(130)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let mut mesh = chart_context.configure_mesh();
    mesh.x_desc(CorrelationTable::TRIALS_LABEL)
        .x_label_style(("sans-serif", 40))
        .y_desc(REACTION_TIME_AXIS_LABEL)
        .y_label_style(("sans-serif", 40))
        .label_style(("sans-serif", 30));
    mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;

    let point_style = series_color(0).filled();
    chart_context
        .draw_series(
            table
                .points()
                .map(|(x, y)| Circle::new((x, y), POINT_RADIUS, point_style)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
