mod common;
mod config;
mod parsing;

use std::process;

use log::info;
use thiserror::Error;

use common::plots::{render_boxplot, render_scatterplot};
use common::summary::{format_summary_table, ColumnSummary};
use common::tables;
use common::{BoxplotTable, CorrelationTable, PlotError};
use config::{ReportConfig, FIELD_DELIMITER};
use parsing::load_data_rows;

/// Errors that can occur during a report run
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Table shape error: {0}")]
    Shape(#[from] tables::ShapeError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),
}

type Result<T> = core::result::Result<T, ReportError>;

fn main() -> Result<()> {
    env_logger::init();

    let config = ReportConfig::from_args(std::env::args());

    // Preflight: both result files must exist before any work starts
    for input in [config.boxplot_input(), config.corrplot_input()] {
        if !input.exists() {
            eprintln!("Error: Input file does not exist: {}", input.display());
            process::exit(1);
        }
    }

    run(&config)
}

/// Runs the two chart pipelines in strict order.
///
/// The correlation pipeline is never reached when the box-plot pipeline
/// fails; any error aborts the run without cleanup of partial output.
fn run(config: &ReportConfig) -> Result<()> {
    render_boxplot_report(config)?;
    render_scatterplot_report(config)?;
    Ok(())
}

/// Load, label, summarize and render the condition-comparison box plot
fn render_boxplot_report(config: &ReportConfig) -> Result<()> {
    let input = config.boxplot_input();
    info!("Loading box plot data from {}", input.display());

    let rows = load_data_rows(&input, FIELD_DELIMITER)?;
    let table = BoxplotTable::from_rows(&rows)?;

    let summary = [
        ColumnSummary::new(BoxplotTable::CONGRUENT_LABEL, table.congruent()),
        ColumnSummary::new(BoxplotTable::INCONGRUENT_LABEL, table.incongruent()),
    ];
    println!(
        "{}",
        format_summary_table(&summary, Some("Reaction Time by Condition"))
    );

    let output = config.boxplot_output();
    render_boxplot(&table, &output)?;
    info!("Wrote box plot to {}", output.display());

    Ok(())
}

/// Load, label, summarize and render the trial/reaction-time scatter plot
fn render_scatterplot_report(config: &ReportConfig) -> Result<()> {
    let input = config.corrplot_input();
    info!("Loading correlation data from {}", input.display());

    let rows = load_data_rows(&input, FIELD_DELIMITER)?;
    let table = CorrelationTable::from_rows(&rows)?;

    let summary = [ColumnSummary::new(
        CorrelationTable::REACTION_TIME_LABEL,
        table.reaction_times(),
    )];
    println!(
        "{}",
        format_summary_table(&summary, Some("Reaction Time by Trial"))
    );

    let output = config.scatterplot_output();
    render_scatterplot(&table, &output)?;
    info!("Wrote scatter plot to {}", output.display());

    Ok(())
}
