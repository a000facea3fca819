//! Console summary tables for loaded result columns
//!
//! ASCII table formatting using the [`tabled`] crate, printed alongside the
//! rendered charts. Summaries are informational console output only; nothing
//! downstream is derived from them.

use tabled::{Table, Tabled};

/// Per-column summary row with sample count and central tendency
#[derive(Debug, Clone, Tabled)]
pub struct ColumnSummary {
    /// Column label as it appears on the charts
    #[tabled(rename = "Column")]
    pub column: String,
    /// Number of data rows loaded for this column
    #[tabled(rename = "Samples")]
    pub samples: usize,
    /// Mean reaction time, formatted in seconds
    #[tabled(rename = "Mean")]
    pub mean: String,
    /// Median reaction time, formatted in seconds
    #[tabled(rename = "Median")]
    pub median: String,
}

impl ColumnSummary {
    /// Creates a summary entry for a named column of samples
    pub fn new(column: &str, values: &[f64]) -> Self {
        Self {
            column: column.to_string(),
            samples: values.len(),
            mean: format_seconds(mean(values)),
            median: format_seconds(median(values)),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.3}s", value),
        None => "n/a".to_string(),
    }
}

/// Formats summary entries as an ASCII table
///
/// # Arguments
/// * `entries` - A slice of [`ColumnSummary`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_summary_table(entries: &[ColumnSummary], title: Option<&str>) -> String {
    if entries.is_empty() {
        return "No data available for summary".to_string();
    }

    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_summary_new() {
        let entry = ColumnSummary::new("Congruent Trials", &[0.50, 0.55, 0.60]);

        assert_eq!(entry.column, "Congruent Trials");
        assert_eq!(entry.samples, 3);
        assert_eq!(entry.mean, "0.550s");
        assert_eq!(entry.median, "0.550s");
    }

    #[test]
    fn test_median_even_sample_count() {
        let entry = ColumnSummary::new("Trials", &[0.70, 0.80, 0.75, 0.90]);

        assert_eq!(entry.samples, 4);
        // (0.75 + 0.80) / 2
        assert_eq!(entry.median, "0.775s");
    }

    #[test]
    fn test_median_ignores_input_order() {
        let shuffled = ColumnSummary::new("Trials", &[0.60, 0.50, 0.55]);
        assert_eq!(shuffled.median, "0.550s");
    }

    #[test]
    fn test_empty_column() {
        let entry = ColumnSummary::new("Trials", &[]);

        assert_eq!(entry.samples, 0);
        assert_eq!(entry.mean, "n/a");
        assert_eq!(entry.median, "n/a");
    }

    #[test]
    fn test_format_summary_table() {
        let entries = vec![
            ColumnSummary::new("Congruent Trials", &[0.50, 0.55, 0.60]),
            ColumnSummary::new("Incongruent Trials", &[0.70, 0.80, 0.75]),
        ];

        let table = format_summary_table(&entries, Some("Reaction Time by Condition"));
        assert!(table.contains("Reaction Time by Condition"));
        assert!(table.contains("Column"));
        assert!(table.contains("Samples"));
        assert!(table.contains("Congruent Trials"));
        assert!(table.contains("0.550s"));

        let table_no_title = format_summary_table(&entries, None);
        assert!(!table_no_title.contains("Reaction Time by Condition"));
        assert!(table_no_title.contains("Column"));
    }

    #[test]
    fn test_format_summary_table_empty() {
        let table = format_summary_table(&[], Some("Reaction Time by Condition"));
        assert_eq!(table, "No data available for summary");
    }
}
