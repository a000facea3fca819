//! Run configuration and pipeline constants
//!
//! The input directory is the only recognized configuration value; file
//! names, chart labels and the field delimiter are fixed.

use std::path::PathBuf;

/// Input file holding per-condition reaction times for the box plot
pub const BOXPLOT_INPUT: &str = "stroop_results_boxplot.txt";

/// Input file holding per-trial average reaction times for the scatter plot
pub const CORRPLOT_INPUT: &str = "stroop_results_corrplot.txt";

/// Output file name for the box plot chart
pub const BOXPLOT_OUTPUT: &str = "boxplot.jpg";

/// Output file name for the scatter plot chart
pub const SCATTERPLOT_OUTPUT: &str = "scatterplot.jpg";

/// Field delimiter used by the result files
pub const FIELD_DELIMITER: u8 = b'\t';

/// Recognized configuration options for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory the result files are read from
    pub input_dir: PathBuf,
    /// Directory the rendered charts are written to
    pub output_dir: PathBuf,
}

impl ReportConfig {
    /// Builds the configuration from process arguments.
    ///
    /// The first positional argument, when present, selects the input
    /// directory; it defaults to the current directory. Charts are always
    /// written to the current working directory.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let _program = args.next();
        let input_dir = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            input_dir,
            output_dir: PathBuf::from("."),
        }
    }

    /// Path of the box plot result file
    pub fn boxplot_input(&self) -> PathBuf {
        self.input_dir.join(BOXPLOT_INPUT)
    }

    /// Path of the correlation result file
    pub fn corrplot_input(&self) -> PathBuf {
        self.input_dir.join(CORRPLOT_INPUT)
    }

    /// Path the rendered box plot is written to
    pub fn boxplot_output(&self) -> PathBuf {
        self.output_dir.join(BOXPLOT_OUTPUT)
    }

    /// Path the rendered scatter plot is written to
    pub fn scatterplot_output(&self) -> PathBuf {
        self.output_dir.join(SCATTERPLOT_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_args_defaults_to_current_dir() {
        let config = ReportConfig::from_args(["stroop-report".to_string()].into_iter());
        assert_eq!(config.input_dir, Path::new("."));
        assert_eq!(config.output_dir, Path::new("."));
    }

    #[test]
    fn test_from_args_positional_input_dir() {
        let args = ["stroop-report".to_string(), "/data/results".to_string()];
        let config = ReportConfig::from_args(args.into_iter());
        assert_eq!(config.input_dir, Path::new("/data/results"));
        // Output stays in the working directory regardless of input location
        assert_eq!(config.output_dir, Path::new("."));
    }

    #[test]
    fn test_joined_paths() {
        let args = ["stroop-report".to_string(), "/data/results".to_string()];
        let config = ReportConfig::from_args(args.into_iter());
        assert_eq!(
            config.boxplot_input(),
            Path::new("/data/results/stroop_results_boxplot.txt")
        );
        assert_eq!(
            config.corrplot_input(),
            Path::new("/data/results/stroop_results_corrplot.txt")
        );
        assert_eq!(config.boxplot_output(), Path::new("./boxplot.jpg"));
        assert_eq!(config.scatterplot_output(), Path::new("./scatterplot.jpg"));
    }
}
