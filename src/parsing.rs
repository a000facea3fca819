//! Result-file parsing for Stroop task data
//!
//! This module loads a delimited result file into a rectangular table of
//! floating-point values. The first row of every result file is column-header
//! text; [`load_data_rows`] applies the fixed policy of discarding row
//! index 0 before the table is used as data.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during result-file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to read delimited record: {0}")]
    MalformedRecord(#[from] csv::Error),

    #[error("Non-numeric value {value:?} in data row {row}, column {column}")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Reads a delimited file as a rectangular table of floating-point fields.
///
/// Row 0 is expected to hold column-header text and is parsed leniently:
/// fields that are not numeric load as `f64::NAN`. Every later row must be
/// fully numeric; the first offending field fails the load with
/// [`ParsingError::NonNumeric`] rather than being coerced or dropped. Rows
/// whose field count differs from the first row surface as
/// [`ParsingError::MalformedRecord`].
///
/// # Arguments
/// * `path` - Path of the result file
/// * `delimiter` - Single-byte field delimiter
///
/// # Returns
/// * `Ok(Vec<Vec<f64>>)` - All rows of the file, header row included
/// * `Err(ParsingError)` - If the file cannot be read or a row fails to parse
pub fn read_delimited_table(path: &Path, delimiter: u8) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(false)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(record.len());

        for (column_index, field) in record.iter().enumerate() {
            match field.trim().parse::<f64>() {
                Ok(value) => row.push(value),
                // Header text in row 0 loads as NaN
                Err(_) if row_index == 0 => row.push(f64::NAN),
                Err(_) => {
                    return Err(ParsingError::NonNumeric {
                        row: row_index,
                        column: column_index,
                        value: field.to_string(),
                    })
                }
            }
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Loads a result file and discards the header row.
///
/// Fixed policy: row index 0 is always treated as column-header text and is
/// never returned as data, even when it happens to be numeric.
pub fn load_data_rows(path: &Path, delimiter: u8) -> Result<Vec<Vec<f64>>> {
    let mut rows = read_delimited_table(path, delimiter)?;
    if !rows.is_empty() {
        rows.remove(0);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_result_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_keeps_header_row_as_nan() {
        let (_dir, path) = write_result_file("Congruent\tIncongruent\n0.50\t0.70\n");
        let rows = read_delimited_table(&path, b'\t').unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0][0].is_nan());
        assert!(rows[0][1].is_nan());
        assert_eq!(rows[1], vec![0.50, 0.70]);
    }

    #[test]
    fn test_load_strips_header_row() {
        let (_dir, path) =
            write_result_file("Congruent\tIncongruent\n0.50\t0.70\n0.55\t0.80\n0.60\t0.75\n");
        let rows = load_data_rows(&path, b'\t').unwrap();

        assert_eq!(
            rows,
            vec![vec![0.50, 0.70], vec![0.55, 0.80], vec![0.60, 0.75]]
        );
    }

    #[test]
    fn test_numeric_first_row_is_still_discarded() {
        // A file without header text silently loses its first data row
        let (_dir, path) = write_result_file("1\t0.5\n2\t0.6\n");
        let rows = load_data_rows(&path, b'\t').unwrap();

        assert_eq!(rows, vec![vec![2.0, 0.6]]);
    }

    #[test]
    fn test_non_numeric_data_row_fails() {
        let (_dir, path) = write_result_file("Trial\tRT\n1\t0.5\n2\toops\n");
        let result = load_data_rows(&path, b'\t');

        match result {
            Err(ParsingError::NonNumeric { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, 1);
                assert_eq!(value, "oops");
            }
            other => panic!("Expected NonNumeric error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_row_fails() {
        let (_dir, path) = write_result_file("Trial\tRT\n1\t0.5\n2\t0.6\t0.7\n");
        let result = load_data_rows(&path, b'\t');

        assert!(matches!(result, Err(ParsingError::MalformedRecord(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does_not_exist.txt");
        let result = load_data_rows(&path, b'\t');

        match result {
            Err(ParsingError::FileRead(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_yields_no_rows() {
        let (_dir, path) = write_result_file("");
        let rows = load_data_rows(&path, b'\t').unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_fields_tolerate_surrounding_whitespace() {
        let (_dir, path) = write_result_file("Trial\tRT\n 1 \t 0.5\n");
        let rows = load_data_rows(&path, b'\t').unwrap();
        assert_eq!(rows, vec![vec![1.0, 0.5]]);
    }
}
