//! Labeled tables consumed by the chart renderers

use thiserror::Error;

/// A loaded table did not have the expected column count
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expected exactly {expected} columns, found {found} in row {row}")]
pub struct ShapeError {
    pub expected: usize,
    pub found: usize,
    pub row: usize,
}

/// Number of columns every result table carries
const TABLE_COLUMNS: usize = 2;

fn split_columns(rows: &[Vec<f64>]) -> Result<(Vec<f64>, Vec<f64>), ShapeError> {
    let mut first = Vec::with_capacity(rows.len());
    let mut second = Vec::with_capacity(rows.len());

    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != TABLE_COLUMNS {
            return Err(ShapeError {
                expected: TABLE_COLUMNS,
                found: row.len(),
                row: row_index,
            });
        }
        first.push(row[0]);
        second.push(row[1]);
    }

    Ok((first, second))
}

/// Reaction times of the two trial conditions, one distribution per column.
///
/// Both columns come from the same file and keep its row order, but the box
/// plot summarizes each column independently; no cross-row pairing is
/// implied.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotTable {
    congruent: Vec<f64>,
    incongruent: Vec<f64>,
}

impl BoxplotTable {
    pub const CONGRUENT_LABEL: &'static str = "Congruent Trials";
    pub const INCONGRUENT_LABEL: &'static str = "Incongruent Trials";

    /// Labels the two columns of a loaded table.
    ///
    /// Pure function; fails with [`ShapeError`] unless every row has exactly
    /// two columns.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let (congruent, incongruent) = split_columns(rows)?;
        Ok(Self {
            congruent,
            incongruent,
        })
    }

    /// Reaction times measured in congruent trials
    pub fn congruent(&self) -> &[f64] {
        &self.congruent
    }

    /// Reaction times measured in incongruent trials
    pub fn incongruent(&self) -> &[f64] {
        &self.incongruent
    }

    pub fn is_empty(&self) -> bool {
        self.congruent.is_empty()
    }
}

/// Per-trial average reaction times, row-aligned with the trial column.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTable {
    trials: Vec<f64>,
    reaction_times: Vec<f64>,
}

impl CorrelationTable {
    pub const TRIALS_LABEL: &'static str = "Trials";
    pub const REACTION_TIME_LABEL: &'static str = "Average Reaction Time in Seconds";

    /// Labels the two columns of a loaded table.
    ///
    /// Pure function; fails with [`ShapeError`] unless every row has exactly
    /// two columns.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let (trials, reaction_times) = split_columns(rows)?;
        Ok(Self {
            trials,
            reaction_times,
        })
    }

    /// Trial index or trial-count column
    pub fn trials(&self) -> &[f64] {
        &self.trials
    }

    /// Average reaction time column, row-aligned with [`Self::trials`]
    pub fn reaction_times(&self) -> &[f64] {
        &self.reaction_times
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Points in row order; point i pairs trial i with its reaction time
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.trials
            .iter()
            .copied()
            .zip(self.reaction_times.iter().copied())
    }
}
