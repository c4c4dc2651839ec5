use super::measure::Measure;
use crate::Cost;
use serde::Deserialize;
use serde::Serialize;

/// Dense unit-cost matrix, one row per origin.
///
/// Rows are expected to share one length. Balancing grows the matrix by
/// one zero column (dummy destination) or one zero row (dummy origin).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Costs(Vec<Vec<Cost>>);

impl Costs {
    pub fn rows(&self) -> &[Vec<Cost>] {
        &self.0
    }
    /// Appends a zero-cost cell to every row.
    pub fn push_zero_column(&mut self) {
        self.0.iter_mut().for_each(|row| row.push(0.));
    }
    /// Appends an all-zero row of the given width.
    pub fn push_zero_row(&mut self, width: usize) {
        self.0.push(vec![0.; width]);
    }
}

impl Measure for Costs {
    fn origins(&self) -> usize {
        self.0.len()
    }
    fn destinations(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }
    fn cost(&self, i: usize, j: usize) -> Cost {
        self.0[i][j]
    }
}

impl From<Vec<Vec<Cost>>> for Costs {
    fn from(rows: Vec<Vec<Cost>>) -> Self {
        Self(rows)
    }
}
