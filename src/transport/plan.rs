use super::measure::Measure;
use crate::Cost;
use crate::Quantity;
use serde::Deserialize;
use serde::Serialize;

/// Allocation matrix: quantity shipped along each (origin, destination) cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan(Vec<Vec<Quantity>>);

impl Plan {
    /// All-zero plan of the given shape.
    pub fn zeroes(origins: usize, destinations: usize) -> Self {
        Self(vec![vec![0.; destinations]; origins])
    }
    pub fn get(&self, i: usize, j: usize) -> Quantity {
        self.0[i][j]
    }
    pub fn set(&mut self, i: usize, j: usize, quantity: Quantity) {
        self.0[i][j] = quantity;
    }
    pub fn rows(&self) -> &[Vec<Quantity>] {
        &self.0
    }
    /// Total shipped out of origin `i`.
    pub fn shipped(&self, i: usize) -> Quantity {
        self.0[i].iter().sum()
    }
    /// Total received by destination `j`.
    pub fn received(&self, j: usize) -> Quantity {
        self.0.iter().map(|row| row[j]).sum()
    }
    /// Cells with a positive allocation, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Quantity)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, q)| (i, j, *q)))
            .filter(|(_, _, q)| *q > 0.)
    }
    /// Sum of `quantity * cost` over every cell.
    pub fn cost<M: Measure>(&self, measure: &M) -> Cost {
        self.cells()
            .map(|(i, j, q)| q * measure.cost(i, j))
            .sum()
    }
}
