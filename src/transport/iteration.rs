use super::plan::Plan;
use crate::Cost;
use crate::Quantity;
use serde::Deserialize;
use serde::Serialize;

/// One assignment of the minimum-cost heuristic.
///
/// Snapshots are deep copies taken right after the assignment, so later
/// steps never alter an earlier record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iteration {
    /// 1-based position in the trace.
    pub index: usize,
    /// 0-based origin of the selected cell.
    pub row: usize,
    /// 0-based destination of the selected cell.
    pub col: usize,
    pub unit_cost: Cost,
    pub quantity: Quantity,
    pub allocations_snapshot: Plan,
    /// Total cost including this step.
    pub running_cost: Cost,
    pub remaining_supply: Vec<Quantity>,
    pub remaining_demand: Vec<Quantity>,
}

impl Iteration {
    /// Cost contributed by this step alone.
    pub fn partial_cost(&self) -> Cost {
        self.quantity * self.unit_cost
    }
    /// The step as a cell delta `(row, col, quantity)`.
    pub fn delta(&self) -> (usize, usize, Quantity) {
        (self.row, self.col, self.quantity)
    }
}
