use super::greedy::MinimumCost;
use super::iteration::Iteration;
use super::plan::Plan;
use crate::Cost;
use serde::Deserialize;
use serde::Serialize;

/// Final plan, its cost, and the full allocation trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub allocations: Plan,
    pub total_cost: Cost,
    pub iterations: Vec<Iteration>,
}

impl Solution {
    /// Rebuilds the cumulative plan after each step from step deltas alone.
    ///
    /// Equivalent to the stored snapshots, for consumers that drop them.
    pub fn replay(&self) -> Vec<Plan> {
        let origins = self.allocations.rows().len();
        let destinations = self.allocations.rows().first().map_or(0, Vec::len);
        self.iterations
            .iter()
            .map(Iteration::delta)
            .scan(Plan::zeroes(origins, destinations), |plan, (i, j, q)| {
                plan.set(i, j, q);
                Some(plan.clone())
            })
            .collect()
    }
}

impl From<MinimumCost<'_>> for Solution {
    fn from(greedy: MinimumCost<'_>) -> Self {
        let (allocations, total_cost, iterations) = greedy.into_parts();
        Self {
            allocations,
            total_cost,
            iterations,
        }
    }
}
