use super::costs::Costs;
use super::coupling::Coupling;
use super::iteration::Iteration;
use super::measure::Measure;
use super::plan::Plan;
use super::problem::Problem;
use crate::Cost;
use crate::Quantity;

/// Minimum-cost (greedy matrix) heuristic for the transportation problem.
///
/// Repeatedly picks the cheapest cell whose origin still has supply and
/// whose destination still has demand, and ships as much as both allow.
/// Not guaranteed optimal, but always feasible on a balanced problem.
///
/// # Algorithm
///
/// 1. Scan feasible cells in row-major order, keeping the strictly cheapest
/// 2. Ship `min(supply[i], demand[j])` along it and record the step
/// 3. Stop when no feasible cell remains
///
/// Ties go to the first cell met in the scan (lowest row, then lowest
/// column). Every step zeroes a remaining supply or demand entry, so the
/// trace is at most `origins + destinations` long.
///
/// # Complexity
///
/// O(m·n) per step, O(m·n·(m+n)) overall.
pub struct MinimumCost<'a> {
    costs: &'a Costs,
    supply: Vec<Quantity>,
    demand: Vec<Quantity>,
    plan: Plan,
    total: Cost,
    trace: Vec<Iteration>,
}

impl MinimumCost<'_> {
    /// Cheapest feasible cell, first in row-major order on ties.
    fn cheapest(&self) -> Option<(usize, usize)> {
        self.supply
            .iter()
            .enumerate()
            .filter(|(_, s)| **s > 0.)
            .flat_map(|(i, _)| {
                self.demand
                    .iter()
                    .enumerate()
                    .filter(|(_, d)| **d > 0.)
                    .map(move |(j, _)| (i, j))
            })
            .fold((None, Cost::INFINITY), |(best, min), (i, j)| {
                match self.costs.cost(i, j) {
                    cost if cost < min => (Some((i, j)), cost),
                    _ => (best, min),
                }
            })
            .0
    }
    /// Ships the maximal quantity along `(i, j)` and records the step.
    fn assign(&mut self, i: usize, j: usize) -> Iteration {
        let unit_cost = self.costs.cost(i, j);
        let quantity = self.supply[i].min(self.demand[j]);
        self.plan.set(i, j, quantity);
        self.total += quantity * unit_cost;
        self.supply[i] -= quantity;
        self.demand[j] -= quantity;
        let step = Iteration {
            index: self.trace.len() + 1,
            row: i,
            col: j,
            unit_cost,
            quantity,
            allocations_snapshot: self.plan.clone(),
            running_cost: self.total,
            remaining_supply: self.supply.clone(),
            remaining_demand: self.demand.clone(),
        };
        log::debug!(
            "step {:>3}: ship {} along ({}, {}) at {} -> running cost {}",
            step.index,
            quantity,
            i,
            j,
            unit_cost,
            self.total
        );
        self.trace.push(step.clone());
        step
    }
    pub fn remaining_supply(&self) -> &[Quantity] {
        &self.supply
    }
    pub fn remaining_demand(&self) -> &[Quantity] {
        &self.demand
    }
    pub fn trace(&self) -> &[Iteration] {
        &self.trace
    }
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
    /// Final plan, total cost and trace.
    pub fn into_parts(self) -> (Plan, Cost, Vec<Iteration>) {
        (self.plan, self.total, self.trace)
    }
}

/// Steps through the heuristic one assignment at a time.
impl Iterator for MinimumCost<'_> {
    type Item = Iteration;
    fn next(&mut self) -> Option<Self::Item> {
        self.cheapest().map(|(i, j)| self.assign(i, j))
    }
}

impl<'a> Coupling for MinimumCost<'a> {
    fn minimize(mut self) -> Self {
        let steps = self.by_ref().count();
        log::info!(
            "minimum-cost plan on {}x{} after {} steps, total cost {}",
            self.costs.origins(),
            self.costs.destinations(),
            steps,
            self.total
        );
        self
    }
    fn flow(&self, i: usize, j: usize) -> Quantity {
        self.plan.get(i, j)
    }
    fn cost(&self) -> Cost {
        self.total
    }
}

impl<'a> From<&'a Problem> for MinimumCost<'a> {
    fn from(problem: &'a Problem) -> Self {
        Self {
            costs: problem.costs(),
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            plan: Plan::zeroes(problem.origins(), problem.destinations()),
            total: 0.,
            trace: Vec::new(),
        }
    }
}
