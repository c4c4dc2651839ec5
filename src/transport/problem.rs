use super::balance::Balance;
use super::costs::Costs;
use super::coupling::Coupling;
use super::greedy::MinimumCost;
use super::solution::Solution;
use crate::Cost;
use crate::Quantity;

/// A closed transportation problem.
///
/// Construction balances supply against demand exactly once, so every
/// `Problem` satisfies `sum(supply) == sum(demand)` and carries at most one
/// dummy origin or destination. The stored vectors are never mutated by
/// solving; [`MinimumCost`] works on its own copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    costs: Costs,
    supply: Vec<Quantity>,
    demand: Vec<Quantity>,
    balance: Balance,
}

impl Problem {
    /// Solves with the minimum-cost heuristic.
    pub fn solve(&self) -> Solution {
        Solution::from(MinimumCost::from(self).minimize())
    }
    pub fn costs(&self) -> &Costs {
        &self.costs
    }
    pub fn supply(&self) -> &[Quantity] {
        &self.supply
    }
    pub fn demand(&self) -> &[Quantity] {
        &self.demand
    }
    pub fn balance(&self) -> Balance {
        self.balance
    }
    pub fn has_dummy_origin(&self) -> bool {
        self.balance.has_dummy_origin()
    }
    pub fn has_dummy_destination(&self) -> bool {
        self.balance.has_dummy_destination()
    }
    pub fn is_dummy_origin(&self, i: usize) -> bool {
        self.balance.is_dummy_origin(i, &self.costs)
    }
    pub fn is_dummy_destination(&self, j: usize) -> bool {
        self.balance.is_dummy_destination(j, &self.costs)
    }
    /// Origins after balancing, dummy included.
    pub fn origins(&self) -> usize {
        self.supply.len()
    }
    /// Destinations after balancing, dummy included.
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }
}

/// Builds and balances a problem from `(costs, supply, demand)`.
///
/// User-provided tables should go through `TryFrom<Form>`, which reports
/// shape mismatches as errors instead.
///
/// # Panics
///
/// Panics unless `costs` has exactly `supply.len()` rows, each of
/// `demand.len()` entries.
impl From<(Vec<Vec<Cost>>, Vec<Quantity>, Vec<Quantity>)> for Problem {
    fn from((costs, supply, demand): (Vec<Vec<Cost>>, Vec<Quantity>, Vec<Quantity>)) -> Self {
        assert!(costs.len() == supply.len(), "one cost row per origin");
        assert!(costs.iter().all(|row| row.len() == demand.len()), "one cost column per destination");
        let mut costs = Costs::from(costs);
        let mut supply = supply;
        let mut demand = demand;
        let balance = Balance::close(&mut costs, &mut supply, &mut demand);
        Self {
            costs,
            supply,
            demand,
            balance,
        }
    }
}
