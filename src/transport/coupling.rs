use crate::Cost;
use crate::Quantity;

/// A transport plan between origins and destinations.
///
/// A coupling assigns a shipped quantity to every (origin, destination)
/// pair such that row sums match supply and column sums match demand.
/// The transport cost is the sum of `flow(i, j) * cost(i, j)`.
///
/// # Algorithm Contract
///
/// Implementations must ensure that after [`minimize`](Coupling::minimize)
/// is called, [`flow`](Coupling::flow) describes a feasible plan and
/// [`cost`](Coupling::cost) returns its total cost.
pub trait Coupling {
    /// Runs the allocation to completion.
    fn minimize(self) -> Self;
    /// Returns the quantity shipped from origin `i` to destination `j`.
    fn flow(&self, i: usize, j: usize) -> Quantity;
    /// Returns the total transport cost of the plan.
    fn cost(&self) -> Cost;
}
