use crate::Cost;

/// Ground cost between origins and destinations.
///
/// Defines the cost of shipping one unit from origin `i` to destination `j`.
/// This is the quantity the minimum-cost heuristic greedily minimizes.
///
/// # Implementations
///
/// - **Costs**: dense row-major matrix, one row per origin
pub trait Measure {
    /// Number of origins (rows).
    fn origins(&self) -> usize;
    /// Number of destinations (columns).
    fn destinations(&self) -> usize;
    /// Returns the unit cost of shipping from origin `i` to destination `j`.
    fn cost(&self, i: usize, j: usize) -> Cost;
}
