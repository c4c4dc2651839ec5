//! Transportation problem and the minimum-cost heuristic.
//!
//! ## Core Types
//!
//! - [`Problem`] — costs, supply and demand, closed on construction
//! - [`Balance`] — which dummy (if any) closed the problem
//! - [`MinimumCost`] — greedy allocator, steppable as an iterator
//! - [`Solution`] — final [`Plan`], total cost and [`Iteration`] trace
//!
//! ## Traits
//!
//! - [`Measure`] — unit cost between an origin and a destination
//! - [`Coupling`] — a transport plan that can be minimized and costed
mod balance;
mod costs;
mod coupling;
mod greedy;
mod iteration;
mod measure;
mod plan;
mod problem;
mod solution;


pub use balance::*;
pub use costs::*;
pub use coupling::*;
pub use greedy::*;
pub use iteration::*;
pub use measure::*;
pub use plan::*;
pub use problem::*;
pub use solution::*;
