//! Rendering of solved problems.
//!
//! [`Report`] pairs a [`Problem`](crate::transport::Problem) with its
//! [`Solution`](crate::transport::Solution) so rows and columns can be
//! named, with dummies called out, in text or JSON.
mod label;
mod report;

pub use label::*;
pub use report::*;
