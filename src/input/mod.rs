//! Turning raw tables into validated problems.
//!
//! A [`Form`] holds whatever the user typed (or a JSON file held), field by
//! field. Converting it into a [`Problem`](crate::transport::Problem) either
//! succeeds with a balanced problem or fails with a [`ValidationError`]
//! naming the offending field; the solver itself never sees bad input.
mod error;
mod field;
mod form;

pub use error::*;
pub use field::*;
pub use form::*;
