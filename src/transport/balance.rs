use super::costs::Costs;
use super::measure::Measure;
use crate::Quantity;
use serde::Deserialize;
use serde::Serialize;

/// Outcome of closing a transportation problem.
///
/// At most one dummy is ever introduced. A dummy origin is always the last
/// row and a dummy destination always the last column, both with zero cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    /// Supply and demand totals already matched.
    #[default]
    Even,
    /// Demand exceeded supply; a zero-cost origin absorbs the difference.
    DummyOrigin,
    /// Supply exceeded demand; a zero-cost destination absorbs the difference.
    DummyDestination,
}

impl Balance {
    /// Closes the problem in place so that total supply equals total demand.
    pub fn close(costs: &mut Costs, supply: &mut Vec<Quantity>, demand: &mut Vec<Quantity>) -> Self {
        let offered = supply.iter().sum::<Quantity>();
        let ordered = demand.iter().sum::<Quantity>();
        if offered > ordered {
            log::info!("supply exceeds demand by {}, adding dummy destination", offered - ordered);
            demand.push(offered - ordered);
            costs.push_zero_column();
            Self::DummyDestination
        } else if offered < ordered {
            log::info!("demand exceeds supply by {}, adding dummy origin", ordered - offered);
            supply.push(ordered - offered);
            costs.push_zero_row(demand.len());
            Self::DummyOrigin
        } else {
            log::info!("supply and demand balanced at {}", offered);
            Self::Even
        }
    }
    pub fn has_dummy_origin(&self) -> bool {
        matches!(self, Self::DummyOrigin)
    }
    pub fn has_dummy_destination(&self) -> bool {
        matches!(self, Self::DummyDestination)
    }
    /// Whether row `i` of a closed `costs` matrix is the dummy origin.
    pub fn is_dummy_origin(&self, i: usize, costs: &Costs) -> bool {
        self.has_dummy_origin() && i + 1 == costs.origins()
    }
    /// Whether column `j` of a closed `costs` matrix is the dummy destination.
    pub fn is_dummy_destination(&self, j: usize, costs: &Costs) -> bool {
        self.has_dummy_destination() && j + 1 == costs.destinations()
    }
}
