use super::error::ValidationError;
use super::field::Field;
use crate::Arbitrary;
use crate::MAX_DIMENSION;
use crate::RANDOM_VALUE_MAX;
use crate::RANDOM_VALUE_MIN;
use crate::transport::Problem;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Raw transportation table as entered by a user or read from a file.
///
/// Dimensions are implied: one supply entry per origin, one demand entry
/// per destination, and a cost row per origin. `None` marks an empty field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub costs: Vec<Vec<Option<Field>>>,
    #[serde(default)]
    pub supply: Vec<Option<Field>>,
    #[serde(default)]
    pub demand: Vec<Option<Field>>,
}

impl Form {
    /// Blank `rows × cols` table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            costs: vec![vec![None; cols]; rows],
            supply: vec![None; rows],
            demand: vec![None; cols],
        }
    }
    /// `rows × cols` table filled with random whole values.
    pub fn sample<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Self {
        let mut value = || Some(Field::from(rng.random_range(RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX) as f64));
        let mut form = Self::new(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                form.costs[i][j] = value();
            }
            form.supply[i] = value();
        }
        for j in 0..cols {
            form.demand[j] = value();
        }
        form
    }
    pub fn rows(&self) -> usize {
        self.supply.len()
    }
    pub fn cols(&self) -> usize {
        self.demand.len()
    }
    pub fn set_cost(&mut self, i: usize, j: usize, field: impl Into<Field>) {
        self.costs[i][j] = Some(field.into());
    }
    pub fn set_supply(&mut self, i: usize, field: impl Into<Field>) {
        self.supply[i] = Some(field.into());
    }
    pub fn set_demand(&mut self, j: usize, field: impl Into<Field>) {
        self.demand[j] = Some(field.into());
    }
    /// Rejects tables outside the interactive `1..=MAX_DIMENSION` range.
    pub fn bounded(self) -> Result<Self, ValidationError> {
        match (self.rows(), self.cols()) {
            (rows, cols) if (1..=MAX_DIMENSION).contains(&rows) && (1..=MAX_DIMENSION).contains(&cols) => Ok(self),
            (rows, cols) => Err(ValidationError::InvalidDimensions { rows, cols }),
        }
    }
    /// Every field present and non-blank.
    pub fn is_complete(&self) -> bool {
        self.costs
            .iter()
            .flatten()
            .chain(self.supply.iter())
            .chain(self.demand.iter())
            .all(|field| field.as_ref().is_some_and(|f| !f.is_blank()))
    }
    fn check_shape(&self) -> Result<(), ValidationError> {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 0 || cols == 0 {
            Err(ValidationError::InvalidDimensions { rows, cols })
        } else if self.costs.len() != rows || self.costs.iter().any(|row| row.len() != cols) {
            Err(ValidationError::MismatchedShape { rows, cols })
        } else {
            Ok(())
        }
    }
    fn number(field: &Option<Field>) -> Option<f64> {
        field.as_ref().and_then(Field::value)
    }
}

/// Validates the table and builds a balanced [`Problem`].
///
/// Checks run in table order: shape, completeness, then each origin's
/// costs followed by its supply, and finally the demand row.
impl TryFrom<Form> for Problem {
    type Error = ValidationError;
    fn try_from(form: Form) -> Result<Self, Self::Error> {
        form.check_shape()?;
        if !form.is_complete() {
            return Err(ValidationError::IncompleteInput);
        }
        let mut costs = Vec::with_capacity(form.rows());
        let mut supply = Vec::with_capacity(form.rows());
        for (i, row) in form.costs.iter().enumerate() {
            costs.push(
                row.iter()
                    .enumerate()
                    .map(|(j, field)| Form::number(field).ok_or(ValidationError::InvalidCostValue { row: i + 1, col: j + 1 }))
                    .collect::<Result<Vec<_>, _>>()?,
            );
            supply.push(Form::number(&form.supply[i]).ok_or(ValidationError::InvalidSupplyValue { row: i + 1 })?);
        }
        let demand = form
            .demand
            .iter()
            .enumerate()
            .map(|(j, field)| Form::number(field).ok_or(ValidationError::InvalidDemandValue { col: j + 1 }))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("validated {}x{} table", form.rows(), form.cols());
        Ok(Problem::from((costs, supply, demand)))
    }
}

/// Random table size within `1..=MAX_DIMENSION`, random values within
/// `RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX`.
impl Arbitrary for Form {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let rows = rng.random_range(1..=MAX_DIMENSION);
        let cols = rng.random_range(1..=MAX_DIMENSION);
        Self::sample(rng, rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn filled() -> Form {
        let mut form = Form::new(2, 2);
        form.set_cost(0, 0, "4");
        form.set_cost(0, 1, "6");
        form.set_cost(1, 0, "5");
        form.set_cost(1, 1, "3");
        form.set_supply(0, "20");
        form.set_supply(1, "30");
        form.set_demand(0, "25");
        form.set_demand(1, "25");
        form
    }

    #[test]
    fn valid_form_builds_problem() {
        let problem = Problem::try_from(filled()).unwrap();
        assert_eq!(problem.supply(), &[20., 30.]);
        assert_eq!(problem.demand(), &[25., 25.]);
        assert_eq!(problem.costs().rows(), &[vec![4., 6.], vec![5., 3.]]);
        assert_eq!(problem.solve().total_cost, 180.);
    }

    #[test]
    fn blank_field_is_incomplete() {
        let mut form = filled();
        form.set_demand(1, "  ");
        assert_eq!(Problem::try_from(form), Err(ValidationError::IncompleteInput));
        assert_eq!(Problem::try_from(Form::new(2, 2)), Err(ValidationError::IncompleteInput));
    }

    #[test]
    fn completeness_checked_before_values() {
        let mut form = filled();
        form.set_cost(0, 0, "abc");
        form.demand[0] = None;
        assert_eq!(Problem::try_from(form), Err(ValidationError::IncompleteInput));
    }

    #[test]
    fn invalid_cost_reports_cell() {
        let mut form = filled();
        form.set_cost(1, 0, "five");
        assert_eq!(
            Problem::try_from(form),
            Err(ValidationError::InvalidCostValue { row: 2, col: 1 })
        );
    }

    #[test]
    fn row_costs_checked_before_row_supply() {
        let mut form = filled();
        form.set_supply(0, "x");
        form.set_cost(1, 1, "y");
        assert_eq!(Problem::try_from(form), Err(ValidationError::InvalidSupplyValue { row: 1 }));
    }

    #[test]
    fn invalid_demand_reports_column() {
        let mut form = filled();
        form.set_demand(1, "?");
        assert_eq!(Problem::try_from(form), Err(ValidationError::InvalidDemandValue { col: 2 }));
    }

    #[test]
    fn empty_table_has_invalid_dimensions() {
        assert_eq!(
            Problem::try_from(Form::default()),
            Err(ValidationError::InvalidDimensions { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn jagged_costs_mismatch() {
        let mut form = filled();
        form.costs[1].push(Some(Field::from(1.)));
        assert_eq!(Problem::try_from(form), Err(ValidationError::MismatchedShape { rows: 2, cols: 2 }));
    }

    #[test]
    fn bounded_enforces_interactive_range() {
        assert!(Form::new(MAX_DIMENSION, 1).bounded().is_ok());
        assert_eq!(
            Form::new(MAX_DIMENSION + 1, 3).bounded(),
            Err(ValidationError::InvalidDimensions { rows: MAX_DIMENSION + 1, cols: 3 })
        );
    }

    #[test]
    fn sampled_form_is_valid_and_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let form = Form::sample(rng, 4, 6);
        assert_eq!((form.rows(), form.cols()), (4, 6));
        assert!(form.is_complete());
        assert!(form
            .costs
            .iter()
            .flatten()
            .chain(form.supply.iter())
            .chain(form.demand.iter())
            .filter_map(Form::number)
            .all(|v| v >= RANDOM_VALUE_MIN as f64 && v <= RANDOM_VALUE_MAX as f64));
        assert!(Problem::try_from(form).is_ok());
    }

    #[test]
    fn random_form_fits_bounds() {
        let form = Form::random();
        assert!(form.clone().bounded().is_ok());
        assert!(Problem::try_from(form).is_ok());
    }

    #[test]
    fn reads_json_with_mixed_fields() {
        let json = r#"{ "costs": [[4, "6"], [5, 3]], "supply": [20, 30], "demand": ["25", null] }"#;
        let form = serde_json::from_str::<Form>(json).unwrap();
        assert_eq!(Problem::try_from(form), Err(ValidationError::IncompleteInput));
    }
}
