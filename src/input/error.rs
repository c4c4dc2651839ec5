/// Raised while turning raw fields into a [`Problem`](crate::transport::Problem).
///
/// Positions are 1-based, as a user would count rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A cost cell is not a number.
    InvalidCostValue { row: usize, col: usize },
    /// A supply entry is not a number.
    InvalidSupplyValue { row: usize },
    /// A demand entry is not a number.
    InvalidDemandValue { col: usize },
    /// Some required field is missing or blank.
    IncompleteInput,
    /// No origins or no destinations, or a table outside the accepted size.
    InvalidDimensions { rows: usize, cols: usize },
    /// The cost matrix is not `rows × cols`.
    MismatchedShape { rows: usize, cols: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCostValue { row, col } => write!(f, "invalid cost in cell ({}, {}), enter a valid number", row, col),
            Self::InvalidSupplyValue { row } => write!(f, "invalid supply in row {}, enter a valid number", row),
            Self::InvalidDemandValue { col } => write!(f, "invalid demand in column {}, enter a valid number", col),
            Self::IncompleteInput => write!(f, "fill in every field of the table before solving"),
            Self::InvalidDimensions { rows, cols } => write!(f, "invalid table size {} x {}", rows, cols),
            Self::MismatchedShape { rows, cols } => write!(
                f,
                "cost matrix must be {} x {} (one row per supply value, one column per demand value)",
                rows, cols
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_one_based_positions() {
        let e = ValidationError::InvalidCostValue { row: 2, col: 3 };
        assert_eq!(e.to_string(), "invalid cost in cell (2, 3), enter a valid number");
        let e = ValidationError::InvalidDemandValue { col: 1 };
        assert_eq!(e.to_string(), "invalid demand in column 1, enter a valid number");
    }

    #[test]
    fn converts_into_anyhow() {
        let e = anyhow::Error::from(ValidationError::IncompleteInput);
        assert!(e.downcast_ref::<ValidationError>().is_some());
    }
}
