use crate::transport::Problem;

/// Human-facing name of a row or column of a solved problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Real origin, 0-based.
    Origin(usize),
    /// Real destination, 0-based.
    Destination(usize),
    DummyOrigin,
    DummyDestination,
}

impl Label {
    pub fn origin(problem: &Problem, i: usize) -> Self {
        if problem.is_dummy_origin(i) {
            Self::DummyOrigin
        } else {
            Self::Origin(i)
        }
    }
    pub fn destination(problem: &Problem, j: usize) -> Self {
        if problem.is_dummy_destination(j) {
            Self::DummyDestination
        } else {
            Self::Destination(j)
        }
    }
    /// Compact form for table headers.
    pub fn short(&self) -> String {
        match self {
            Self::Origin(i) => format!("O{}", i + 1),
            Self::Destination(j) => format!("D{}", j + 1),
            Self::DummyOrigin | Self::DummyDestination => "Dummy".to_string(),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Origin(i) => write!(f, "Origin {}", i + 1),
            Self::Destination(j) => write!(f, "Destination {}", j + 1),
            Self::DummyOrigin => write!(f, "Dummy Origin"),
            Self::DummyDestination => write!(f, "Dummy Destination"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_labels_are_one_based() {
        let problem = Problem::from((vec![vec![1., 2.]], vec![3.], vec![1., 2.]));
        assert_eq!(Label::origin(&problem, 0).to_string(), "Origin 1");
        assert_eq!(Label::destination(&problem, 1).to_string(), "Destination 2");
        assert_eq!(Label::destination(&problem, 1).short(), "D2");
    }

    #[test]
    fn dummy_destination_is_last_column() {
        let problem = Problem::from((vec![vec![2.]], vec![50.], vec![30.]));
        assert_eq!(Label::destination(&problem, 0), Label::Destination(0));
        assert_eq!(Label::destination(&problem, 1), Label::DummyDestination);
        assert_eq!(Label::origin(&problem, 0), Label::Origin(0));
        assert_eq!(Label::destination(&problem, 1).to_string(), "Dummy Destination");
    }

    #[test]
    fn dummy_origin_is_last_row() {
        let problem = Problem::from((vec![vec![2.]], vec![30.], vec![50.]));
        assert_eq!(Label::origin(&problem, 1).to_string(), "Dummy Origin");
        assert_eq!(Label::origin(&problem, 1).short(), "Dummy");
    }
}
