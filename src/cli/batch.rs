use crate::MAX_DIMENSION;
use crate::input::Form;
use crate::input::ValidationError;
use crate::transport::Problem;
use crate::transport::Solution;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Independent random problems, solved in parallel.
///
/// Problem `k` is generated from `seed + k`, so a batch is reproducible
/// regardless of scheduling. Each worker owns its own [`Problem`].
pub struct Batch {
    rows: Option<usize>,
    cols: Option<usize>,
    seed: u64,
    count: usize,
}

impl Batch {
    pub fn new(rows: Option<usize>, cols: Option<usize>, seed: u64, count: usize) -> Self {
        Self {
            rows,
            cols,
            seed,
            count,
        }
    }

    pub fn problem(&self, k: usize) -> Result<Problem, ValidationError> {
        let ref mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(k as u64));
        let rows = self.rows.unwrap_or_else(|| rng.random_range(1..=MAX_DIMENSION));
        let cols = self.cols.unwrap_or_else(|| rng.random_range(1..=MAX_DIMENSION));
        Problem::try_from(Form::sample(rng, rows, cols).bounded()?)
    }

    pub fn solve(&self) -> Result<Vec<(Problem, Solution)>, ValidationError> {
        (0..self.count)
            .into_par_iter()
            .map(|k| self.problem(k))
            .map(|problem| {
                problem.map(|problem| {
                    let solution = problem.solve();
                    (problem, solution)
                })
            })
            .collect()
    }
}
