use super::label::Label;
use crate::Quantity;
use crate::transport::Costs;
use crate::transport::Iteration;
use crate::transport::Measure;
use crate::transport::Plan;
use crate::transport::Problem;
use crate::transport::Solution;
use serde::Serialize;
use std::fmt::Formatter;
use std::fmt::Result;

/// A solved problem, ready to print or serialize.
///
/// Serializes to the solution's fields plus the labelling context a
/// consumer needs: dummy flags and the balanced supply, demand and costs.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    has_dummy_origin: bool,
    has_dummy_destination: bool,
    supply: &'a [Quantity],
    demand: &'a [Quantity],
    costs: &'a Costs,
    #[serde(skip)]
    problem: &'a Problem,
}

impl<'a> Report<'a> {
    /// One line summary, for batch output.
    pub fn summary(&self) -> String {
        format!(
            "{}x{} {} steps, total cost {}",
            self.problem.origins(),
            self.problem.destinations(),
            self.solution.iterations.len(),
            self.solution.total_cost
        )
    }
    fn iteration(&self, f: &mut Formatter<'_>, it: &Iteration) -> Result {
        writeln!(f, "Iteration {}", it.index)?;
        writeln!(
            f,
            "{} -> {} | unit cost: {} | quantity: {} | partial cost: {} | running cost: {}",
            Label::origin(self.problem, it.row),
            Label::destination(self.problem, it.col),
            it.unit_cost,
            it.quantity,
            it.partial_cost(),
            it.running_cost
        )?;
        self.table(f, &it.allocations_snapshot, &format!("Allocations - Iteration {}", it.index))
    }
    fn table(&self, f: &mut Formatter<'_>, plan: &Plan, title: &str) -> Result {
        let origins = (0..self.problem.origins())
            .map(|i| Label::origin(self.problem, i).short())
            .collect::<Vec<_>>();
        let destinations = (0..self.problem.destinations())
            .map(|j| Label::destination(self.problem, j).short())
            .collect::<Vec<_>>();
        let cells = plan
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|q| if *q > 0. { q.to_string() } else { String::new() })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let supply = self.problem.supply().iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let demand = self.problem.demand().iter().map(|d| d.to_string()).collect::<Vec<_>>();
        let w = ["O/D", "Supply", "Demand"]
            .iter()
            .map(|s| s.to_string())
            .chain(origins.iter().cloned())
            .chain(destinations.iter().cloned())
            .chain(cells.iter().flatten().cloned())
            .chain(supply.iter().cloned())
            .chain(demand.iter().cloned())
            .map(|s| s.len())
            .max()
            .unwrap_or(0)
            + 2;
        writeln!(f, "{}", title)?;
        write!(f, "{:>w$}", "O/D")?;
        for d in destinations.iter() {
            write!(f, "{:>w$}", d)?;
        }
        writeln!(f, "{:>w$}", "Supply")?;
        for ((o, row), s) in origins.iter().zip(cells.iter()).zip(supply.iter()) {
            write!(f, "{:>w$}", o)?;
            for cell in row.iter() {
                write!(f, "{:>w$}", cell)?;
            }
            writeln!(f, "{:>w$}", s)?;
        }
        write!(f, "{:>w$}", "Demand")?;
        for d in demand.iter() {
            write!(f, "{:>w$}", d)?;
        }
        writeln!(f)
    }
    fn details(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Allocation details:")?;
        for (i, j, q) in self.solution.allocations.cells() {
            let c = self.problem.costs().cost(i, j);
            writeln!(
                f,
                "{} -> {}: {} units (cost: {} each, total: {})",
                Label::origin(self.problem, i),
                Label::destination(self.problem, j),
                q,
                c,
                q * c
            )?;
        }
        Ok(())
    }
}

impl<'a> From<(&'a Problem, &'a Solution)> for Report<'a> {
    fn from((problem, solution): (&'a Problem, &'a Solution)) -> Self {
        Self {
            solution,
            has_dummy_origin: problem.has_dummy_origin(),
            has_dummy_destination: problem.has_dummy_destination(),
            supply: problem.supply(),
            demand: problem.demand(),
            costs: problem.costs(),
            problem,
        }
    }
}

/// Full trace: every iteration with its snapshot, then the final plan.
impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for it in self.solution.iterations.iter() {
            self.iteration(f, it)?;
            writeln!(f)?;
        }
        writeln!(f, "FINAL SOLUTION")?;
        writeln!(f, "Total cost: {}", self.solution.total_cost)?;
        self.table(f, &self.solution.allocations, "Final Solution")?;
        self.details(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced() -> Problem {
        Problem::from((vec![vec![4., 6.], vec![5., 3.]], vec![20., 30.], vec![25., 25.]))
    }

    #[test]
    fn text_trace_lists_every_step() {
        let problem = balanced();
        let solution = problem.solve();
        let text = Report::from((&problem, &solution)).to_string();
        assert!(text.contains("Iteration 1\nOrigin 2 -> Destination 2 | unit cost: 3 | quantity: 25 | partial cost: 75 | running cost: 75"));
        assert!(text.contains("Iteration 3\nOrigin 2 -> Destination 1 | unit cost: 5 | quantity: 5 | partial cost: 25 | running cost: 180"));
        assert!(text.contains("Total cost: 180"));
        assert!(text.contains("Origin 1 -> Destination 1: 20 units (cost: 4 each, total: 80)"));
        assert!(!text.contains("Dummy"));
    }

    #[test]
    fn table_layout() {
        let problem = balanced();
        let solution = problem.solve();
        let text = Report::from((&problem, &solution)).to_string();
        let table = [
            "Final Solution",
            "     O/D      D1      D2  Supply",
            "      O1      20              20",
            "      O2       5      25      30",
            "  Demand      25      25",
        ]
        .join("\n");
        assert!(text.contains(&table));
    }

    #[test]
    fn dummy_destination_is_labelled() {
        let problem = Problem::from((vec![vec![2.]], vec![50.], vec![30.]));
        let solution = problem.solve();
        let text = Report::from((&problem, &solution)).to_string();
        assert!(text.contains("Origin 1 -> Dummy Destination | unit cost: 0 | quantity: 20"));
        assert!(text.contains("Origin 1 -> Dummy Destination: 20 units (cost: 0 each, total: 0)"));
    }

    #[test]
    fn degenerate_report_has_no_iterations() {
        let problem = Problem::from((vec![vec![1.]], vec![0.], vec![0.]));
        let solution = problem.solve();
        let text = Report::from((&problem, &solution)).to_string();
        assert!(!text.contains("Iteration"));
        assert!(text.starts_with("FINAL SOLUTION\nTotal cost: 0\n"));
    }

    #[test]
    fn json_follows_output_contract() {
        let problem = Problem::from((vec![vec![2.]], vec![30.], vec![50.]));
        let solution = problem.solve();
        let json = serde_json::to_value(Report::from((&problem, &solution))).unwrap();
        assert_eq!(json["totalCost"], 60.);
        assert_eq!(json["hasDummyOrigin"], true);
        assert_eq!(json["hasDummyDestination"], false);
        assert_eq!(json["supply"], serde_json::json!([30., 20.]));
        assert_eq!(json["costs"], serde_json::json!([[2.], [0.]]));
        assert_eq!(json["allocations"], serde_json::json!([[30.], [20.]]));
        let first = &json["iterations"][0];
        assert_eq!(first["index"], 1);
        assert_eq!(first["row"], 1);
        assert_eq!(first["col"], 0);
        assert_eq!(first["unitCost"], 0.);
        assert_eq!(first["quantity"], 20.);
        assert_eq!(first["runningCost"], 0.);
        assert_eq!(first["allocationsSnapshot"], serde_json::json!([[0.], [20.]]));
        assert_eq!(first["remainingSupply"], serde_json::json!([30., 0.]));
        assert_eq!(first["remainingDemand"], serde_json::json!([30.]));
    }

    #[test]
    fn summary_line() {
        let problem = balanced();
        let solution = problem.solve();
        assert_eq!(Report::from((&problem, &solution)).summary(), "2x2 3 steps, total cost 180");
    }
}
