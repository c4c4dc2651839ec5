use super::batch::Batch;
use super::prompt::Prompt;
use crate::input::Form;
use crate::report::Report;
use crate::transport::Problem;
use crate::transport::Solution;
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Minimum-cost heuristic for transportation problems", long_about = None)]
pub struct Args {
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Raise log verbosity (repeatable)")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Also write debug logs to this file")]
    pub log_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Print reports as JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Solve a problem read from a JSON file")]
    Solve {
        #[arg(required = true)]
        path: PathBuf,
    },
    #[command(about = "Solve randomly generated problems", alias = "rand")]
    Random {
        #[arg(long, help = "Number of origins (random if omitted)")]
        rows: Option<usize>,
        #[arg(long, help = "Number of destinations (random if omitted)")]
        cols: Option<usize>,
        #[arg(long, help = "Seed for reproducible problems")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, help = "Number of independent problems")]
        count: usize,
    },
    #[command(about = "Enter a problem interactively")]
    Prompt,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Solve { ref path } => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read problem file {}", path.display()))?;
                let form = serde_json::from_str::<Form>(&text)
                    .with_context(|| format!("parse problem file {}", path.display()))?;
                let problem = Problem::try_from(form)?;
                self.emit(&problem, &problem.solve())
            }
            Command::Random {
                rows,
                cols,
                seed,
                count,
            } => {
                let seed = seed.unwrap_or_else(rand::random);
                log::info!("generating {} random problem(s) from seed {}", count, seed);
                let solved = Batch::new(rows, cols, seed, count).solve()?;
                match solved.as_slice() {
                    [(problem, solution)] => self.emit(problem, solution),
                    _ => self.emit_all(&solved),
                }
            }
            Command::Prompt => {
                let problem = Prompt::problem()?;
                self.emit(&problem, &problem.solve())
            }
        }
    }

    fn emit(&self, problem: &Problem, solution: &Solution) -> anyhow::Result<()> {
        let report = Report::from((problem, solution));
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
        } else {
            println!("{}", "minimum-cost allocation".bold().green());
            println!("{}", report);
        }
        Ok(())
    }

    fn emit_all(&self, solved: &[(Problem, Solution)]) -> anyhow::Result<()> {
        let reports = solved
            .iter()
            .map(|(problem, solution)| Report::from((problem, solution)))
            .collect::<Vec<_>>();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&reports).context("serialize reports")?);
        } else {
            for (k, report) in reports.iter().enumerate() {
                println!("{} {}", format!("#{:<4}", k + 1).as_str().bold(), report.summary());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_random_subcommand() {
        let args = Args::try_parse_from(["mincost", "-vv", "rand", "--rows", "3", "--seed", "9", "--json"]).unwrap();
        assert_eq!(args.level(), log::LevelFilter::Debug);
        assert!(args.json);
        match args.command {
            Command::Random { rows, cols, seed, count } => {
                assert_eq!(rows, Some(3));
                assert_eq!(cols, None);
                assert_eq!(seed, Some(9));
                assert_eq!(count, 1);
            }
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn solve_requires_path() {
        assert!(Args::try_parse_from(["mincost", "solve"]).is_err());
        let args = Args::try_parse_from(["mincost", "solve", "table.json"]).unwrap();
        assert_eq!(args.level(), log::LevelFilter::Warn);
        assert!(matches!(args.command, Command::Solve { .. }));
    }
}
