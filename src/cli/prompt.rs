use crate::MAX_DIMENSION;
use crate::input::Field;
use crate::input::Form;
use crate::input::ValidationError;
use crate::transport::Problem;
use anyhow::Context;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Input;

/// Interactive table entry on the terminal.
///
/// Every attempt starts from a fresh [`Form`]; a rejected table is
/// discarded and the user may start over.
pub struct Prompt;

impl Prompt {
    pub fn problem() -> anyhow::Result<Problem> {
        loop {
            let rows = Self::size("origins")?;
            let cols = Self::size("destinations")?;
            let attempt = match Form::new(rows, cols).bounded() {
                Ok(form) => Problem::try_from(Self::fill(form)?),
                Err(e) => Err(e),
            };
            match attempt {
                Ok(problem) => return Ok(problem),
                Err(e) => Self::retry(e)?,
            }
        }
    }

    fn size(what: &str) -> anyhow::Result<usize> {
        Input::<usize>::new()
            .with_prompt(format!("number of {} (1-{})", what, MAX_DIMENSION))
            .interact_text()
            .with_context(|| format!("read number of {}", what))
    }

    fn field(prompt: String) -> anyhow::Result<Field> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Field::from)
            .context("read table field")
    }

    fn fill(form: Form) -> anyhow::Result<Form> {
        let random = Confirm::new()
            .with_prompt("fill the table with random values?")
            .default(false)
            .interact()
            .context("read confirmation")?;
        if random {
            let (rows, cols) = (form.rows(), form.cols());
            return Ok(Form::sample(&mut rand::rng(), rows, cols));
        }
        let mut form = form;
        for i in 0..form.rows() {
            for j in 0..form.cols() {
                form.set_cost(i, j, Self::field(format!("cost ({}, {})", i + 1, j + 1))?);
            }
            form.set_supply(i, Self::field(format!("supply of origin {}", i + 1))?);
        }
        for j in 0..form.cols() {
            form.set_demand(j, Self::field(format!("demand of destination {}", j + 1))?);
        }
        Ok(form)
    }

    fn retry(e: ValidationError) -> anyhow::Result<()> {
        eprintln!("{} {}", "validation error:".red().bold(), e);
        let again = Confirm::new()
            .with_prompt("start over?")
            .default(true)
            .interact()
            .context("read confirmation")?;
        match again {
            true => Ok(()),
            false => Err(e.into()),
        }
    }
}
