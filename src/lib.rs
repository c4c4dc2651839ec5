//! Minimum-cost heuristic for the transportation problem.
//!
//! Given supply at each origin, demand at each destination and a unit-cost
//! matrix, [`transport::MinimumCost`] fills the cheapest feasible cell again
//! and again until every unit has been shipped, recording each step.
//! Unbalanced problems are closed with a zero-cost dummy origin or
//! destination before solving.
//!
//! ## Modules
//!
//! - [`transport`] — problem, balancing, the greedy allocator and its trace
//! - [`input`] — raw field validation and random problem generation
//! - [`report`] — labelled text and JSON rendering of a solved problem
//! - `cli` — command-line front end (feature `cli`)

pub mod input;
pub mod report;
pub mod transport;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Unit transportation costs and accumulated plan costs.
pub type Cost = f64;
/// Supply, demand and shipped amounts.
pub type Quantity = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and demo data.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// INPUT LIMITS
// ============================================================================
/// Largest number of origins or destinations accepted by the prompt
/// and produced by the random generator.
pub const MAX_DIMENSION: usize = 10;
/// Smallest randomly generated cost, supply or demand value.
pub const RANDOM_VALUE_MIN: u32 = 1;
/// Largest randomly generated cost, supply or demand value.
pub const RANDOM_VALUE_MAX: u32 = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging: terminal on stderr, plus an optional DEBUG file log.
/// Stdout is left clean for reports and JSON output.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
