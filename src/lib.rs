//! Evolutionary loop over fixed-length binary chromosomes.
//!
//! A small, self-contained genetic algorithm core: fitness evaluation,
//! proportional-selection statistics, single-bit mating-pool crossover, and
//! mask-based mutation, iterated until the max fitness stabilizes or a
//! generation budget runs out.
//!
//! # Core Traits
//!
//! - [`Objective`]: scores a chromosome — plug in any fitness function
//! - [`Schedule`]: supplies per-generation crossover parameters and
//!   mutation masks, keeping the loop itself deterministic
//!
//! # Key Types
//!
//! - [`Chromosome`] / [`MutationMask`]: validated binary strings
//! - [`Population`]: ordered, uniform-length chromosome collection
//! - [`GenerationReport`]: structured fitness table (probabilities,
//!   expected and actual counts) for the caller to render
//! - [`Evolver`] / [`EvolveOutcome`]: the loop and its result
//!
//! # Example
//!
//! ```
//! use bitga::{
//!     AllocationObjective, Evolver, EvolverConfig, Population, RotatingSchedule,
//! };
//!
//! let population = Population::parse([
//!     "0011001100110011",
//!     "1111000000001111",
//!     "0000111100001111",
//!     "0000000011110111",
//! ])?;
//! let objective = AllocationObjective::new(4, vec![3.0, 5.0, 2.0, 7.0], 30)?;
//! let config = EvolverConfig::default().with_budget(5);
//!
//! let outcome = Evolver::run(
//!     population,
//!     &objective,
//!     &RotatingSchedule { pool_size: 4 },
//!     &config,
//! )?;
//!
//! assert_eq!(outcome.reports.len(), 5);
//! println!("best {} with fitness {}", outcome.best, outcome.best_fitness);
//! # Ok::<(), bitga::GaError>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod chromosome;
mod config;
mod error;
mod objective;
mod operators;
mod population;
mod runner;
mod schedule;
mod stats;

pub use chromosome::{Chromosome, MutationMask, MAX_DECODE_BITS};
pub use config::{EvolverConfig, Termination};
pub use error::GaError;
pub use objective::{AllocationObjective, Objective, SquareObjective};
pub use operators::{apply_masks, mating_pool_crossover};
pub use population::Population;
pub use runner::{EvolveOutcome, Evolver};
pub use schedule::{CrossoverSpec, FixedSchedule, RotatingSchedule, Schedule};
pub use stats::{generation_report, FitnessRow, GenerationReport};
