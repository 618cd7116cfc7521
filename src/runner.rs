//! The evolutionary loop.
//!
//! [`Evolver::run`] orchestrates the complete process: validate inputs, then
//! evaluate → check termination → crossover → mutate → repeat, returning the
//! evolved population together with every generation's fitness report.

use crate::config::{EvolverConfig, Termination};
use crate::error::GaError;
use crate::objective::Objective;
use crate::operators::{apply_masks, mating_pool_crossover};
use crate::population::Population;
use crate::schedule::Schedule;
use crate::stats::{generation_report, GenerationReport};
use crate::Chromosome;

/// Result of an evolutionary run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveOutcome {
    /// The population as it stood when the loop stopped.
    pub population: Population,

    /// One fitness report per evaluated generation, in order.
    pub reports: Vec<GenerationReport>,

    /// Number of evaluated generations (same as `reports.len()`).
    pub generations: usize,

    /// Whether the run stopped because the max fitness stabilized
    /// (always `false` under a generation budget).
    pub converged: bool,

    /// Best chromosome observed across all evaluated generations.
    pub best: Chromosome,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use bitga::{Evolver, EvolverConfig, Population, RotatingSchedule, SquareObjective};
///
/// let population = Population::parse(["01100", "11001", "00101", "10011"])?;
/// let config = EvolverConfig::default().with_budget(3);
/// let outcome = Evolver::run(
///     population,
///     &SquareObjective,
///     &RotatingSchedule { pool_size: 4 },
///     &config,
/// )?;
/// assert_eq!(outcome.generations, 3);
/// # Ok::<(), bitga::GaError>(())
/// ```
pub struct Evolver;

impl Evolver {
    /// Runs the loop until the configured termination policy fires.
    ///
    /// Validation happens before the first generation: the configuration,
    /// the objective's fit to the chromosome length, and every per-generation
    /// crossover/mask parameter the schedule produces. Under
    /// [`Termination::Stabilized`] the loop ends on the second of two
    /// consecutive evaluations with an equal (or epsilon-close) max fitness,
    /// without running another crossover/mutation pass; under
    /// [`Termination::Budget`] it ends after exactly that many full
    /// generations.
    pub fn run<O, S>(
        population: Population,
        objective: &O,
        schedule: &S,
        config: &EvolverConfig,
    ) -> Result<EvolveOutcome, GaError>
    where
        O: Objective,
        S: Schedule,
    {
        config.validate()?;
        objective.check_length(population.chromosome_length())?;

        let n = population.len();
        let length = population.chromosome_length();

        let mut population = population;
        let mut reports: Vec<GenerationReport> = Vec::new();
        let mut prev_max: Option<f64> = None;
        let mut converged = false;
        let mut generation = 1usize;

        loop {
            let report = generation_report(generation, &population, objective);
            let max_fitness = report.max_fitness;
            reports.push(report);

            if let Termination::Stabilized { epsilon } = config.termination {
                if let Some(prev) = prev_max {
                    if max_fitness == prev || (max_fitness - prev).abs() < epsilon {
                        converged = true;
                        break;
                    }
                }
                prev_max = Some(max_fitness);
            }

            let spec = schedule.crossover(generation, n, length);
            if config.pool_size_within_length && spec.pool_size > length {
                return Err(GaError::PoolExceedsLength {
                    pool_size: spec.pool_size,
                    chromosome_length: length,
                });
            }
            population = mating_pool_crossover(&population, spec.pool_size, spec.bit_position)?;

            let masks = schedule.masks(generation, n, length);
            population = apply_masks(&population, &masks)?;

            if let Termination::Budget { generations } = config.termination {
                if generation >= generations {
                    break;
                }
            }
            generation += 1;
        }

        let (best, best_fitness) = reports
            .iter()
            .flat_map(|r| r.rows.iter())
            .max_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|row| (row.chromosome.clone(), row.fitness))
            .expect("at least one evaluated generation");

        Ok(EvolveOutcome {
            generations: reports.len(),
            converged,
            best,
            best_fitness,
            reports,
            population,
        })
    }
}
