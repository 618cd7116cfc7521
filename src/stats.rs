//! Proportional-selection statistics.
//!
//! [`generation_report`] scores a whole population and returns the fitness
//! table as structured records, leaving rendering to the caller. It never
//! mutates the population.
//!
//! Actual counts use per-entry nearest-integer rounding via [`f64::round`]
//! (ties round half away from zero) and are deliberately not renormalized,
//! so they need not sum to the population size.

use crate::chromosome::Chromosome;
use crate::objective::Objective;
use crate::population::Population;

/// One row of the fitness table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessRow {
    /// The scored chromosome.
    pub chromosome: Chromosome,
    /// Decoded value(s) behind the fitness (one per objective field).
    pub decoded: Vec<u64>,
    /// Non-negative fitness score.
    pub fitness: f64,
    /// `fitness / total_fitness`, or 0 when the total is 0.
    pub probability: f64,
    /// `probability × N`.
    pub expected_count: f64,
    /// Nearest-integer rounding of the expected count.
    pub actual_count: u64,
}

/// Fitness statistics for one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// One row per chromosome, in population order.
    pub rows: Vec<FitnessRow>,
    /// Sum of all fitness values.
    pub total_fitness: f64,
    /// Highest fitness in the population (the convergence signal).
    pub max_fitness: f64,
    /// `total_fitness / N`.
    pub avg_fitness: f64,
}

impl GenerationReport {
    /// The row with the highest fitness.
    pub fn best(&self) -> &FitnessRow {
        self.rows
            .iter()
            .max_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("report has at least one row")
    }
}

/// Evaluates the population and computes the per-chromosome selection
/// statistics.
///
/// A zero total fitness is a handled case, not an error: probabilities and
/// expected counts all default to zero instead of dividing by zero.
pub fn generation_report<O: Objective + ?Sized>(
    generation: usize,
    population: &Population,
    objective: &O,
) -> GenerationReport {
    let n = population.len() as f64;

    let fitness_values: Vec<f64> = population.iter().map(|c| objective.evaluate(c)).collect();
    let total_fitness: f64 = fitness_values.iter().sum();
    let max_fitness = fitness_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let rows = population
        .iter()
        .zip(fitness_values)
        .map(|(chromosome, fitness)| {
            let probability = if total_fitness == 0.0 {
                0.0
            } else {
                fitness / total_fitness
            };
            let expected_count = probability * n;
            FitnessRow {
                decoded: objective.decode(chromosome),
                chromosome: chromosome.clone(),
                fitness,
                probability,
                expected_count,
                actual_count: expected_count.round() as u64,
            }
        })
        .collect();

    GenerationReport {
        generation,
        rows,
        total_fitness,
        max_fitness,
        avg_fitness: total_fitness / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{AllocationObjective, SquareObjective};

    fn abstract_population() -> Population {
        Population::parse(["01100", "11001", "00101", "10011"]).unwrap()
    }

    #[test]
    fn test_square_fitness_table() {
        let report = generation_report(1, &abstract_population(), &SquareObjective);

        let fitness: Vec<f64> = report.rows.iter().map(|r| r.fitness).collect();
        assert_eq!(fitness, vec![144.0, 625.0, 25.0, 361.0]);
        let decoded: Vec<u64> = report.rows.iter().map(|r| r.decoded[0]).collect();
        assert_eq!(decoded, vec![12, 25, 5, 19]);

        assert_eq!(report.total_fitness, 1155.0);
        assert_eq!(report.max_fitness, 625.0);
        assert_eq!(report.avg_fitness, 288.75);
    }

    #[test]
    fn test_probabilities_and_counts() {
        let report = generation_report(1, &abstract_population(), &SquareObjective);

        assert!((report.rows[0].probability - 144.0 / 1155.0).abs() < 1e-12);
        assert!((report.rows[1].expected_count - 625.0 * 4.0 / 1155.0).abs() < 1e-12);

        let actual: Vec<u64> = report.rows.iter().map(|r| r.actual_count).collect();
        assert_eq!(actual, vec![0, 2, 0, 1]);
    }

    #[test]
    fn test_actual_counts_are_not_renormalized() {
        let report = generation_report(1, &abstract_population(), &SquareObjective);
        let sum: u64 = report.rows.iter().map(|r| r.actual_count).sum();
        // Per-entry rounding drifts; the sum is 3 here, not N = 4.
        assert_eq!(sum, 3);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // The counts use f64::round, which rounds .5 away from zero.
        assert_eq!(2.5_f64.round(), 3.0);
        assert_eq!(0.5_f64.round(), 1.0);

        // Per-entry application: three equal chromosomes plus one with zero
        // fitness give expected counts [4/3, 4/3, 4/3, 0] -> [1, 1, 1, 0].
        let pop = Population::parse(["00011", "00011", "00011", "00000"]).unwrap();
        let report = generation_report(1, &pop, &SquareObjective);
        let actual: Vec<u64> = report.rows.iter().map(|r| r.actual_count).collect();
        assert_eq!(actual, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_zero_total_fitness_is_handled() {
        let pop = Population::parse(["00000", "00000"]).unwrap();
        let report = generation_report(1, &pop, &SquareObjective);

        assert_eq!(report.total_fitness, 0.0);
        assert_eq!(report.max_fitness, 0.0);
        for row in &report.rows {
            assert_eq!(row.probability, 0.0);
            assert_eq!(row.expected_count, 0.0);
            assert_eq!(row.actual_count, 0);
        }
    }

    #[test]
    fn test_allocation_report() {
        let objective = AllocationObjective::new(4, vec![3.0, 5.0, 2.0, 7.0], 30).unwrap();
        let pop = Population::parse([
            "0011001100110011",
            "1111000000001111",
            "0000111100001111",
            "0000000011110111",
        ])
        .unwrap();
        let report = generation_report(1, &pop, &objective);

        let fitness: Vec<f64> = report.rows.iter().map(|r| r.fitness).collect();
        assert_eq!(fitness, vec![51.0, 150.0, 180.0, 79.0]);
        assert_eq!(report.total_fitness, 460.0);
        assert_eq!(report.max_fitness, 180.0);
        assert_eq!(report.avg_fitness, 115.0);

        let actual: Vec<u64> = report.rows.iter().map(|r| r.actual_count).collect();
        assert_eq!(actual, vec![0, 1, 2, 1]);

        assert_eq!(report.rows[3].decoded, vec![0, 0, 15, 7]);
    }

    #[test]
    fn test_best_row() {
        let report = generation_report(1, &abstract_population(), &SquareObjective);
        let best = report.best();
        assert_eq!(best.chromosome.to_string(), "11001");
        assert_eq!(best.fitness, 625.0);
    }
}
