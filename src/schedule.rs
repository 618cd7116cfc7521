//! Per-generation operator parameters.
//!
//! The evolutionary loop itself carries no randomness: crossover points and
//! mutation masks come from a [`Schedule`], which a caller implements or
//! picks from the built-ins. [`FixedSchedule`] replays the same parameters
//! every generation; [`RotatingSchedule`] walks the crossover point and a
//! single mutation flip through the chromosome, one position per generation.

use crate::chromosome::MutationMask;

/// Crossover parameters for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossoverSpec {
    /// Number of leading chromosomes forming the mating pool.
    pub pool_size: usize,
    /// Bit index swapped within each pool pair.
    pub bit_position: usize,
}

/// Supplies crossover parameters and mutation masks per generation.
///
/// Generations are numbered from 1. Implementations must be deterministic
/// in their inputs to keep runs reproducible; anything random belongs in
/// the caller-built mask set, not the loop.
pub trait Schedule {
    /// Crossover parameters for `generation`.
    fn crossover(
        &self,
        generation: usize,
        population_size: usize,
        chromosome_length: usize,
    ) -> CrossoverSpec;

    /// One mutation mask per chromosome for `generation`.
    fn masks(
        &self,
        generation: usize,
        population_size: usize,
        chromosome_length: usize,
    ) -> Vec<MutationMask>;
}

/// Same crossover parameters and masks every generation.
///
/// With no masks supplied, mutation is the identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSchedule {
    spec: CrossoverSpec,
    masks: Option<Vec<MutationMask>>,
}

impl FixedSchedule {
    /// Repeats `spec` and `masks` every generation.
    pub fn new(spec: CrossoverSpec, masks: Vec<MutationMask>) -> Self {
        Self {
            spec,
            masks: Some(masks),
        }
    }

    /// Repeats `spec` with all-zero (identity) masks.
    pub fn without_mutation(spec: CrossoverSpec) -> Self {
        Self { spec, masks: None }
    }
}

impl Schedule for FixedSchedule {
    fn crossover(&self, _generation: usize, _n: usize, _length: usize) -> CrossoverSpec {
        self.spec
    }

    fn masks(&self, _generation: usize, n: usize, length: usize) -> Vec<MutationMask> {
        match &self.masks {
            Some(masks) => masks.clone(),
            None => vec![MutationMask::zeros(length); n],
        }
    }
}

/// Rotates the crossover point and mutation site through the chromosome.
///
/// Generation `g` crosses over at bit `g % L` and gives chromosome `i` a
/// single-flip mask at bit `(g + i) % L`, so successive generations mix
/// every bit position in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotatingSchedule {
    /// Mating pool size used every generation.
    pub pool_size: usize,
}

impl Schedule for RotatingSchedule {
    fn crossover(&self, generation: usize, _n: usize, length: usize) -> CrossoverSpec {
        CrossoverSpec {
            pool_size: self.pool_size,
            bit_position: generation % length,
        }
    }

    fn masks(&self, generation: usize, n: usize, length: usize) -> Vec<MutationMask> {
        (0..n)
            .map(|i| MutationMask::single_flip(length, (generation + i) % length))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_schedule_repeats() {
        let spec = CrossoverSpec {
            pool_size: 4,
            bit_position: 2,
        };
        let masks = vec!["10000".parse().unwrap(), "00001".parse().unwrap()];
        let schedule = FixedSchedule::new(spec, masks.clone());

        for generation in 1..=3 {
            assert_eq!(schedule.crossover(generation, 2, 5), spec);
            assert_eq!(schedule.masks(generation, 2, 5), masks);
        }
    }

    #[test]
    fn test_fixed_schedule_without_mutation_is_identity_masks() {
        let schedule = FixedSchedule::without_mutation(CrossoverSpec {
            pool_size: 2,
            bit_position: 0,
        });
        let masks = schedule.masks(1, 3, 4);
        assert_eq!(masks, vec![MutationMask::zeros(4); 3]);
    }

    #[test]
    fn test_rotating_schedule_walks_bit_positions() {
        let schedule = RotatingSchedule { pool_size: 4 };
        assert_eq!(schedule.crossover(1, 4, 16).bit_position, 1);
        assert_eq!(schedule.crossover(5, 4, 16).bit_position, 5);
        assert_eq!(schedule.crossover(16, 4, 16).bit_position, 0);
    }

    #[test]
    fn test_rotating_schedule_masks_flip_staggered_bits() {
        let schedule = RotatingSchedule { pool_size: 4 };
        let masks = schedule.masks(3, 4, 16);
        let expected: Vec<MutationMask> = (0..4)
            .map(|i| MutationMask::single_flip(16, 3 + i))
            .collect();
        assert_eq!(masks, expected);
    }

    #[test]
    fn test_rotating_schedule_masks_wrap_around() {
        let schedule = RotatingSchedule { pool_size: 2 };
        let masks = schedule.masks(4, 3, 5);
        // Positions (4+0)%5, (4+1)%5, (4+2)%5 = 4, 0, 1.
        assert_eq!(masks[0], MutationMask::single_flip(5, 4));
        assert_eq!(masks[1], MutationMask::single_flip(5, 0));
        assert_eq!(masks[2], MutationMask::single_flip(5, 1));
    }
}
