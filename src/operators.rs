//! Bit-level genetic operators on populations.
//!
//! Both operators are pure transforms: they validate their parameters,
//! build the next population, and leave the input untouched.
//!
//! - [`mating_pool_crossover`]: single-bit swap across disjoint consecutive
//!   pairs of the leading mating pool.
//! - [`apply_masks`]: mask-based mutation, one mask per chromosome.

use crate::chromosome::MutationMask;
use crate::error::GaError;
use crate::population::Population;

/// Single-bit mating-pool crossover.
///
/// The first `pool_size` chromosomes form the mating pool. Pool entries are
/// processed in disjoint consecutive pairs (0,1), (2,3), …; each pair swaps
/// the bit at `bit_position`. Chromosomes outside the pool carry over
/// unchanged.
///
/// `pool_size` must be even, positive, and at most the population size;
/// `bit_position` must index into the chromosome. An odd pool size is a
/// validation error rather than an implicitly unpaired trailing chromosome.
///
/// # Complexity
/// O(N·L) for the population copy; the swaps themselves are O(pool_size).
pub fn mating_pool_crossover(
    population: &Population,
    pool_size: usize,
    bit_position: usize,
) -> Result<Population, GaError> {
    let n = population.len();
    let length = population.chromosome_length();

    if pool_size == 0 || pool_size % 2 != 0 {
        return Err(GaError::InvalidPoolSize { pool_size });
    }
    if pool_size > n {
        return Err(GaError::PoolExceedsPopulation {
            pool_size,
            population_size: n,
        });
    }
    if bit_position >= length {
        return Err(GaError::BitPositionOutOfRange {
            bit_position,
            chromosome_length: length,
        });
    }

    let mut chromosomes = population.as_slice().to_vec();
    for pair in chromosomes[..pool_size].chunks_exact_mut(2) {
        let a = pair[0].bit(bit_position);
        let b = pair[1].bit(bit_position);
        pair[0].set_bit(bit_position, b);
        pair[1].set_bit(bit_position, a);
    }

    Ok(Population { chromosomes })
}

/// Mask-based mutation.
///
/// Requires exactly one mask per chromosome, each of chromosome length.
/// Every bit position where the mask holds a 1 is flipped; 0 positions are
/// unchanged. An all-ones mask is the bitwise complement, an all-zeros mask
/// the identity.
pub fn apply_masks(
    population: &Population,
    masks: &[MutationMask],
) -> Result<Population, GaError> {
    let n = population.len();
    let length = population.chromosome_length();

    if masks.len() != n {
        return Err(GaError::MaskCountMismatch {
            expected: n,
            found: masks.len(),
        });
    }
    for (index, mask) in masks.iter().enumerate() {
        if mask.len() != length {
            return Err(GaError::MaskLengthMismatch {
                index,
                expected: length,
                found: mask.len(),
            });
        }
    }

    let mut chromosomes = population.as_slice().to_vec();
    for (chrom, mask) in chromosomes.iter_mut().zip(masks) {
        for position in 0..length {
            if mask.bit(position) {
                chrom.flip(position);
            }
        }
    }

    Ok(Population { chromosomes })
}
