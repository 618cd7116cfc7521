//! Error type for population, operator, and configuration validation.
//!
//! Every invalid input is rejected up front, before the evolutionary loop
//! runs. All operations are deterministic, so a failure is permanent until
//! the caller supplies corrected input; there is nothing to retry.

use thiserror::Error;

/// Validation errors surfaced by the GA core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// A chromosome or mask string contained a character other than '0'/'1'.
    #[error("invalid symbol {symbol:?} at position {index}; expected '0' or '1'")]
    InvalidSymbol { index: usize, symbol: char },

    /// Chromosomes must contain at least one bit.
    #[error("chromosome must contain at least one bit")]
    EmptyChromosome,

    /// Populations must contain at least one chromosome.
    #[error("population must contain at least one chromosome")]
    EmptyPopulation,

    /// A population entry did not match the length of the first entry.
    #[error("chromosome {index} has length {found}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A chromosome is too wide to decode as a single unsigned integer.
    #[error("chromosome length {length} exceeds the {max}-bit decoding limit")]
    ChromosomeTooWide { length: usize, max: usize },

    /// Chromosome length is not `fields * field_width`.
    #[error("chromosome length {length} does not fit {fields} fields of {field_width} bits")]
    FieldLayoutMismatch {
        length: usize,
        fields: usize,
        field_width: usize,
    },

    /// Allocation field width must fit in an unsigned 64-bit decode.
    #[error("field width {field_width} must be between 1 and 64 bits")]
    InvalidFieldWidth { field_width: usize },

    /// The allocation objective needs at least one per-field value.
    #[error("allocation objective needs at least one project value")]
    NoProjectValues,

    /// Mating pool size must be positive and even.
    #[error("mating pool size {pool_size} must be a positive even number")]
    InvalidPoolSize { pool_size: usize },

    /// Mating pool cannot be larger than the population.
    #[error("mating pool size {pool_size} exceeds population size {population_size}")]
    PoolExceedsPopulation {
        pool_size: usize,
        population_size: usize,
    },

    /// Pool size capped by chromosome length (configurable rule, see
    /// [`EvolverConfig::pool_size_within_length`](crate::EvolverConfig)).
    #[error("mating pool size {pool_size} exceeds chromosome length {chromosome_length}")]
    PoolExceedsLength {
        pool_size: usize,
        chromosome_length: usize,
    },

    /// Crossover bit position must index into the chromosome.
    #[error("crossover bit position {bit_position} is out of range for length {chromosome_length}")]
    BitPositionOutOfRange {
        bit_position: usize,
        chromosome_length: usize,
    },

    /// Mutation requires exactly one mask per chromosome.
    #[error("expected {expected} mutation masks, got {found}")]
    MaskCountMismatch { expected: usize, found: usize },

    /// A mutation mask did not match the chromosome length.
    #[error("mutation mask {index} has length {found}, expected {expected}")]
    MaskLengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A fixed generation budget must run at least one generation.
    #[error("generation budget must be at least 1")]
    ZeroBudget,

    /// Stabilization epsilon must be non-negative.
    #[error("stabilization epsilon must be non-negative")]
    NegativeEpsilon,
}
