//! Fitness objectives.
//!
//! [`Objective`] is the seam between the generic evolutionary loop and the
//! problem being optimized: any type that can score a chromosome plugs in.
//! Fitness is maximized and must be non-negative — the selection statistics
//! interpret scores as proportional-selection weights.
//!
//! Two objectives ship with the crate:
//!
//! - [`SquareObjective`]: decode the chromosome as one unsigned integer `x`,
//!   fitness `x²`.
//! - [`AllocationObjective`]: decode equal-width fields as per-project
//!   allocations, fitness `Σ allocationᵢ · valueᵢ` under a shared resource
//!   cap, zero when the cap is exceeded.

use crate::chromosome::{Chromosome, MAX_DECODE_BITS};
use crate::error::GaError;

/// Scores chromosomes for the evolutionary loop.
///
/// Implementations must be pure: the same chromosome always yields the same
/// fitness and decoded values.
pub trait Objective {
    /// Non-negative fitness of the chromosome; higher is better.
    fn evaluate(&self, chromosome: &Chromosome) -> f64;

    /// The decoded value(s) behind the fitness, for reporting.
    ///
    /// One entry for scalar encodings, one per field for composite ones.
    fn decode(&self, chromosome: &Chromosome) -> Vec<u64>;

    /// Verifies the objective can score chromosomes of the given length.
    ///
    /// Called once before the loop starts; [`evaluate`](Self::evaluate) and
    /// [`decode`](Self::decode) may assume a length that passed this check.
    fn check_length(&self, chromosome_length: usize) -> Result<(), GaError>;
}

/// `fitness(x) = x²` over the chromosome decoded as one unsigned integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareObjective;

impl Objective for SquareObjective {
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let x = chromosome.value() as f64;
        x * x
    }

    fn decode(&self, chromosome: &Chromosome) -> Vec<u64> {
        vec![chromosome.value()]
    }

    fn check_length(&self, chromosome_length: usize) -> Result<(), GaError> {
        if chromosome_length > MAX_DECODE_BITS {
            return Err(GaError::ChromosomeTooWide {
                length: chromosome_length,
                max: MAX_DECODE_BITS,
            });
        }
        Ok(())
    }
}

/// Knapsack-style resource allocation over fixed-width chromosome fields.
///
/// The chromosome splits into one `field_width`-bit field per project value;
/// each field decodes to that project's allocation. Fitness is the total
/// weighted value, forced to zero when the summed allocations exceed the
/// resource limit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationObjective {
    field_width: usize,
    values: Vec<f64>,
    resource_limit: u64,
}

impl AllocationObjective {
    /// Builds an allocation objective with one `field_width`-bit field per
    /// entry of `values`.
    pub fn new(field_width: usize, values: Vec<f64>, resource_limit: u64) -> Result<Self, GaError> {
        if field_width == 0 || field_width > MAX_DECODE_BITS {
            return Err(GaError::InvalidFieldWidth { field_width });
        }
        if values.is_empty() {
            return Err(GaError::NoProjectValues);
        }
        Ok(Self {
            field_width,
            values,
            resource_limit,
        })
    }

    /// Number of allocation fields.
    pub fn fields(&self) -> usize {
        self.values.len()
    }

    /// Bits per allocation field.
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    /// Cap on the summed allocations.
    pub fn resource_limit(&self) -> u64 {
        self.resource_limit
    }
}

impl Objective for AllocationObjective {
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let allocations = self.decode(chromosome);
        let total: u64 = allocations.iter().sum();
        if total > self.resource_limit {
            return 0.0;
        }
        allocations
            .iter()
            .zip(&self.values)
            .map(|(&a, &v)| a as f64 * v)
            .sum()
    }

    fn decode(&self, chromosome: &Chromosome) -> Vec<u64> {
        (0..self.fields())
            .map(|i| chromosome.field_value(i * self.field_width, self.field_width))
            .collect()
    }

    fn check_length(&self, chromosome_length: usize) -> Result<(), GaError> {
        if chromosome_length != self.fields() * self.field_width {
            return Err(GaError::FieldLayoutMismatch {
                length: chromosome_length,
                fields: self.fields(),
                field_width: self.field_width,
            });
        }
        Ok(())
    }
}
