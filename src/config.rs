//! Evolver configuration.
//!
//! [`EvolverConfig`] holds the parameters that control the evolutionary
//! loop: the termination policy and the pool-size validation rule.

use crate::error::GaError;

/// When the evolutionary loop stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop when the population's max fitness stabilizes: the loop
    /// terminates on the second of two consecutive evaluations whose max
    /// fitness is equal or differs by less than `epsilon`.
    Stabilized {
        /// Absolute tolerance on the max-fitness difference.
        epsilon: f64,
    },

    /// Stop unconditionally after a fixed number of generations, each one
    /// a full evaluate → crossover → mutate pass.
    Budget {
        /// Number of generations to run; must be at least 1.
        generations: usize,
    },
}

impl Default for Termination {
    fn default() -> Self {
        Termination::Stabilized { epsilon: 1e-5 }
    }
}

/// Configuration for [`Evolver::run`](crate::Evolver::run).
///
/// # Builder Pattern
///
/// ```
/// use bitga::EvolverConfig;
///
/// let config = EvolverConfig::default().with_budget(5);
/// let config = EvolverConfig::default().with_epsilon(1e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Termination policy. Defaults to fitness stabilization with an
    /// epsilon of 1e-5.
    pub termination: Termination,

    /// Whether to also cap the mating pool size at the chromosome length.
    ///
    /// The classic workflow ties the pool size to the bit-position range;
    /// structurally only `pool_size <= N` is required, so the cap is a
    /// validation rule that can be switched off. Defaults to on.
    pub pool_size_within_length: bool,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            termination: Termination::default(),
            pool_size_within_length: true,
        }
    }
}

impl EvolverConfig {
    /// Sets the termination policy.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Switches to a fixed generation budget.
    pub fn with_budget(self, generations: usize) -> Self {
        self.with_termination(Termination::Budget { generations })
    }

    /// Switches to stabilization-based termination with the given epsilon.
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        self.with_termination(Termination::Stabilized { epsilon })
    }

    /// Enables or disables the chromosome-length cap on the pool size.
    pub fn with_pool_size_within_length(mut self, enabled: bool) -> Self {
        self.pool_size_within_length = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        match self.termination {
            Termination::Budget { generations: 0 } => Err(GaError::ZeroBudget),
            Termination::Stabilized { epsilon } if epsilon < 0.0 => {
                Err(GaError::NegativeEpsilon)
            }
            _ => Ok(()),
        }
    }
}
