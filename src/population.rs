//! Validated populations of equal-length chromosomes.
//!
//! Order matters: crossover pairs chromosomes positionally and mutation masks
//! align by index. Construction validates the whole batch up front so the
//! evolutionary loop never sees a malformed entry.

use crate::chromosome::Chromosome;
use crate::error::GaError;
use rand::Rng;

/// An ordered collection of chromosomes, all of the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    pub(crate) chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Builds a population, validating it is non-empty and uniform in length.
    pub fn new(chromosomes: Vec<Chromosome>) -> Result<Self, GaError> {
        let expected = match chromosomes.first() {
            Some(first) => first.len(),
            None => return Err(GaError::EmptyPopulation),
        };
        for (index, chrom) in chromosomes.iter().enumerate() {
            if chrom.len() != expected {
                return Err(GaError::LengthMismatch {
                    index,
                    expected,
                    found: chrom.len(),
                });
            }
        }
        Ok(Self { chromosomes })
    }

    /// Parses a population from binary strings.
    pub fn parse<I, S>(strings: I) -> Result<Self, GaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chromosomes = strings
            .into_iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<Chromosome>, GaError>>()?;
        Self::new(chromosomes)
    }

    /// Creates `size` uniformly random chromosomes of `length` bits each.
    pub fn random<R: Rng>(size: usize, length: usize, rng: &mut R) -> Result<Self, GaError> {
        if size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        let chromosomes = (0..size)
            .map(|_| Chromosome::random(length, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { chromosomes })
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Always `false`; populations are validated non-empty on construction.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Bit length shared by every chromosome.
    pub fn chromosome_length(&self) -> usize {
        self.chromosomes[0].len()
    }

    /// The chromosomes in population order.
    pub fn as_slice(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Iterates over the chromosomes in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_valid_population() {
        let pop = Population::parse(["01100", "11001", "00101", "10011"]).unwrap();
        assert_eq!(pop.len(), 4);
        assert_eq!(pop.chromosome_length(), 5);
        assert_eq!(pop.as_slice()[1].to_string(), "11001");
    }

    #[test]
    fn test_rejects_empty_population() {
        let strings: [&str; 0] = [];
        assert_eq!(
            Population::parse(strings).unwrap_err(),
            GaError::EmptyPopulation
        );
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = Population::parse(["01100", "110"]).unwrap_err();
        assert_eq!(
            err,
            GaError::LengthMismatch {
                index: 1,
                expected: 5,
                found: 3
            }
        );
    }

    #[test]
    fn test_rejects_non_binary_entry() {
        let err = Population::parse(["01100", "11x01"]).unwrap_err();
        assert_eq!(
            err,
            GaError::InvalidSymbol {
                index: 2,
                symbol: 'x'
            }
        );
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::random(6, 8, &mut rng).unwrap();
        assert_eq!(pop.len(), 6);
        assert!(pop.iter().all(|c| c.len() == 8));
    }

    #[test]
    fn test_random_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Population::random(0, 8, &mut rng).unwrap_err(),
            GaError::EmptyPopulation
        );
    }
}
