//! Fixed-length binary chromosomes and mutation masks.
//!
//! A [`Chromosome`] is an ordered sequence of bits representing a candidate
//! solution — either one encoded unsigned integer or a concatenation of
//! fixed-width fields. A [`MutationMask`] is a chromosome-shaped bit pattern
//! marking which bits to flip.
//!
//! Both types parse from binary strings (`"01100".parse::<Chromosome>()`)
//! and render back through `Display`.

use crate::error::GaError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Widest chromosome that still decodes to a single `u64`.
pub const MAX_DECODE_BITS: usize = 64;

fn parse_bits(s: &str) -> Result<Vec<bool>, GaError> {
    s.chars()
        .enumerate()
        .map(|(index, symbol)| match symbol {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(GaError::InvalidSymbol { index, symbol }),
        })
        .collect()
}

fn fmt_bits(bits: &[bool], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &bit in bits {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

/// A fixed-length binary string representing a candidate solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Builds a chromosome from raw bits.
    pub fn from_bits(bits: Vec<bool>) -> Result<Self, GaError> {
        if bits.is_empty() {
            return Err(GaError::EmptyChromosome);
        }
        Ok(Self { bits })
    }

    /// Creates a uniformly random chromosome of the given length.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Result<Self, GaError> {
        if length == 0 {
            return Err(GaError::EmptyChromosome);
        }
        let bits = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Ok(Self { bits })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`; chromosomes are validated non-empty on construction.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub(crate) fn set_bit(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    pub(crate) fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Decodes the whole chromosome as an unsigned binary integer,
    /// most significant bit first.
    ///
    /// # Panics
    /// Panics if the chromosome is wider than [`MAX_DECODE_BITS`]. Callers
    /// going through an [`Objective`](crate::Objective) are protected by
    /// `check_length`, which rejects oversized chromosomes up front.
    pub fn value(&self) -> u64 {
        assert!(
            self.bits.len() <= MAX_DECODE_BITS,
            "chromosome wider than {MAX_DECODE_BITS} bits"
        );
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    /// Decodes the `width`-bit field starting at `start`.
    ///
    /// # Panics
    /// Panics if the field does not lie within the chromosome or is wider
    /// than [`MAX_DECODE_BITS`].
    pub fn field_value(&self, start: usize, width: usize) -> u64 {
        assert!(width >= 1 && width <= MAX_DECODE_BITS, "invalid field width");
        assert!(
            start + width <= self.bits.len(),
            "field [{start}, {}) out of range",
            start + width
        );
        self.bits[start..start + width]
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }
}

impl FromStr for Chromosome {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, GaError> {
        Self::from_bits(parse_bits(s)?)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bits(&self.bits, f)
    }
}

/// A chromosome-shaped bit pattern; every 1-bit marks a position to flip.
///
/// Masks carry no randomness of their own — they are supplied by the caller,
/// either hand-written, generated by a [`Schedule`](crate::Schedule), or
/// drawn via [`MutationMask::random`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationMask {
    bits: Vec<bool>,
}

impl MutationMask {
    /// Builds a mask from raw bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// An all-zero (identity) mask.
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// A mask that flips exactly one bit.
    ///
    /// # Panics
    /// Panics if `position >= length`.
    pub fn single_flip(length: usize, position: usize) -> Self {
        assert!(position < length, "flip position out of range");
        let mut bits = vec![false; length];
        bits[position] = true;
        Self { bits }
    }

    /// Draws a random mask where each bit is set with probability `rate`.
    pub fn random<R: Rng>(length: usize, rate: f64, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.random_bool(rate)).collect();
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the mask has zero bits of any value.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }
}

impl FromStr for MutationMask {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, GaError> {
        Ok(Self::from_bits(parse_bits(s)?))
    }
}

impl fmt::Display for MutationMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bits(&self.bits, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ---- Parsing ----

    #[test]
    fn test_parse_and_display_roundtrip() {
        let chrom: Chromosome = "01100".parse().unwrap();
        assert_eq!(chrom.len(), 5);
        assert_eq!(chrom.to_string(), "01100");
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        let err = "01a10".parse::<Chromosome>().unwrap_err();
        assert_eq!(
            err,
            GaError::InvalidSymbol {
                index: 2,
                symbol: 'a'
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<Chromosome>().unwrap_err(), GaError::EmptyChromosome);
    }

    #[test]
    fn test_mask_parse_and_display() {
        let mask: MutationMask = "00101".parse().unwrap();
        assert_eq!(mask.to_string(), "00101");
        assert!(!mask.bit(0));
        assert!(mask.bit(2));
    }

    // ---- Decoding ----

    #[test]
    fn test_value_decodes_msb_first() {
        let chrom: Chromosome = "11001".parse().unwrap();
        assert_eq!(chrom.value(), 25);
        let chrom: Chromosome = "00101".parse().unwrap();
        assert_eq!(chrom.value(), 5);
    }

    #[test]
    fn test_field_value() {
        let chrom: Chromosome = "0011001100110011".parse().unwrap();
        for i in 0..4 {
            assert_eq!(chrom.field_value(i * 4, 4), 3);
        }
        let chrom: Chromosome = "11110000".parse().unwrap();
        assert_eq!(chrom.field_value(0, 4), 15);
        assert_eq!(chrom.field_value(4, 4), 0);
    }

    #[test]
    #[should_panic(expected = "wider than 64 bits")]
    fn test_value_panics_beyond_64_bits() {
        let chrom = Chromosome::from_bits(vec![true; 65]).unwrap();
        chrom.value();
    }

    // ---- Construction helpers ----

    #[test]
    fn test_random_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let chrom = Chromosome::random(12, &mut rng).unwrap();
        assert_eq!(chrom.len(), 12);
        assert_eq!(
            Chromosome::random(0, &mut rng).unwrap_err(),
            GaError::EmptyChromosome
        );
    }

    #[test]
    fn test_single_flip_mask() {
        let mask = MutationMask::single_flip(5, 2);
        assert_eq!(mask.to_string(), "00100");
    }

    #[test]
    fn test_zero_mask() {
        assert_eq!(MutationMask::zeros(4).to_string(), "0000");
    }

    #[test]
    fn test_random_mask_rate_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(MutationMask::random(8, 0.0, &mut rng).to_string(), "00000000");
        assert_eq!(MutationMask::random(8, 1.0, &mut rng).to_string(), "11111111");
    }
}
