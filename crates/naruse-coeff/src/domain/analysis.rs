//! Sequence analysis of coefficients
//!
//! Pure functions behind the ratio, order and unimodality reports.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Non-negative decimal with a fixed number of fractional digits
///
/// Stored as `scaled = value * 10^scale`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDecimal {
    scaled: BigUint,
    scale: u32,
}

impl FixedDecimal {
    /// `numerator / denominator` rounded half-up to `scale` fractional digits
    ///
    /// Returns `None` when the denominator is zero.
    pub fn from_ratio(numerator: &BigUint, denominator: &BigUint, scale: u32) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }

        let shifted = numerator * BigUint::from(10u32).pow(scale);
        let mut scaled = &shifted / denominator;
        let remainder = &shifted % denominator;
        if remainder * 2u32 >= *denominator {
            scaled += BigUint::one();
        }

        Some(Self { scaled, scale })
    }

}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.scaled);
        }

        let unit = BigUint::from(10u32).pow(self.scale);
        let integer = &self.scaled / &unit;
        let fraction = &self.scaled % &unit;
        write!(
            f,
            "{}.{:0>width$}",
            integer,
            fraction.to_string(),
            width = self.scale as usize
        )
    }
}

/// Ratios `C_i / C_{i+1}` for i in 0..s
pub fn adjacent_ratios(values: &[BigUint], scale: u32) -> Vec<Option<FixedDecimal>> {
    values
        .windows(2)
        .map(|pair| FixedDecimal::from_ratio(&pair[0], &pair[1], scale))
        .collect()
}

/// Comparison of each coefficient with the next one
pub fn order_relations(values: &[BigUint]) -> Vec<Ordering> {
    values.windows(2).map(|pair| pair[0].cmp(&pair[1])).collect()
}

/// Relation symbol used in order chains
pub fn relation_symbol(ordering: Ordering) -> char {
    match ordering {
        Ordering::Less => '<',
        Ordering::Equal => '=',
        Ordering::Greater => '>',
    }
}

/// Indices i with `C_i > C_{i+1}`
pub fn descents(values: &[BigUint]) -> Vec<usize> {
    order_relations(values)
        .into_iter()
        .enumerate()
        .filter(|&(_, ordering)| ordering == Ordering::Greater)
        .map(|(i, _)| i)
        .collect()
}

/// Indices i in 1..s with `C_i` strictly below both neighbours
pub fn local_dips(values: &[BigUint]) -> Vec<usize> {
    values
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] < w[0] && w[1] < w[2])
        .map(|(i, _)| i + 1)
        .collect()
}

/// True when the sequence has no local dip
pub fn is_unimodal(values: &[BigUint]) -> bool {
    values
        .windows(3)
        .all(|w| !(w[1] < w[0] && w[1] < w[2]))
}
