//! Validated index set I
//!
//! An `IndexSet` is the only way to hand an input to the calculator, so the
//! shape builder can rely on a non-empty, strictly increasing set of positive
//! integers.

use std::fmt;
use thiserror::Error;

/// Reasons an index set is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIndexSet {
    /// No elements given
    #[error("index set must not be empty")]
    Empty,
    /// Element is zero or negative
    #[error("index set elements must be positive, found {0}")]
    NonPositive(i64),
    /// Element does not fit the supported range
    #[error("index set element {0} is too large (maximum {max})", max = u32::MAX)]
    TooLarge(i64),
    /// Same element given twice
    #[error("index set contains {0} more than once")]
    Duplicate(u32),
    /// Elements are not in ascending order
    #[error("index set is not increasing: element {index} is {value} after {previous}")]
    NotIncreasing {
        index: usize,
        previous: u32,
        value: u32,
    },
}

/// Non-empty, strictly increasing set of positive integers
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexSet {
    elements: Vec<u32>,
}

impl IndexSet {
    /// Create an index set from elements already in ascending order
    pub fn new(elements: impl Into<Vec<u32>>) -> Result<Self, InvalidIndexSet> {
        let elements = elements.into();
        validate(&elements)?;
        Ok(Self { elements })
    }

    /// Create an index set from elements in any order
    ///
    /// Elements are sorted ascending first; duplicates are still rejected.
    pub fn from_unsorted(elements: impl Into<Vec<u32>>) -> Result<Self, InvalidIndexSet> {
        let mut elements = elements.into();
        elements.sort_unstable();
        Self::new(elements)
    }

    /// Create an index set from signed values in any order
    pub fn from_signed(values: &[i64]) -> Result<Self, InvalidIndexSet> {
        let mut elements = Vec::with_capacity(values.len());
        for &value in values {
            if value <= 0 {
                return Err(InvalidIndexSet::NonPositive(value));
            }
            let element = u32::try_from(value).map_err(|_| InvalidIndexSet::TooLarge(value))?;
            elements.push(element);
        }
        Self::from_unsorted(elements)
    }

    /// Elements in ascending order
    pub fn elements(&self) -> &[u32] {
        &self.elements
    }

    /// Cardinality |I|
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Largest element of I
    pub fn max(&self) -> u32 {
        // non-empty by construction
        self.elements[self.elements.len() - 1]
    }
}

fn validate(elements: &[u32]) -> Result<(), InvalidIndexSet> {
    if elements.is_empty() {
        return Err(InvalidIndexSet::Empty);
    }

    if elements[0] == 0 {
        return Err(InvalidIndexSet::NonPositive(0));
    }

    for (index, pair) in elements.windows(2).enumerate() {
        let (previous, value) = (pair[0], pair[1]);
        if value == previous {
            return Err(InvalidIndexSet::Duplicate(value));
        }
        if value < previous {
            return Err(InvalidIndexSet::NotIncreasing {
                index: index + 1,
                previous,
                value,
            });
        }
    }

    Ok(())
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let set = IndexSet::new(vec![1, 3, 5]).unwrap();
        assert_eq!(set.elements(), &[1, 3, 5]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.max(), 5);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_new_empty() {
        assert_eq!(IndexSet::new(Vec::new()), Err(InvalidIndexSet::Empty));
    }

    #[test]
    fn test_new_zero() {
        assert_eq!(
            IndexSet::new(vec![0, 2]),
            Err(InvalidIndexSet::NonPositive(0))
        );
    }

    #[test]
    fn test_new_duplicate() {
        assert_eq!(
            IndexSet::new(vec![1, 4, 4]),
            Err(InvalidIndexSet::Duplicate(4))
        );
    }

    #[test]
    fn test_new_not_increasing() {
        assert_eq!(
            IndexSet::new(vec![1, 5, 3]),
            Err(InvalidIndexSet::NotIncreasing {
                index: 2,
                previous: 5,
                value: 3
            })
        );
    }

    #[test]
    fn test_from_unsorted_sorts() {
        let set = IndexSet::from_unsorted(vec![7, 2, 5]).unwrap();
        assert_eq!(set.elements(), &[2, 5, 7]);
    }

    #[test]
    fn test_from_unsorted_duplicate() {
        assert_eq!(
            IndexSet::from_unsorted(vec![3, 1, 3]),
            Err(InvalidIndexSet::Duplicate(3))
        );
    }

    #[test]
    fn test_from_signed() {
        let set = IndexSet::from_signed(&[4, 1]).unwrap();
        assert_eq!(set.elements(), &[1, 4]);

        assert_eq!(
            IndexSet::from_signed(&[3, -2]),
            Err(InvalidIndexSet::NonPositive(-2))
        );
        assert_eq!(
            IndexSet::from_signed(&[1 << 40]),
            Err(InvalidIndexSet::TooLarge(1 << 40))
        );
    }

    #[test]
    fn test_display() {
        let set = IndexSet::new(vec![2, 5]).unwrap();
        assert_eq!(set.to_string(), "[2, 5]");
    }
}
