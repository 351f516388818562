//! Coefficient computation workflow
//!
//! Builds the shape for an index set and assembles every coefficient
//! C_0..C_s, either sequentially or with rayon across the indices.

use crate::constants::WORK_WARNING_THRESHOLD;
use crate::domain::analysis;
use crate::domain::coefficient::{
    coefficient_at, single_row_coefficients, sum_hook_products, trailing_factor,
};
use crate::domain::excited::ExcitedConfigs;
use crate::domain::index_set::IndexSet;
use crate::domain::shape::RibbonShape;
use num_bigint::BigUint;
use rayon::prelude::*;
use thiserror::Error;

/// Naruse-Newton coefficients C_0..C_s of one index set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coefficients {
    values: Vec<BigUint>,
}

impl Coefficients {
    /// Wrap computed values (at least one)
    pub(crate) fn new(values: Vec<BigUint>) -> Self {
        debug_assert!(!values.is_empty(), "coefficient sequence must not be empty");
        Self { values }
    }

    /// All coefficients, `values()[i] = C_i`
    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    /// Index s of the last coefficient
    pub fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    /// Number of coefficients (s + 1)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for computed coefficients
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the sequence has no local dip
    pub fn is_unimodal(&self) -> bool {
        analysis::is_unimodal(&self.values)
    }

    /// Consume into the raw values
    pub fn into_values(self) -> Vec<BigUint> {
        self.values
    }
}

/// Computation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// Estimated work is above the caller's limit
    #[error("estimated work {estimate} exceeds the limit {limit}")]
    WorkLimitExceeded { estimate: BigUint, limit: BigUint },
}

/// Estimated enumeration work, `(prod(I) / max(I))^2`
pub fn work_estimate(set: &IndexSet) -> BigUint {
    let product: BigUint = set.elements().iter().map(|&e| BigUint::from(e)).product();
    let quotient = product / set.max();
    &quotient * &quotient
}

/// Work estimate of I when it is above `WORK_WARNING_THRESHOLD`
pub fn large_work_estimate(set: &IndexSet) -> Option<BigUint> {
    let estimate = work_estimate(set);
    (estimate > BigUint::from(WORK_WARNING_THRESHOLD)).then_some(estimate)
}

/// Compute C_0..C_s for I
pub fn compute_coefficients(set: &IndexSet) -> Coefficients {
    let shape = RibbonShape::new(set);
    compute_from_shape(&shape)
}

/// Compute C_0..C_s for an already built shape
///
/// A single enumerator is reset for each index.
pub fn compute_from_shape(shape: &RibbonShape) -> Coefficients {
    let last_index = shape.last_index();

    if shape.num_rows() == 1 {
        return Coefficients::new(single_row_coefficients(last_index));
    }

    let mut configs = ExcitedConfigs::new(shape, 0);
    let mut values = Vec::with_capacity(last_index + 1);

    for target in 0..=last_index {
        configs.reset(target);
        let sum = sum_hook_products(shape, &mut configs);
        values.push(sum * trailing_factor(shape, target));
    }

    Coefficients::new(values)
}

/// Compute C_0..C_s for I, one rayon task per index
///
/// Produces exactly the same values as [`compute_coefficients`].
pub fn compute_coefficients_parallel(set: &IndexSet) -> Coefficients {
    let shape = RibbonShape::new(set);
    let last_index = shape.last_index();

    if shape.num_rows() == 1 {
        return Coefficients::new(single_row_coefficients(last_index));
    }

    let values: Vec<BigUint> = (0..=last_index)
        .into_par_iter()
        .map(|target| coefficient_at(&shape, target))
        .collect();

    Coefficients::new(values)
}

/// Compute C_0..C_s, refusing inputs whose work estimate exceeds `limit`
pub fn compute_coefficients_bounded(
    set: &IndexSet,
    limit: &BigUint,
    parallel: bool,
) -> Result<Coefficients, ComputeError> {
    let estimate = work_estimate(set);
    if estimate > *limit {
        return Err(ComputeError::WorkLimitExceeded {
            estimate,
            limit: limit.clone(),
        });
    }

    log::debug!("I = {}: work estimate {}", set, estimate);

    if parallel {
        Ok(compute_coefficients_parallel(set))
    } else {
        Ok(compute_coefficients(set))
    }
}
