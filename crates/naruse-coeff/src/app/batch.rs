//! Batch runs over every small index set
//!
//! Enumerates each non-empty subset of {1, ..., max_element} in bitmask order
//! (bit b set means element b+1 is present) and computes its coefficients.

use crate::app::calculator::{Coefficients, compute_coefficients};
use crate::constants::{BATCH_MAX_ELEMENT_LIMIT, BATCH_PROGRESS_INTERVAL};
use crate::domain::index_set::IndexSet;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Coefficients of one index set in a batch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCoefficients {
    pub set: IndexSet,
    pub coefficients: Coefficients,
}

/// Batch errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// `max_element` outside 1..=BATCH_MAX_ELEMENT_LIMIT
    #[error("max element must be between 1 and {limit}, got {value}")]
    MaxElementOutOfRange { value: u32, limit: u32 },
}

/// Options for batch runs
#[derive(Clone)]
pub struct BatchOptions<F = fn(usize, usize)> {
    /// Compute subsets in parallel (default: true)
    pub parallel: bool,
    /// Progress callback (current, total)
    pub on_progress: Option<F>,
}

impl Default for BatchOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self {
            parallel: true,
            on_progress: None,
        }
    }
}

impl<F> BatchOptions<F> {
    /// Enable or disable parallel computation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> BatchOptions<G> {
        BatchOptions {
            parallel: self.parallel,
            on_progress: Some(callback),
        }
    }
}

fn check_max_element(max_element: u32) -> Result<(), BatchError> {
    if max_element == 0 || max_element > BATCH_MAX_ELEMENT_LIMIT {
        return Err(BatchError::MaxElementOutOfRange {
            value: max_element,
            limit: BATCH_MAX_ELEMENT_LIMIT,
        });
    }
    Ok(())
}

fn subset_from_mask(mask: u32, max_element: u32) -> Option<IndexSet> {
    let elements: Vec<u32> = (0..max_element)
        .filter(|&bit| mask & (1 << bit) != 0)
        .map(|bit| bit + 1)
        .collect();
    IndexSet::new(elements).ok()
}

/// Every non-empty subset of {1, ..., max_element}, in bitmask order
pub fn small_sets(max_element: u32) -> Result<Vec<IndexSet>, BatchError> {
    check_max_element(max_element)?;

    Ok((1..1u32 << max_element)
        .filter_map(|mask| subset_from_mask(mask, max_element))
        .collect())
}

/// Compute coefficients of every non-empty subset of {1, ..., max_element}
pub fn compute_small_sets(max_element: u32) -> Result<Vec<SetCoefficients>, BatchError> {
    compute_small_sets_with_options(max_element, BatchOptions::default())
}

/// Compute coefficients of every small subset with options
///
/// Results keep the bitmask order regardless of `parallel`.
pub fn compute_small_sets_with_options<F>(
    max_element: u32,
    options: BatchOptions<F>,
) -> Result<Vec<SetCoefficients>, BatchError>
where
    F: Fn(usize, usize) + Sync,
{
    let BatchOptions {
        parallel,
        on_progress,
    } = options;

    let sets = small_sets(max_element)?;
    let total = sets.len();
    let progress = AtomicUsize::new(0);

    log::info!(
        "computing {} index sets with max element {}",
        total,
        max_element
    );

    let compute = |set: IndexSet| {
        let coefficients = compute_coefficients(&set);

        if let Some(ref callback) = on_progress {
            let count = progress.fetch_add(1, Ordering::Relaxed) + 1;
            if count % BATCH_PROGRESS_INTERVAL == 0 && count < total {
                callback(count, total);
            }
        }

        SetCoefficients { set, coefficients }
    };

    let results: Vec<SetCoefficients> = if parallel {
        sets.into_par_iter().map(compute).collect()
    } else {
        sets.into_iter().map(compute).collect()
    };

    if let Some(ref callback) = on_progress {
        callback(total, total);
    }

    Ok(results)
}
