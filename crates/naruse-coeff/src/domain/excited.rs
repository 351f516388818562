//! Excited diagram configuration enumerator
//!
//! A configuration assigns to each row below the first (rows 1..n) the number
//! of cells that stay unmoved; the remaining cells of that row are excited.
//! For a target index i the enumeration starts from the maximal configuration
//! `config[j] = min(L_{j+1} - 1, s - i)` and counts down like an odometer:
//!
//! 1. find the last row whose value is still > 0 and decrement it
//! 2. reset every later row to `min(new value, L_{row} - 1)`
//!
//! The sequence ends after the first configuration whose leading value is 0.

use crate::domain::shape::RibbonShape;

/// Lazy, finite sequence of configurations for one target index
///
/// Once exhausted it yields nothing until [`ExcitedConfigs::reset`] is called.
#[derive(Clone, Debug)]
pub struct ExcitedConfigs {
    /// Per-row upper bound `L_{j+1} - 1`
    bounds: Vec<usize>,
    /// Last coefficient index s
    last_index: usize,
    /// Current configuration
    config: Vec<usize>,
    started: bool,
    finished: bool,
}

impl ExcitedConfigs {
    /// Create the enumerator for `target` (0..=s)
    pub fn new(shape: &RibbonShape, target: usize) -> Self {
        let bounds: Vec<usize> = shape.row_lengths()[1..]
            .iter()
            .map(|&length| length - 1)
            .collect();

        let mut configs = Self {
            config: vec![0; bounds.len()],
            bounds,
            last_index: shape.last_index(),
            started: false,
            finished: false,
        };
        configs.reset(target);
        configs
    }

    /// Restart the enumeration for another target index
    pub fn reset(&mut self, target: usize) {
        debug_assert!(target <= self.last_index, "target index out of range");
        let limit = self.last_index - target;

        for (slot, &bound) in self.config.iter_mut().zip(&self.bounds) {
            *slot = bound.min(limit);
        }

        self.started = false;
        self.finished = false;
    }

    /// Move to the next configuration, returning it
    ///
    /// Borrowing variant of `Iterator::next` that avoids a copy per step.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.config);
        }

        // An empty configuration (single row) is produced exactly once.
        if self.config.first().is_none_or(|&value| value == 0) {
            self.finished = true;
            return None;
        }
        let Some(nonzero) = self.config.iter().rposition(|&value| value > 0) else {
            self.finished = true;
            return None;
        };

        self.config[nonzero] -= 1;
        let value = self.config[nonzero];
        for row in nonzero + 1..self.config.len() {
            self.config[row] = value.min(self.bounds[row]);
        }

        Some(&self.config)
    }
}

impl Iterator for ExcitedConfigs {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}
