//! Row lengths and hook lengths of the shape induced by an index set
//!
//! Row k of the shape has length `L_k = I[n-1-k] - (n-1-k)`. Because I is
//! strictly increasing, the row lengths are non-increasing and every row has
//! at least one cell.
//!
//! The classic formulation stores the lengths negated (`neglengths[k] = -L_k`)
//! so that an ascending binary search can locate rows; here the lengths are
//! kept positive and the search lives in [`RibbonShape::last_row_longer_than`].

use crate::domain::index_set::IndexSet;

/// Row-length profile and hook-length table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RibbonShape {
    /// Row lengths, non-increasing
    row_lengths: Vec<usize>,
    /// `hooks[k][j]` for row k, column j < row_lengths[k]
    hooks: Vec<Vec<u64>>,
}

impl RibbonShape {
    /// Build the row lengths and hook table for I
    pub fn new(set: &IndexSet) -> Self {
        let elements = set.elements();
        let n = elements.len();

        let row_lengths: Vec<usize> = (0..n)
            .map(|k| elements[n - 1 - k] as usize - (n - 1 - k))
            .collect();

        let mut shape = Self {
            row_lengths,
            hooks: Vec::with_capacity(n),
        };
        shape.hooks = shape.build_hooks();

        log::debug!(
            "shape for I = {}: row lengths {:?}, s = {}",
            set,
            shape.row_lengths,
            shape.last_index()
        );

        shape
    }

    fn build_hooks(&self) -> Vec<Vec<u64>> {
        self.row_lengths
            .iter()
            .enumerate()
            .map(|(k, &length)| {
                (0..length)
                    .map(|j| {
                        let over = self.last_row_longer_than(j);
                        let hook = (length - j + over - k) as u64;
                        debug_assert!(hook > 0, "hook length at ({k}, {j}) must be positive");
                        hook
                    })
                    .collect()
            })
            .collect()
    }

    /// Index of the last row whose length is greater than `column`
    ///
    /// Equivalent to locating `-(column + 1)` in the negated lengths and
    /// extending through ties. `column` must be below the first row length.
    pub fn last_row_longer_than(&self, column: usize) -> usize {
        self.row_lengths.partition_point(|&length| length > column) - 1
    }

    /// Number of rows (= |I|)
    pub fn num_rows(&self) -> usize {
        self.row_lengths.len()
    }

    /// Length of row k
    #[inline]
    pub fn row_length(&self, row: usize) -> usize {
        self.row_lengths[row]
    }

    /// All row lengths
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    /// Row lengths in negated form (`neglengths[k] = -L_k`)
    pub fn neg_lengths(&self) -> Vec<i64> {
        self.row_lengths.iter().map(|&l| -(l as i64)).collect()
    }

    /// Index of the last coefficient, `s = L_0 - 1`
    pub fn last_index(&self) -> usize {
        self.row_lengths[0] - 1
    }

    /// Hook lengths of one row
    pub fn hook_row(&self, row: usize) -> &[u64] {
        &self.hooks[row]
    }
}
