//! naruse-coeff - Naruse-Newton coefficients of an index set
//!
//! This crate provides functionality to:
//! - Build the row lengths and hook-length table of the shape induced by I
//! - Enumerate excited diagram configurations with an odometer iterator
//! - Sum hook products into exact coefficients C_0..C_s (sequential or rayon)
//! - Analyse and report the sequence (ratios, order chain, unimodality)

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::calculator::{
    Coefficients, ComputeError, compute_coefficients, compute_coefficients_bounded,
    compute_coefficients_parallel, large_work_estimate, work_estimate,
};
pub use constants::*;
pub use domain::excited::ExcitedConfigs;
pub use domain::index_set::{IndexSet, InvalidIndexSet};
pub use domain::shape::RibbonShape;
