//! Calculator related constants

// =============================================================================
// Batch parameters
// =============================================================================

/// Largest element considered by the small-set batch run ({1, ..., 7})
pub const SMALL_SET_MAX_ELEMENT: u32 = 7;

/// Upper limit for `max_element` in batch runs (2^20 - 1 subsets)
pub const BATCH_MAX_ELEMENT_LIMIT: u32 = 20;

/// Progress callback interval for batch runs (in subsets)
pub const BATCH_PROGRESS_INTERVAL: usize = 16;

// =============================================================================
// Output formatting
// =============================================================================

/// Number of fractional digits for coefficient ratios
pub const RATIO_SCALE: u32 = 12;

/// Minimum width of the zero-padded coefficient index (`C_00`)
pub const INDEX_WIDTH: usize = 2;

// =============================================================================
// Work estimation
// =============================================================================

/// Estimated work above which callers are warned before computing
///
/// The estimate is `(prod(I) / max(I))^2`, see `app::calculator::work_estimate`.
pub const WORK_WARNING_THRESHOLD: u64 = 1 << 32;
