//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles reading index sets and writing text reports.

pub mod input;
pub mod report;
