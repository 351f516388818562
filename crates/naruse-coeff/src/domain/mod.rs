//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod analysis;
pub mod coefficient;
pub mod excited;
pub mod index_set;
pub mod shape;
