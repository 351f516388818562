//! Application layer - Use case implementations
//!
//! This module coordinates the domain layer to implement use cases.

pub mod batch;
pub mod calculator;
