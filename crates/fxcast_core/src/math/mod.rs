//! Numerical utilities for the result reducers.

pub mod stats;
