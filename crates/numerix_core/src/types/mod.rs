//! Shared types.
//!
//! This module provides:
//! - `error`: Structured error types for sampling and linear algebra operations
//!
//! # Re-exports
//!
//! [`SamplingError`], [`LinalgError`] and [`NumerixError`] are re-exported at
//! this module level.

pub mod error;

pub use error::{LinalgError, NumerixError, SamplingError};
