//! Numerical methods.
//!
//! - [`linalg`]: Dense matrices and LU-based linear-system solving

pub mod linalg;
