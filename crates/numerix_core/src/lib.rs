//! # numerix_core: Seeded Sampling and Dense Linear Solving
//!
//! Two independent numeric components:
//! - Random sampling (`rng`): seeded Poisson and Gaussian draws from one
//!   shared stream, as an owned [`rng::Sampler`] or the process-wide
//!   [`rng::shared`] instance
//! - Linear algebra (`math::linalg`): LU decomposition with partial pivoting
//!   and forward/back substitution for `A · x = b`
//! - Error types: `SamplingError`, `LinalgError`, `NumerixError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerix_core::math::linalg::{solve, Matrix};
//! use numerix_core::rng::Sampler;
//!
//! // Reproducible draws
//! let mut sampler = Sampler::from_seed(2343);
//! let count = sampler.poisson(5.0).unwrap();
//! let value = sampler.gaussian(100.0, 15.0).unwrap();
//! # let _ = (count, value);
//!
//! // Dense solve
//! let a = Matrix::<f64>::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
//! let x = solve(&a, &[3.0, 5.0]).unwrap();
//! # assert!((x[0] - 0.8).abs() < 1e-12);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (shared sampler initialisation, singular
//! pivots) and never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for configuration and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod types;
