//! # Random Sampling
//!
//! Seeded pseudo-random sampling of Poisson and Gaussian variates.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every sampler records its seed; a fixed seed
//!   reproduces the exact draw sequence
//! - **One stream**: Poisson and Gaussian draws consume the same generator,
//!   so reproducibility depends on draw order
//! - **Explicit ownership first**: [`Sampler`] is a plain value the caller
//!   owns; [`shared`] wraps one process-wide instance behind a mutex
//!
//! ## Module Structure
//!
//! - [`Sampler`]: Seeded generator with Poisson/Gaussian draws and batch fills
//! - [`SamplerConfig`], [`SeedSource`]: Clock or fixed seeding
//! - [`shared`]: Lazily initialised, once-only seeded process-wide sampler
//!
//! ## Usage Example
//!
//! ```rust
//! use numerix_core::rng::{Sampler, SamplerConfig};
//!
//! let mut sampler = Sampler::from_config(&SamplerConfig::fixed(2343));
//! assert_eq!(sampler.seed(), 2343);
//!
//! let photons = sampler.poisson(12.0).unwrap();
//! let noise = sampler.gaussian(0.0, 0.25).unwrap();
//! # let _ = (photons, noise);
//! ```

mod config;
mod sampler;
pub mod shared;

// Public re-exports
pub use config::{SamplerConfig, SeedSource};
pub use sampler::{Sampler, MAX_POISSON_MEAN};
