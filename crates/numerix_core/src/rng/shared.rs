//! Process-wide shared sampler.
//!
//! One [`Sampler`] per process, created lazily on first use. The first call
//! to [`poisson`], [`gaussian`] or [`with_sampler`] seeds it from wall-clock
//! time unless [`configure`] installed a seed before that. Once created it is
//! never re-seeded.
//!
//! Initialisation happens exactly once even when several threads race for
//! it, and draws are serialised by a mutex, so these functions may be called
//! from any thread. Both distributions consume the same stream: a Poisson
//! draw moves the generator forward for the next Gaussian draw and vice versa.
//!
//! Prefer an owned [`Sampler`] where the caller can thread one through; the
//! shared instance exists for call sites that cannot.
//!
//! # Example
//!
//! ```rust
//! use numerix_core::rng::shared;
//!
//! let count = shared::poisson(4.0).unwrap();
//! let x = shared::gaussian(0.0, 1.0).unwrap();
//! assert!(shared::seed().is_some());
//! # let _ = (count, x);
//! ```

use super::config::SamplerConfig;
use super::sampler::Sampler;
use crate::types::SamplingError;
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

struct SharedSampler {
    seed: u64,
    sampler: Mutex<Sampler>,
}

impl SharedSampler {
    fn new(config: &SamplerConfig, origin: &'static str) -> Self {
        let sampler = Sampler::from_config(config);
        let seed = sampler.seed();
        debug!(seed, source = ?config.seed, origin, "initialised shared sampler");
        Self {
            seed,
            sampler: Mutex::new(sampler),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sampler> {
        // A panic inside a draw cannot leave the generator half-updated.
        self.sampler.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static SHARED: OnceCell<SharedSampler> = OnceCell::new();

fn shared() -> &'static SharedSampler {
    SHARED.get_or_init(|| SharedSampler::new(&SamplerConfig::clock(), "first use"))
}

/// Installs the seed configuration of the shared sampler.
///
/// Must run before the first draw. Returns the seed in use.
///
/// # Errors
///
/// `SamplingError::AlreadyInitialised` if the shared sampler already exists,
/// whether from an earlier `configure` or from a draw.
pub fn configure(config: SamplerConfig) -> Result<u64, SamplingError> {
    let mut installed = false;
    let cell = SHARED.get_or_init(|| {
        installed = true;
        SharedSampler::new(&config, "configure")
    });
    if installed {
        Ok(cell.seed)
    } else {
        warn!(seed = cell.seed, requested = ?config.seed, "shared sampler already initialised");
        Err(SamplingError::AlreadyInitialised { seed: cell.seed })
    }
}

/// Seed of the shared sampler, or `None` before first use.
pub fn seed() -> Option<u64> {
    SHARED.get().map(|cell| cell.seed)
}

/// Draws a Poisson count from the shared sampler.
///
/// See [`Sampler::poisson`].
pub fn poisson(mean: f64) -> Result<u64, SamplingError> {
    shared().lock().poisson(mean)
}

/// Draws a Gaussian value from the shared sampler.
///
/// See [`Sampler::gaussian`].
pub fn gaussian(mean: f64, sigma: f64) -> Result<f64, SamplingError> {
    shared().lock().gaussian(mean, sigma)
}

/// Runs `f` with exclusive access to the shared sampler.
///
/// Holds the lock for the whole closure, so a batch of draws made here is
/// contiguous in the stream.
///
/// # Example
///
/// ```rust
/// use numerix_core::rng::shared;
///
/// let mut buffer = vec![0.0; 16];
/// shared::with_sampler(|s| s.fill_gaussian(&mut buffer, 0.0, 1.0)).unwrap();
/// ```
pub fn with_sampler<R>(f: impl FnOnce(&mut Sampler) -> R) -> R {
    let mut guard = shared().lock();
    f(&mut guard)
}
