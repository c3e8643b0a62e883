//! Random number generation.
//!
//! [`SystemRandom`] prefers the kernel CSPRNG (`/dev/urandom`). When that
//! cannot be opened it falls back to [`CycleRand`], a cycle-counter mixer
//! that is NOT cryptographically secure. The fallback is logged at warn
//! level and reported through [`RandomSource::is_secure`].

use std::path::Path;

pub mod hw;
pub mod urand;

pub use hw::CycleRand;
pub use urand::Urandom;

pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Whether output comes from a cryptographically secure generator.
    fn is_secure(&self) -> bool;

    fn name(&self) -> &'static str;

    /// Uniform index in `[0, bound)`. Rejection sampling drops the biased
    /// tail so every index is equally likely. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        let limit = u64::MAX - u64::MAX % bound;
        loop {
            let value = self.next_u64();
            if value < limit {
                return (value % bound) as usize;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The generator used by the application.
pub enum SystemRandom {
    Urandom(Urandom),
    Cycle(CycleRand),
}

impl SystemRandom {
    pub fn new() -> Self {
        Self::from_path(Path::new(urand::PATH))
    }

    /// Prefer the urandom-style source at `path`, falling back to the cycle
    /// counter when it cannot be opened.
    pub fn from_path(path: &Path) -> Self {
        match Urandom::open_path(path) {
            Ok(urandom) => {
                tracing::debug!(source = %path.display(), "using secure random source");
                SystemRandom::Urandom(urandom)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    source = hw::source_name(),
                    "secure random source unavailable, falling back to non-secure generator"
                );
                SystemRandom::Cycle(CycleRand::new())
            }
        }
    }

    /// Skip the OS source and use the cycle-counter generator.
    pub fn fallback() -> Self {
        tracing::info!(source = hw::source_name(), "non-secure random source forced");
        SystemRandom::Cycle(CycleRand::new())
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            SystemRandom::Urandom(rng) => rng.next_u64(),
            SystemRandom::Cycle(rng) => rng.next_u64(),
        }
    }

    fn is_secure(&self) -> bool {
        match self {
            SystemRandom::Urandom(rng) => rng.is_secure(),
            SystemRandom::Cycle(rng) => rng.is_secure(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SystemRandom::Urandom(rng) => rng.name(),
            SystemRandom::Cycle(rng) => rng.name(),
        }
    }
}

/// Draw `k` distinct indices from `[0, n)`, in draw order (partial
/// Fisher-Yates). `k` is clamped to `n`.
pub fn sample_distinct<R: RandomSource + ?Sized>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    let k = k.min(n);
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = i + rng.below(n - i);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}
