//! Hardware entropy and the non-secure fallback generator.

use zeroize::Zeroize;

use super::RandomSource;

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "system clock"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

const MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// Cycle-counter generator. Not cryptographically secure: the counter is
/// observable and predictable, so this only stands in when no OS source
/// can be opened.
pub struct CycleRand {
    state: u64,
}

impl CycleRand {
    pub fn new() -> Self {
        Self { state: entropy() }
    }
}

impl Default for CycleRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for CycleRand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = entropy();

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIER) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn is_secure(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        source_name()
    }
}

impl Drop for CycleRand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
