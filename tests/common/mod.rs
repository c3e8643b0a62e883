//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use ringpass::RandomSource;
use ringpass::settings::Settings;

/// Deterministic source backed by a seeded `StdRng`.
pub struct Seeded(StdRng);

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Seeded(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for Seeded {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn is_secure(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

pub fn settings(length: usize, rings: usize) -> Settings {
    Settings {
        length,
        rings,
        ..Settings::default()
    }
}
