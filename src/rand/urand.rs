//! /dev/urandom entropy source via a pooled buffer.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use zeroize::Zeroize;

use super::RandomSource;
use super::hw::CycleRand;

pub const PATH: &str = "/dev/urandom";

pub const POOL_SIZE: usize = 4096;

pub fn is_available() -> bool {
    Path::new(PATH).exists()
}

/// Reads the kernel CSPRNG in `POOL_SIZE` chunks. Consumed bytes are wiped
/// before every refill and when the source is dropped.
pub struct Urandom {
    file: File,
    pool: Box<[u8; POOL_SIZE]>,
    pos: usize,
    fallback: Option<CycleRand>,
}

impl Urandom {
    pub fn open() -> io::Result<Self> {
        Self::open_path(Path::new(PATH))
    }

    /// Read from any device or file. The first pool is filled up front, so
    /// a source shorter than `POOL_SIZE` fails here rather than later.
    pub fn open_path(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let mut urandom = Self {
            file,
            pool: Box::new([0u8; POOL_SIZE]),
            pos: POOL_SIZE,
            fallback: None,
        };
        urandom.refill()?;
        Ok(urandom)
    }

    /// True once a read has failed and output comes from the cycle counter.
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    fn refill(&mut self) -> io::Result<()> {
        self.pool.zeroize();
        self.file.read_exact(&mut self.pool[..])?;
        self.pos = 0;
        Ok(())
    }
}

impl RandomSource for Urandom {
    fn next_u64(&mut self) -> u64 {
        if let Some(fallback) = self.fallback.as_mut() {
            return fallback.next_u64();
        }

        if self.pos + 8 > POOL_SIZE
            && let Err(e) = self.refill()
        {
            tracing::error!(error = %e, "reading {} failed, degrading to cycle counter", PATH);
            return self.fallback.insert(CycleRand::new()).next_u64();
        }

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.pool[self.pos..self.pos + 8]);
        self.pool[self.pos..self.pos + 8].zeroize();
        self.pos += 8;

        let value = u64::from_le_bytes(bytes);
        bytes.zeroize();
        value
    }

    fn is_secure(&self) -> bool {
        !self.is_degraded()
    }

    fn name(&self) -> &'static str {
        match &self.fallback {
            Some(fallback) => fallback.name(),
            None => PATH,
        }
    }
}

impl Drop for Urandom {
    fn drop(&mut self) {
        self.pool.zeroize();
    }
}
