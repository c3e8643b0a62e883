//! Rings of candidate characters.

use std::fmt;

use zeroize::Zeroize;

use super::charset::Pool;
use crate::rand::RandomSource;
use crate::settings::{Settings, SettingsError};

/// Slots per ring.
pub const RING_SIZE: usize = 26;

/// A fixed ring of [`RING_SIZE`] characters, each drawn independently
/// from the pool. Contents are wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Ring([u8; RING_SIZE]);

impl Ring {
    pub fn build<R: RandomSource + ?Sized>(pool: &Pool, rng: &mut R) -> Self {
        let mut ring = Ring([0u8; RING_SIZE]);
        ring.resample(pool, rng);
        ring
    }

    /// Replace every slot with a fresh draw from `pool`.
    pub fn resample<R: RandomSource + ?Sized>(&mut self, pool: &Pool, rng: &mut R) {
        for slot in self.0.iter_mut() {
            *slot = pool.sample(rng);
        }
    }

    pub fn get(&self, slot: usize) -> Option<char> {
        self.0.get(slot).map(|&b| b as char)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| b as char)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        RING_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring([REDACTED; {RING_SIZE}])")
    }
}

impl Drop for Ring {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Build `settings.rings` independent rings from the enabled classes.
pub fn build_all<R: RandomSource + ?Sized>(
    settings: &Settings,
    rng: &mut R,
) -> Result<Vec<Ring>, SettingsError> {
    settings.validate()?;
    let pool = Pool::new(settings)?;
    Ok((0..settings.rings).map(|_| Ring::build(&pool, rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::CycleRand;

    #[test]
    fn ring_has_fixed_size_and_pool_chars() {
        let settings = Settings {
            uppercase: false,
            symbols: false,
            ..Settings::default()
        };
        let pool = Pool::new(&settings).unwrap();
        let mut rng = CycleRand::new();
        for _ in 0..20 {
            let ring = Ring::build(&pool, &mut rng);
            assert_eq!(ring.chars().count(), RING_SIZE);
            assert!(ring.as_bytes().iter().all(|&c| pool.contains(c)));
            assert!(ring.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn get_out_of_range_is_none() {
        let pool = Pool::new(&Settings::default()).unwrap();
        let ring = Ring::build(&pool, &mut CycleRand::new());
        assert!(ring.get(RING_SIZE - 1).is_some());
        assert!(ring.get(RING_SIZE).is_none());
    }

    #[test]
    fn build_all_makes_one_ring_per_setting() {
        let settings = Settings {
            rings: 6,
            ..Settings::default()
        };
        let rings = build_all(&settings, &mut CycleRand::new()).unwrap();
        assert_eq!(rings.len(), 6);
    }

    #[test]
    fn build_all_rejects_empty_pool() {
        let settings = Settings {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..Settings::default()
        };
        let err = build_all(&settings, &mut CycleRand::new()).unwrap_err();
        assert_eq!(err, SettingsError::NoCharacterClasses);
    }

    #[test]
    fn debug_does_not_leak_contents() {
        let pool = Pool::new(&Settings::default()).unwrap();
        let ring = Ring::build(&pool, &mut CycleRand::new());
        let shown = format!("{ring:?}");
        assert_eq!(shown, "Ring([REDACTED; 26])");
    }
}
