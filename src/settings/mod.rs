//! Password generation settings.

use thiserror::Error;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;
pub const MIN_RINGS: usize = 2;
pub const MAX_RINGS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("password length {0} is outside 4..=32")]
    LengthOutOfRange(usize),
    #[error("ring count {0} is outside 2..=6")]
    RingsOutOfRange(usize),
    #[error("at least one character class must be enabled")]
    NoCharacterClasses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub rings: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(SettingsError::LengthOutOfRange(self.length));
        }
        if !(MIN_RINGS..=MAX_RINGS).contains(&self.rings) {
            return Err(SettingsError::RingsOutOfRange(self.rings));
        }
        if !self.has_any_class() {
            return Err(SettingsError::NoCharacterClasses);
        }
        Ok(())
    }

    pub fn has_any_class(&self) -> bool {
        self.uppercase || self.lowercase || self.digits || self.symbols
    }

    /// Most slots any single ring may hold: `ceil(length / rings)`.
    pub fn ring_capacity(&self) -> usize {
        self.length.div_ceil(self.rings.max(1))
    }

    /// Per-ring slot capacities. They sum to exactly `length`; the outer
    /// rings take the remainder when `rings` does not divide `length`.
    pub fn capacities(&self) -> Vec<usize> {
        (0..self.rings).map(|ring| self.capacity_of(ring)).collect()
    }

    pub fn capacity_of(&self, ring: usize) -> usize {
        if ring >= self.rings {
            return 0;
        }
        let base = self.length / self.rings;
        let extra = usize::from(ring < self.length % self.rings);
        base + extra
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 12,
            rings: 4,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(length: usize, rings: usize) -> Settings {
        Settings {
            length,
            rings,
            ..Settings::default()
        }
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(with(3, 4).validate(), Err(SettingsError::LengthOutOfRange(3)));
        assert_eq!(with(33, 4).validate(), Err(SettingsError::LengthOutOfRange(33)));
        assert_eq!(with(12, 1).validate(), Err(SettingsError::RingsOutOfRange(1)));
        assert_eq!(with(12, 7).validate(), Err(SettingsError::RingsOutOfRange(7)));
    }

    #[test]
    fn rejects_no_character_classes() {
        let settings = Settings {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::NoCharacterClasses));
    }

    #[test]
    fn capacities_even_split() {
        let settings = with(12, 4);
        assert_eq!(settings.ring_capacity(), 3);
        assert_eq!(settings.capacities(), vec![3, 3, 3, 3]);
    }

    #[test]
    fn capacities_remainder_goes_to_outer_rings() {
        let settings = with(10, 3);
        assert_eq!(settings.ring_capacity(), 4);
        assert_eq!(settings.capacities(), vec![4, 3, 3]);

        let settings = with(4, 6);
        assert_eq!(settings.ring_capacity(), 1);
        assert_eq!(settings.capacities(), vec![1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn capacities_always_sum_to_length() {
        for length in MIN_LENGTH..=MAX_LENGTH {
            for rings in MIN_RINGS..=MAX_RINGS {
                let settings = with(length, rings);
                let caps = settings.capacities();
                assert_eq!(caps.iter().sum::<usize>(), length);
                assert!(caps.iter().all(|&c| c <= settings.ring_capacity()));
                assert_eq!(caps[0], settings.ring_capacity());
            }
        }
    }

    #[test]
    fn capacity_of_unknown_ring_is_zero() {
        assert_eq!(with(12, 4).capacity_of(4), 0);
    }
}
