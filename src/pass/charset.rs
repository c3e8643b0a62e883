//! Character pool building for ring generation.

use crate::rand::RandomSource;
use crate::settings::{Settings, SettingsError};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Union of the enabled character classes. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool(Vec<u8>);

impl Pool {
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        let chars = build(settings);
        if chars.is_empty() {
            return Err(SettingsError::NoCharacterClasses);
        }
        Ok(Pool(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: u8) -> bool {
        self.0.contains(&c)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u8 {
        self.0[rng.below(self.0.len())]
    }
}

/// Concatenate the enabled classes: uppercase, lowercase, digits, symbols.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();

    if settings.uppercase {
        chars.extend(UPPERCASE.bytes());
    }

    if settings.lowercase {
        chars.extend(LOWERCASE.bytes());
    }

    if settings.digits {
        chars.extend(DIGITS.bytes());
    }

    if settings.symbols {
        chars.extend(SYMBOLS.bytes());
    }

    chars
}

/// Pool size for the given settings (for entropy calculation).
pub fn size(settings: &Settings) -> usize {
    let mut size = 0;
    if settings.uppercase {
        size += UPPERCASE.len();
    }
    if settings.lowercase {
        size += LOWERCASE.len();
    }
    if settings.digits {
        size += DIGITS.len();
    }
    if settings.symbols {
        size += SYMBOLS.len();
    }
    size
}
