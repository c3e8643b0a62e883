//! Heuristic password strength.

use std::fmt;

/// Characters counted by the symbol check.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Length at which the length check passes.
pub const STRONG_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One point each for: length >= 12, a lowercase letter, an uppercase
/// letter, a digit, a symbol from [`SYMBOLS`].
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= STRONG_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SYMBOLS.contains(c)),
    ];
    checks.iter().filter(|&&passed| passed).count() as u8
}

pub fn classify(password: &str) -> Strength {
    match score(password) {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Moderate,
        _ => Strength::Strong,
    }
}

/// Brute-force entropy in bits for a password drawn uniformly from a pool.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
