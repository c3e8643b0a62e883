//! Ring-based password generation.
//!
//! Concentric rings of random characters are built from the enabled
//! character classes, slots are picked on each ring, and a sequencer spins
//! the rings one after another before reading the picked slots into the
//! final password.

pub mod clock;
pub mod pass;
pub mod rand;
pub mod settings;

pub use self::clock::{Clock, SystemClock, VirtualClock};
pub use self::pass::{Password, Phase, Sequencer, SlotSelection, Snapshot, Strength};
pub use self::rand::{RandomSource, SystemRandom};
pub use self::settings::{Settings, SettingsError};
