//! Password assembly from character rings.

pub mod charset;
mod password;
pub mod ring;
pub mod selection;
pub mod sequencer;
pub mod strength;

pub use charset::Pool;
pub use password::Password;
pub use ring::{RING_SIZE, Ring};
pub use selection::SlotSelection;
pub use sequencer::{ANIMATION_TICKS, Phase, Sequencer, Snapshot, TICK_INTERVAL};
pub use strength::{Strength, classify};
