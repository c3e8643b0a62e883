//! Ring-by-ring generation sequence.
//!
//! Generation is a state machine advanced one step at a time by whoever
//! owns the clock. Each ring in turn is resampled [`ANIMATION_TICKS`] times,
//! one [`TICK_INTERVAL`] apart, then its selected slots are read into that
//! ring's buffer. After the last ring the buffers are joined in ring order
//! into the password and the machine returns to [`Phase::Idle`].
//!
//! Only the commit step reads ring contents, so the characters shown while
//! a ring spins have no bearing on the result beyond the final resample.

use std::time::Duration;

use zeroize::{Zeroize, Zeroizing};

use super::charset::Pool;
use super::password::Password;
use super::ring::{self, RING_SIZE, Ring};
use super::selection::SlotSelection;
use super::strength::{self, Strength};
use crate::clock::Clock;
use crate::rand::{self, RandomSource};
use crate::settings::{Settings, SettingsError};

/// Resamples per ring before its slots are read.
pub const ANIMATION_TICKS: u32 = 20;

/// Wait before each resample.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// `ring` is spinning; `tick` resamples have happened so far.
    Animating { ring: usize, tick: u32 },
    /// `ring` finished spinning; its slots are read next.
    Selecting { ring: usize },
    /// Every ring is committed; the password is assembled next.
    Done,
}

impl Phase {
    /// The phase that follows `self` in a sequence over `rings` rings.
    pub fn next(self, rings: usize) -> Phase {
        match self {
            Phase::Idle => Phase::Animating { ring: 0, tick: 0 },
            Phase::Animating { ring, tick } if tick + 1 < ANIMATION_TICKS => Phase::Animating {
                ring,
                tick: tick + 1,
            },
            Phase::Animating { ring, .. } => Phase::Selecting { ring },
            Phase::Selecting { ring } if ring + 1 < rings => Phase::Animating {
                ring: ring + 1,
                tick: 0,
            },
            Phase::Selecting { .. } => Phase::Done,
            Phase::Done => Phase::Idle,
        }
    }

    /// How long to wait before running this phase's step.
    pub fn delay(self) -> Duration {
        match self {
            Phase::Animating { .. } => TICK_INTERVAL,
            _ => Duration::ZERO,
        }
    }

    pub fn active_ring(self) -> Option<usize> {
        match self {
            Phase::Animating { ring, .. } | Phase::Selecting { ring } => Some(ring),
            _ => None,
        }
    }

    pub fn is_generating(self) -> bool {
        self != Phase::Idle
    }
}

/// Read-only view of the sequencer for display.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub settings: &'a Settings,
    pub rings: &'a [Ring],
    pub selection: &'a SlotSelection,
    pub password: &'a Password,
    pub strength: Strength,
    pub generating: bool,
    pub ready: bool,
    pub secure: bool,
    pub source: &'static str,
    pub pool_size: usize,
}

/// Owns rings, selection and the random source. All mutation goes through
/// `configure`, `toggle`, `pick_random_slots`, `clear_selection`, `start`
/// and `step`.
pub struct Sequencer<R: RandomSource> {
    settings: Settings,
    pool: Pool,
    rings: Vec<Ring>,
    selection: SlotSelection,
    buffers: Vec<Zeroizing<String>>,
    password: Password,
    strength: Strength,
    phase: Phase,
    rng: R,
}

impl<R: RandomSource> Sequencer<R> {
    pub fn new(settings: Settings, mut rng: R) -> Result<Self, SettingsError> {
        let rings = ring::build_all(&settings, &mut rng)?;
        let pool = Pool::new(&settings)?;

        if !rng.is_secure() {
            tracing::debug!(source = rng.name(), "generating with a non-secure random source");
        }

        Ok(Self {
            selection: SlotSelection::new(&settings),
            buffers: vec![Zeroizing::default(); settings.rings],
            password: Password::default(),
            strength: strength::classify(""),
            phase: Phase::Idle,
            settings,
            pool,
            rings,
            rng,
        })
    }

    /// Apply new settings: rebuild every ring, clear the selection and the
    /// password. Ignored (`Ok(false)`) while a generation is running.
    pub fn configure(&mut self, settings: Settings) -> Result<bool, SettingsError> {
        if self.phase.is_generating() {
            tracing::debug!("settings change ignored while generating");
            return Ok(false);
        }
        settings.validate()?;
        let pool = Pool::new(&settings)?;

        self.rings = (0..settings.rings)
            .map(|_| Ring::build(&pool, &mut self.rng))
            .collect();
        self.pool = pool;
        self.settings = settings;
        self.selection = SlotSelection::new(&settings);
        self.buffers = vec![Zeroizing::default(); settings.rings];
        self.password = Password::default();
        self.strength = strength::classify("");

        tracing::debug!(
            length = settings.length,
            rings = settings.rings,
            pool = self.pool.len(),
            "settings applied"
        );
        Ok(true)
    }

    /// Toggle a slot. No-op while generating or when the ring is full.
    pub fn toggle(&mut self, ring: usize, slot: usize) -> bool {
        if self.phase.is_generating() {
            return false;
        }
        self.selection.toggle(ring, slot)
    }

    /// Replace every ring's selection with distinct random slots, filling
    /// each ring to capacity.
    pub fn pick_random_slots(&mut self) -> bool {
        if self.phase.is_generating() {
            return false;
        }
        for ring in 0..self.selection.ring_count() {
            self.selection.clear_ring(ring);
            let capacity = self.selection.capacity(ring);
            for slot in rand::sample_distinct(&mut self.rng, RING_SIZE, capacity) {
                self.selection.toggle(ring, slot);
            }
        }
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        if self.phase.is_generating() {
            return false;
        }
        self.selection.clear();
        true
    }

    /// Idle with every ring filled to capacity.
    pub fn is_ready(&self) -> bool {
        !self.phase.is_generating() && self.selection.is_ready()
    }

    /// Begin a generation. Returns the delay before the first [`step`],
    /// or `None` when already generating or the selection is incomplete.
    ///
    /// [`step`]: Sequencer::step
    pub fn start(&mut self) -> Option<Duration> {
        if self.phase.is_generating() {
            tracing::debug!("start ignored, generation already running");
            return None;
        }
        if !self.selection.is_ready() {
            tracing::debug!(
                selected = self.selection.total(),
                "start ignored, selection incomplete"
            );
            return None;
        }

        self.buffers.iter_mut().for_each(|buffer| buffer.zeroize());
        self.password = Password::default();
        self.phase = Phase::Idle.next(self.rings.len());

        tracing::debug!(rings = self.rings.len(), "generation started");
        Some(self.phase.delay())
    }

    /// Run the current phase's step and advance. Returns the delay before
    /// the next step, or `None` once back at [`Phase::Idle`].
    pub fn step(&mut self) -> Option<Duration> {
        match self.phase {
            Phase::Idle => return None,
            Phase::Animating { ring, .. } => self.rings[ring].resample(&self.pool, &mut self.rng),
            Phase::Selecting { ring } => self.commit(ring),
            Phase::Done => self.finish(),
        }

        self.phase = self.phase.next(self.rings.len());
        match self.phase {
            Phase::Idle => None,
            next => Some(next.delay()),
        }
    }

    /// Start and drive the sequence to completion on `clock`, passing a
    /// snapshot to `on_frame` after every step. Returns `false` if the
    /// sequence could not start.
    pub fn run<C, F>(&mut self, clock: &mut C, mut on_frame: F) -> bool
    where
        C: Clock + ?Sized,
        F: FnMut(&Snapshot<'_>),
    {
        let Some(mut delay) = self.start() else {
            return false;
        };
        loop {
            clock.sleep(delay);
            let next = self.step();
            on_frame(&self.snapshot());
            match next {
                Some(d) => delay = d,
                None => return true,
            }
        }
    }

    fn commit(&mut self, ring: usize) {
        let chars = &self.rings[ring];
        let buffer = &mut self.buffers[ring];
        buffer.zeroize();
        buffer.extend(self.selection.slots(ring).filter_map(|slot| chars.get(slot)));
        tracing::debug!(ring, chars = buffer.len(), "ring committed");
    }

    fn finish(&mut self) {
        let length = self.settings.length;
        let mut assembled = String::with_capacity(self.buffers.iter().map(|b| b.len()).sum());
        for buffer in self.buffers.iter_mut() {
            assembled.push_str(buffer.as_str());
            buffer.zeroize();
        }
        if let Some((cut, _)) = assembled.char_indices().nth(length) {
            assembled.truncate(cut);
        }

        self.password = Password::new(assembled);
        self.strength = self.password.strength();
        tracing::debug!(
            length = self.password.len(),
            strength = %self.strength,
            "generation complete"
        );
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            settings: &self.settings,
            rings: &self.rings,
            selection: &self.selection,
            password: &self.password,
            strength: self.strength,
            generating: self.phase.is_generating(),
            ready: self.is_ready(),
            secure: self.rng.is_secure(),
            source: self.rng.name(),
            pool_size: self.pool.len(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn selection(&self) -> &SlotSelection {
        &self.selection
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_generating(&self) -> bool {
        self.phase.is_generating()
    }

    pub fn is_secure(&self) -> bool {
        self.rng.is_secure()
    }
}
