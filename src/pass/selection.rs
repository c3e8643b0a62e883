//! Per-ring slot selection.

use super::ring::RING_SIZE;
use crate::settings::Settings;

/// Chosen slots for every ring, one bit per slot, bounded by each ring's
/// capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelection {
    masks: Vec<u32>,
    capacities: Vec<usize>,
}

impl SlotSelection {
    pub fn new(settings: &Settings) -> Self {
        let capacities = settings.capacities();
        Self {
            masks: vec![0; capacities.len()],
            capacities,
        }
    }

    /// Deselect a selected slot, or select it if the ring has room.
    /// Returns whether anything changed; a full ring or an out-of-range
    /// index is a silent no-op.
    pub fn toggle(&mut self, ring: usize, slot: usize) -> bool {
        if slot >= RING_SIZE || ring >= self.masks.len() {
            return false;
        }
        let bit = 1u32 << slot;
        if self.masks[ring] & bit != 0 {
            self.masks[ring] &= !bit;
            return true;
        }
        if self.count(ring) >= self.capacities[ring] {
            return false;
        }
        self.masks[ring] |= bit;
        true
    }

    pub fn is_selected(&self, ring: usize, slot: usize) -> bool {
        slot < RING_SIZE
            && self
                .masks
                .get(ring)
                .is_some_and(|mask| mask & (1u32 << slot) != 0)
    }

    pub fn count(&self, ring: usize) -> usize {
        self.masks.get(ring).map_or(0, |mask| mask.count_ones() as usize)
    }

    pub fn capacity(&self, ring: usize) -> usize {
        self.capacities.get(ring).copied().unwrap_or(0)
    }

    /// Selected slots of `ring` in ascending order.
    pub fn slots(&self, ring: usize) -> impl Iterator<Item = usize> + '_ {
        let mask = self.masks.get(ring).copied().unwrap_or(0);
        (0..RING_SIZE).filter(move |&slot| mask & (1u32 << slot) != 0)
    }

    /// Every ring holds exactly its capacity.
    pub fn is_ready(&self) -> bool {
        (0..self.masks.len()).all(|ring| self.count(ring) == self.capacities[ring])
    }

    pub fn clear(&mut self) {
        self.masks.iter_mut().for_each(|mask| *mask = 0);
    }

    pub fn clear_ring(&mut self, ring: usize) {
        if let Some(mask) = self.masks.get_mut(ring) {
            *mask = 0;
        }
    }

    pub fn ring_count(&self) -> usize {
        self.masks.len()
    }

    pub fn total(&self) -> usize {
        (0..self.masks.len()).map(|ring| self.count(ring)).sum()
    }
}
