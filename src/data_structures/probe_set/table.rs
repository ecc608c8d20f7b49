// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Open-addressed slot table shared by both set variants.
//!
//! The table knows nothing about hashing or equality. Callers hand it a
//! precomputed hash and a predicate that recognises the element they are
//! looking for; the table walks the linear probe sequence
//! `(hash + i) mod capacity` for `i` in `0..capacity`.

use std::mem;

use tracing::{debug, trace};

use crate::data_structures::probe_set::config::ProbeSetConfig;
use crate::data_structures::probe_set::error::{ProbeSetError, Result};

/// Tag describing what a slot currently holds.
///
/// A slot moves `Empty -> Filled -> Deleted -> Filled -> ...` and never
/// returns to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Never used.
    Empty,
    /// Holds a live element.
    Filled,
    /// Tombstone left behind by a removal.
    Deleted,
}

#[derive(Debug, Clone)]
enum Slot<E> {
    Empty,
    Filled(E),
    Deleted,
}

impl<E> Slot<E> {
    fn state(&self) -> SlotState {
        match self {
            Slot::Empty => SlotState::Empty,
            Slot::Filled(_) => SlotState::Filled,
            Slot::Deleted => SlotState::Deleted,
        }
    }
}

/// Outcome of walking the probe sequence for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// A matching element lives at this index.
    Found(usize),
    /// Not present; this is where it would be stored. Prefers the first
    /// tombstone seen over the terminating empty slot.
    Vacant(usize),
    /// Every slot holds a non-matching element.
    Exhausted,
}

/// Fixed-size slot array plus the live and tombstone counters.
#[derive(Debug)]
pub(crate) struct ProbeTable<E> {
    slots: Vec<Slot<E>>,
    /// Number of `Filled` slots
    count: usize,
    /// Number of `Deleted` slots
    tombstones: usize,
}

impl<E> ProbeTable<E> {
    /// Allocates a table with every slot `Empty`.
    ///
    /// # Returns
    ///
    /// * `Ok(ProbeTable)` on success
    /// * `Err(ProbeSetError::ZeroCapacity)` if the configuration asks for no slots
    /// * `Err(ProbeSetError::AllocationFailed)` if the slot array cannot be reserved
    pub(crate) fn try_with_config(config: &ProbeSetConfig) -> Result<Self> {
        config.validate()?;

        let capacity = config.capacity;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ProbeSetError::AllocationFailed { capacity })?;
        slots.resize_with(capacity, || Slot::Empty);

        debug!(capacity, "created probe table");

        Ok(Self {
            slots,
            count: 0,
            tombstones: 0,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    pub(crate) fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub(crate) fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    pub(crate) fn slot_state(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).map(Slot::state)
    }

    /// Walks the probe sequence starting at `hash mod capacity`.
    ///
    /// Stops at the first `Empty` slot or the first `Filled` slot whose
    /// element satisfies `matches`. Tombstones are skipped, but the first one
    /// seen is remembered and returned as the vacant slot so that inserts
    /// reclaim it. A full cycle without an `Empty` slot still yields that
    /// tombstone; only a table with no tombstone and no match is exhausted.
    pub(crate) fn probe<F>(&self, hash: u64, mut matches: F) -> Probe
    where
        F: FnMut(&E) -> bool,
    {
        let capacity = self.slots.len();
        let start = (hash % capacity as u64) as usize;
        let mut first_tombstone = None;

        for step in 0..capacity {
            let index = (start + step) % capacity;
            match &self.slots[index] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Slot::Filled(element) if matches(element) => return Probe::Found(index),
                Slot::Filled(_) => {}
                Slot::Deleted => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
            }
        }

        match first_tombstone {
            Some(index) => Probe::Vacant(index),
            None => {
                trace!(hash, capacity, "probe cycle exhausted");
                Probe::Exhausted
            }
        }
    }

    /// Stores the element built by `make` unless the table is full or an
    /// equal element is already present.
    ///
    /// `make` only runs when the element is actually stored.
    ///
    /// # Returns
    ///
    /// `true` if a slot was filled, `false` otherwise.
    pub(crate) fn insert_with<F, M>(&mut self, hash: u64, matches: F, make: M) -> bool
    where
        F: FnMut(&E) -> bool,
        M: FnOnce() -> E,
    {
        if self.is_full() {
            debug!(capacity = self.capacity(), "probe table is full, insert ignored");
            return false;
        }

        match self.probe(hash, matches) {
            Probe::Vacant(index) => {
                if let Slot::Deleted = mem::replace(&mut self.slots[index], Slot::Filled(make())) {
                    self.tombstones -= 1;
                }
                self.count += 1;
                true
            }
            Probe::Found(_) | Probe::Exhausted => false,
        }
    }

    /// Turns the matching slot into a tombstone and hands back its element.
    pub(crate) fn remove_with<F>(&mut self, hash: u64, matches: F) -> Option<E>
    where
        F: FnMut(&E) -> bool,
    {
        let index = match self.probe(hash, matches) {
            Probe::Found(index) => index,
            Probe::Vacant(_) | Probe::Exhausted => return None,
        };

        match mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Filled(element) => {
                self.count -= 1;
                self.tombstones += 1;
                Some(element)
            }
            // probe only reports Found for Filled slots
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    /// Returns the stored element matching the predicate, if any.
    pub(crate) fn find_with<F>(&self, hash: u64, matches: F) -> Option<&E>
    where
        F: FnMut(&E) -> bool,
    {
        match self.probe(hash, matches) {
            Probe::Found(index) => match &self.slots[index] {
                Slot::Filled(element) => Some(element),
                _ => None,
            },
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Iterates over live elements in ascending slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Filled(element) => Some(element),
            _ => None,
        })
    }
}

impl<E> Drop for ProbeTable<E> {
    fn drop(&mut self) {
        debug!(
            capacity = self.slots.len(),
            remaining = self.count,
            "releasing probe table"
        );
    }
}
