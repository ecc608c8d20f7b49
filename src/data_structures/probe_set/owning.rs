// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Probe set that stores its own copy of every element.

use std::borrow::Borrow;
use std::fmt;

use crate::data_structures::probe_set::config::ProbeSetConfig;
use crate::data_structures::probe_set::error::Result;
use crate::data_structures::probe_set::hash::{FnvStrategy, SetStrategy, StrHash};
use crate::data_structures::probe_set::table::{ProbeTable, SlotState};

/// Fixed-capacity set of owned text, hashed with the polynomial [`StrHash`].
pub type StringSet = OwningSet<str, StrHash>;

/// A fixed-capacity hash set that owns a copy of each element it holds.
///
/// Elements are passed in by reference and copied with [`ToOwned`] only when
/// they are actually stored. Removing an element drops its copy right away;
/// dropping the set drops every copy still held. Caller-owned originals are
/// never touched.
///
/// # Type Parameters
///
/// * `T` - The borrowed element type, e.g. `str` or any `Clone` type.
/// * `S` - The hash/equality strategy. Defaults to [`FnvStrategy`].
///
/// # Concurrency
///
/// The set has no internal synchronization. Mutation requires `&mut self`, so
/// sharing across threads needs an external lock.
pub struct OwningSet<T, S = FnvStrategy>
where
    T: ToOwned + ?Sized,
{
    table: ProbeTable<T::Owned>,
    strategy: S,
}

impl<T, S> OwningSet<T, S>
where
    T: ToOwned + ?Sized,
    S: SetStrategy<T>,
{
    /// Creates an empty set with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the slot array cannot be allocated.
    pub fn new(capacity: usize) -> Self
    where
        S: Default,
    {
        Self::with_strategy(capacity, S::default())
    }

    /// Creates an empty set using the given strategy.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the slot array cannot be allocated.
    pub fn with_strategy(capacity: usize, strategy: S) -> Self {
        Self::with_config(ProbeSetConfig::new(capacity), strategy)
    }

    /// Creates an empty set from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or the slot array cannot be
    /// allocated. Use [`OwningSet::try_with_config`] to handle these cases.
    pub fn with_config(config: ProbeSetConfig, strategy: S) -> Self {
        Self::try_with_config(config, strategy)
            .unwrap_or_else(|e| panic!("Failed to create owning set: {e}"))
    }

    /// Creates an empty set from a configuration, reporting failures.
    ///
    /// # Returns
    ///
    /// * `Ok(OwningSet)` on success
    /// * `Err(ProbeSetError)` if the capacity is zero or allocation fails
    pub fn try_with_config(config: ProbeSetConfig, strategy: S) -> Result<Self> {
        Ok(Self {
            table: ProbeTable::try_with_config(&config)?,
            strategy,
        })
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns whether further inserts will be ignored.
    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    /// Returns the number of tombstoned slots.
    pub fn tombstones(&self) -> usize {
        self.table.tombstones()
    }

    /// Returns the fraction of slots holding live elements.
    pub fn load_factor(&self) -> f64 {
        self.table.len() as f64 / self.table.capacity() as f64
    }

    /// Returns the state of the slot at `index`, or `None` past the end.
    pub fn slot_state(&self, index: usize) -> Option<SlotState> {
        self.table.slot_state(index)
    }

    /// Copies `element` into the set if it is not already present.
    ///
    /// Inserting into a full set, or inserting an element equal to one
    /// already stored, leaves the set unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the element was stored, `false` otherwise.
    pub fn add(&mut self, element: &T) -> bool {
        let strategy = &self.strategy;
        let hash = strategy.hash(element);
        self.table.insert_with(
            hash,
            |stored| strategy.equals(element, borrowed::<T>(stored)),
            || element.to_owned(),
        )
    }

    /// Removes the element equal to `element` and drops the set's copy.
    ///
    /// # Returns
    ///
    /// `true` if an element was removed, `false` if none was present.
    pub fn remove(&mut self, element: &T) -> bool {
        let strategy = &self.strategy;
        let hash = strategy.hash(element);
        self.table
            .remove_with(hash, |stored| strategy.equals(element, borrowed::<T>(stored)))
            .is_some()
    }

    /// Looks up the stored copy equal to `element`.
    pub fn find(&self, element: &T) -> Option<&T> {
        let strategy = &self.strategy;
        self.table
            .find_with(strategy.hash(element), |stored| {
                strategy.equals(element, borrowed::<T>(stored))
            })
            .map(borrowed::<T>)
    }

    /// Returns whether an element equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Iterates over the stored elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.table.iter().map(borrowed::<T>)
    }

    /// Collects every stored element in ascending slot order.
    ///
    /// The returned vector is the caller's; the elements it points to remain
    /// owned by the set, and the borrow keeps the set from being modified
    /// while the vector is alive.
    pub fn export_all(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.extend(self.iter());
        elements
    }
}

fn borrowed<T: ToOwned + ?Sized>(owned: &T::Owned) -> &T {
    owned.borrow()
}

impl<T, S> fmt::Debug for OwningSet<T, S>
where
    T: ToOwned + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwningSet")
            .field("capacity", &self.table.capacity())
            .field("len", &self.table.len())
            .field("tombstones", &self.table.tombstones())
            .finish()
    }
}
