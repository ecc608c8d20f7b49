// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Probe set that stores borrowed references and never owns its elements.

use std::fmt;

use crate::data_structures::probe_set::config::ProbeSetConfig;
use crate::data_structures::probe_set::error::Result;
use crate::data_structures::probe_set::hash::{FnStrategy, FnvStrategy, SetStrategy};
use crate::data_structures::probe_set::table::{ProbeTable, SlotState};

/// A fixed-capacity hash set of references to caller-owned elements.
///
/// The set stores `&'a T` exactly as given. It never copies or frees the
/// elements; the borrow checker guarantees they outlive the set. Lookups and
/// exports hand back the very references that were inserted.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the referenced elements.
/// * `T` - The element type.
/// * `S` - The hash/equality strategy. Defaults to [`FnvStrategy`].
pub struct ReferencingSet<'a, T: ?Sized, S = FnvStrategy> {
    table: ProbeTable<&'a T>,
    strategy: S,
}

impl<'a, T, H, E> ReferencingSet<'a, T, FnStrategy<H, E>>
where
    T: ?Sized,
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    /// Creates an empty set driven by a caller-supplied hash function and
    /// equality function.
    ///
    /// Elements that compare equal must hash identically.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the slot array cannot be allocated.
    pub fn with_functions(capacity: usize, hash_fn: H, equals_fn: E) -> Self {
        Self::with_strategy(capacity, FnStrategy::new(hash_fn, equals_fn))
    }
}

impl<'a, T, S> ReferencingSet<'a, T, S>
where
    T: ?Sized,
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
    /// allocated. Use [`ReferencingSet::try_with_config`] to handle these cases.
    pub fn with_config(config: ProbeSetConfig, strategy: S) -> Self {
        Self::try_with_config(config, strategy)
            .unwrap_or_else(|e| panic!("Failed to create referencing set: {e}"))
    }

    /// Creates an empty set from a configuration, reporting failures.
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

    /// Stores the reference if no equal element is present and the set is
    /// not full.
    ///
    /// # Returns
    ///
    /// `true` if the reference was stored, `false` otherwise.
    pub fn add(&mut self, element: &'a T) -> bool {
        let strategy = &self.strategy;
        let hash = strategy.hash(element);
        self.table
            .insert_with(hash, |stored| strategy.equals(element, stored), || element)
    }

    /// Forgets the reference equal to `element`. The element itself is untouched.
    ///
    /// # Returns
    ///
    /// `true` if a reference was removed, `false` if none was present.
    pub fn remove(&mut self, element: &T) -> bool {
        let strategy = &self.strategy;
        let hash = strategy.hash(element);
        self.table
            .remove_with(hash, |stored| strategy.equals(element, stored))
            .is_some()
    }

    /// Returns the stored reference equal to `element`.
    pub fn find(&self, element: &T) -> Option<&'a T> {
        let strategy = &self.strategy;
        self.table
            .find_with(strategy.hash(element), |stored| strategy.equals(element, stored))
            .copied()
    }

    /// Returns whether an element equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Iterates over the stored references in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.table.iter().copied()
    }

    /// Collects every stored reference in ascending slot order.
    pub fn export_all(&self) -> Vec<&'a T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.extend(self.iter());
        elements
    }
}

impl<T: ?Sized, S> fmt::Debug for ReferencingSet<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferencingSet")
            .field("capacity", &self.table.capacity())
            .field("len", &self.table.len())
            .field("tombstones", &self.table.tombstones())
            .finish()
    }
}
