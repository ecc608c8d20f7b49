//! Test utilities and fixtures for the probe sets.
//!
//! This module provides reusable proptest strategies, a drop-counting element
//! type for ownership checks, and tracing setup for tests.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

/// Maximum number of operations in a generated sequence.
const MAX_OPERATIONS: usize = 200;

thread_local! {
    static LIVE_TRACKED: Cell<isize> = Cell::new(0);
}

/// Install a test-friendly tracing subscriber.
///
/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An element that counts how many instances are alive on this thread.
///
/// Every construction or clone increments the counter and every drop
/// decrements it, so a set that leaks or double-frees its copies shows up as
/// a mismatch in [`live_tracked`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Tracked {
    /// Identity used for hashing and equality.
    pub id: u32,
}

impl Tracked {
    /// Create a new tracked element.
    pub fn new(id: u32) -> Self {
        LIVE_TRACKED.with(|live| live.set(live.get() + 1));
        Self { id }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE_TRACKED.with(|live| live.set(live.get() - 1));
    }
}

/// Number of [`Tracked`] instances currently alive on this thread.
pub fn live_tracked() -> isize {
    LIVE_TRACKED.with(Cell::get)
}

/// A single mutation applied to a set under test.
#[derive(Debug, Clone)]
pub enum SetOperation<T> {
    /// Insert the element.
    Add(T),
    /// Remove the element.
    Remove(T),
}

/// Generate short words over a tiny alphabet so that collisions and
/// repeated keys are common.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[a-d]{1,3}".boxed()
}

/// Generate a sequence of adds and removes over the given element strategy.
///
/// Adds are weighted heavier so that sets regularly fill up.
pub fn operations_strategy<T>(element: BoxedStrategy<T>) -> BoxedStrategy<Vec<SetOperation<T>>>
where
    T: std::fmt::Debug + Clone + 'static,
{
    let operation = prop_oneof![
        3 => element.clone().prop_map(SetOperation::Add),
        2 => element.prop_map(SetOperation::Remove),
    ];
    proptest::collection::vec(operation, 0..MAX_OPERATIONS).boxed()
}
