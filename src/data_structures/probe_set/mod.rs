// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fixed-capacity hash sets built on open addressing with linear probing.
//!
//! Two set types share one probing core:
//!
//! - [`OwningSet`] copies every element it stores and frees the copy on
//!   removal. [`StringSet`] is the text flavour, keyed by the polynomial
//!   [`StrHash`].
//! - [`ReferencingSet`] stores caller-owned references as given and never
//!   frees them.
//!
//! # Features
//!
//! - Capacity is fixed at creation; inserts into a full set are ignored
//! - Removals leave tombstones, and inserts reuse the first tombstone on the
//!   probe path
//! - Hashing and equality are injected as a [`SetStrategy`]
//! - Enumeration follows physical slot order
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use lanai_set::data_structures::probe_set::{SlotState, StringSet};
//!
//! let mut set = StringSet::new(4);
//! set.add("cat");
//! set.add("dog");
//! set.add("bird");
//! assert_eq!(set.len(), 3);
//!
//! // "dog" hashes to slot 0; removing it leaves a tombstone
//! set.remove("dog");
//! assert_eq!(set.find("dog"), None);
//! assert_eq!(set.slot_state(0), Some(SlotState::Deleted));
//!
//! // "fish" also starts at slot 0 and takes over the tombstone
//! set.add("fish");
//! assert_eq!(set.slot_state(0), Some(SlotState::Filled));
//! assert_eq!(set.export_all(), vec!["fish", "bird", "cat"]);
//! ```
//!
//! # Caller-supplied functions
//!
//! ```
//! use lanai_set::data_structures::probe_set::ReferencingSet;
//!
//! let ids = [3u32, 14, 15];
//! let mut set = ReferencingSet::with_functions(
//!     8,
//!     |id: &u32| u64::from(*id),
//!     |a: &u32, b: &u32| a == b,
//! );
//! for id in &ids {
//!     set.add(id);
//! }
//! // The set hands back the caller's own reference
//! assert!(std::ptr::eq(set.find(&14).unwrap(), &ids[1]));
//! ```

// Module declarations
mod config;
mod error;
mod hash;
mod owning;
mod referencing;
mod table;

// Re-exports
pub use config::ProbeSetConfig;
pub use error::{ProbeSetError, Result};
pub use hash::{FnStrategy, FnvStrategy, SetStrategy, StrHash};
pub use owning::{OwningSet, StringSet};
pub use referencing::ReferencingSet;
pub use table::SlotState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut set = StringSet::new(8);

        assert!(set.add("hello"));
        assert!(set.add("world"));

        assert_eq!(set.find("hello"), Some("hello"));
        assert_eq!(set.find("world"), Some("world"));
        assert_eq!(set.find("test"), None);

        assert!(!set.add("hello"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_custom_configuration() {
        let config = ProbeSetConfig::default().with_capacity(1_000);
        let mut set = OwningSet::<u64>::with_config(config, FnvStrategy);

        assert!(set.add(&42));
        assert_eq!(set.find(&42), Some(&42));
        assert_eq!(set.capacity(), 1_000);
    }
}
