//! Data structures provided by the crate.
//!
//! All implementations adhere to the same requirements:
//! - No unsafe code
//! - Fixed memory footprint chosen at construction
//! - Single-threaded; callers serialize access when sharing

pub mod probe_set;

// Re-export common data structures
pub use probe_set::{
    OwningSet, ProbeSetConfig, ProbeSetError, ReferencingSet, SetStrategy, SlotState, StringSet,
};
